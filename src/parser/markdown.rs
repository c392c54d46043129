// file: src/parser/markdown.rs
// description: markdown parsing into searchable page outlines
// reference: https://docs.rs/pulldown-cmark

use crate::error::Result;
use crate::models::Section;
use crate::parser::slug::slugify;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use std::collections::HashMap;

pub struct MarkdownParser;

/// Searchable outline of one markdown page: the page title (first h1),
/// the full plain-text content, and one section per sub-heading holding
/// the text until the next heading.
#[derive(Debug, Clone)]
pub struct PageOutline {
    pub title: Option<String>,
    pub content: String,
    pub sections: Vec<Section>,
}

#[derive(Debug)]
struct SectionDraft {
    title: String,
    content: String,
}

impl MarkdownParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, content: &str) -> Result<PageOutline> {
        let parser = Parser::new(content);

        let mut title: Option<String> = None;
        let mut plain_text = String::new();
        let mut drafts: Vec<SectionDraft> = Vec::new();

        let mut current_heading: Option<(HeadingLevel, String)> = None;
        let mut open_section: Option<SectionDraft> = None;

        for event in parser {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    current_heading = Some((level, String::new()));
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((level, text)) = current_heading.take() {
                        let text = text.trim().to_string();
                        plain_text.push_str(&text);
                        plain_text.push(' ');

                        if level == HeadingLevel::H1 {
                            // Any heading closes the running section; the h1
                            // itself starts none and doubles as the title.
                            if let Some(done) = open_section.take() {
                                drafts.push(done);
                            }
                            if title.is_none() {
                                title = Some(text);
                            }
                        } else {
                            if let Some(done) = open_section.take() {
                                drafts.push(done);
                            }
                            open_section = Some(SectionDraft {
                                title: text,
                                content: String::new(),
                            });
                        }
                    }
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, ref mut heading_text)) = current_heading {
                        heading_text.push_str(&text);
                    } else {
                        plain_text.push_str(&text);
                        plain_text.push(' ');

                        if let Some(ref mut section) = open_section {
                            section.content.push_str(&text);
                            section.content.push(' ');
                        }
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    plain_text.push(' ');
                    if let Some(ref mut section) = open_section {
                        section.content.push(' ');
                    }
                }
                _ => {}
            }
        }

        if let Some(done) = open_section.take() {
            drafts.push(done);
        }

        Ok(PageOutline {
            title,
            content: normalize_whitespace(&plain_text),
            sections: assign_anchors(drafts),
        })
    }
}

/// Turn drafts into sections with unique anchor ids. Duplicate headings get
/// `-2`, `-3`, ... suffixes so ids stay unique within the document.
fn assign_anchors(drafts: Vec<SectionDraft>) -> Vec<Section> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut sections = Vec::with_capacity(drafts.len());

    for draft in drafts {
        let base = slugify(&draft.title);
        let count = seen.entry(base.clone()).or_insert(0);
        *count += 1;

        let id = if *count == 1 {
            base
        } else {
            format!("{}-{}", base, count)
        };

        sections.push(Section::new(
            id,
            draft.title,
            normalize_whitespace(&draft.content),
        ));
    }

    sections
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}
