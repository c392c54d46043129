// file: src/builder/indexer.rs
// description: builds the search index artifact from a markdown corpus
// reference: corpus scan -> parse -> document pipeline

use crate::builder::progress::{BuildProgress, BuildStats};
use crate::builder::scanner::{CorpusScanner, ScannedPage};
use crate::config::Config;
use crate::error::Result;
use crate::index::SearchIndex;
use crate::models::Document;
use crate::parser::{FrontmatterParser, MarkdownParser};
use crate::utils::Validator;
use std::collections::HashSet;
use std::fs;
use tracing::{debug, warn};

pub struct IndexBuilder {
    config: Config,
    scanner: CorpusScanner,
    frontmatter: FrontmatterParser,
    markdown: MarkdownParser,
}

impl IndexBuilder {
    pub fn new(config: Config) -> Self {
        let scanner = CorpusScanner::new(config.corpus.clone());
        Self {
            config,
            scanner,
            frontmatter: FrontmatterParser::new(),
            markdown: MarkdownParser::new(),
        }
    }

    /// Scan the docs directory and build the in-memory index. Pages that
    /// fail to read or parse are logged and skipped; the build itself only
    /// fails when the corpus directory is unusable.
    pub fn build(&self, limit: Option<usize>, colored: bool) -> Result<(SearchIndex, BuildStats)> {
        Validator::validate_directory(&self.config.corpus.docs_dir)?;

        let mut pages = self.scanner.scan_directory(&self.config.corpus.docs_dir)?;
        if let Some(limit) = limit {
            pages.truncate(limit);
        }

        let mut stats = BuildStats::new();
        stats.pages_scanned = pages.len();

        let progress = BuildProgress::new(pages.len(), colored);
        let mut documents = Vec::with_capacity(pages.len());
        let mut seen_urls: HashSet<String> = HashSet::new();

        for page in &pages {
            match self.index_page(page) {
                Ok(doc) => {
                    if !seen_urls.insert(doc.url.clone()) {
                        warn!(
                            "Skipping {}: duplicate URL {}",
                            page.relative_path, doc.url
                        );
                        stats.pages_failed += 1;
                    } else {
                        stats.documents_indexed += 1;
                        stats.sections_indexed += doc.sections.len();
                        stats.total_bytes_processed += page.size;
                        documents.push(doc);
                    }
                }
                Err(e) => {
                    warn!("Failed to index {}: {}", page.relative_path, e);
                    stats.pages_failed += 1;
                }
            }
            progress.page_done(&page.relative_path);
        }

        progress.finish(&mut stats);

        let index = SearchIndex::new(documents);
        Validator::warn_on_invariant_violations(&index);
        Ok((index, stats))
    }

    fn index_page(&self, page: &ScannedPage) -> Result<Document> {
        let raw = fs::read_to_string(&page.path)?;

        let (frontmatter, body) = match self.frontmatter.extract(&raw)? {
            Some((frontmatter, body)) => (frontmatter, body),
            None => (Default::default(), raw),
        };

        let outline = self.markdown.parse(&body)?;
        Validator::validate_content_not_empty(&outline.content)?;

        let url = match frontmatter.permalink {
            Some(permalink) => permalink,
            None => self.url_from_relative_path(&page.relative_path),
        };

        let title = frontmatter
            .title
            .or(outline.title)
            .unwrap_or_else(|| title_from_path(&page.relative_path));

        debug!("Indexed {} as {}", page.relative_path, url);
        Ok(Document::new(url, title, outline.content).with_sections(outline.sections))
    }

    /// Derive the page URL from its path the way the site generator does:
    /// `guide/install.md` -> `/guide/install/`, `guide/index.md` -> `/guide/`.
    fn url_from_relative_path(&self, relative_path: &str) -> String {
        let without_ext = relative_path
            .strip_suffix(".markdown")
            .or_else(|| relative_path.strip_suffix(".md"))
            .unwrap_or(relative_path);

        // Only a whole `index` component collapses to its directory.
        let route = if without_ext == "index" {
            ""
        } else if let Some(dir) = without_ext.strip_suffix("/index") {
            dir
        } else {
            without_ext
        }
        .trim_end_matches('/');

        let base = self.config.corpus.base_url.trim_end_matches('/');
        if route.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/{}/", base, route)
        }
    }
}

fn title_from_path(relative_path: &str) -> String {
    relative_path
        .rsplit('/')
        .next()
        .unwrap_or(relative_path)
        .trim_end_matches(".markdown")
        .trim_end_matches(".md")
        .to_string()
}
