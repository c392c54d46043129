// file: src/models/search_result.rs
// description: Search result model with relevance scores
// reference: Used for ranked substring search results

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Document,
    Section,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Title of the matched document
    pub title: String,

    /// Section title, present only for section-kind results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    /// Target URL (document URL, with `#anchor` appended for section hits)
    pub url: String,

    /// Excerpt with every query occurrence wrapped in a highlight marker
    pub excerpt: String,

    /// Relevance score (higher ranks first)
    pub score: u32,

    /// Whether the hit is a whole document or a sub-section
    pub kind: ResultKind,
}

impl SearchResult {
    pub fn document(title: String, url: String, excerpt: String, score: u32) -> Self {
        Self {
            title,
            section: None,
            url,
            excerpt,
            score,
            kind: ResultKind::Document,
        }
    }

    pub fn section(
        title: String,
        section_title: String,
        url: String,
        excerpt: String,
        score: u32,
    ) -> Self {
        Self {
            title,
            section: Some(section_title),
            url,
            excerpt,
            score,
            kind: ResultKind::Section,
        }
    }

    /// Breadcrumb label shown in the results panel, e.g. "Guide › Install".
    pub fn breadcrumb(&self) -> String {
        match &self.section {
            Some(section) => format!("{} › {}", self.title, section),
            None => self.title.clone(),
        }
    }

    /// Format as a summary string for terminal display
    pub fn format_summary(&self, max_excerpt_len: usize) -> String {
        let excerpt: String = if self.excerpt.chars().count() > max_excerpt_len {
            let truncated: String = self.excerpt.chars().take(max_excerpt_len).collect();
            format!("{}...", truncated)
        } else {
            self.excerpt.clone()
        };

        format!(
            "Score: {:2} | {} ({})\n{}\n",
            self.score,
            self.breadcrumb(),
            self.url,
            excerpt
        )
    }
}
