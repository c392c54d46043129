// file: src/models/document.rs
// description: indexed document and section models with serialization
// reference: internal data structures

use serde::{Deserialize, Serialize};

// Every field is defaulted so a sparse entry degrades instead of failing
// the whole artifact load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub url: String,
    pub title: String,
    pub content: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl Document {
    pub fn new(url: String, title: String, content: String) -> Self {
        Self {
            url,
            title,
            content,
            sections: Vec::new(),
        }
    }

    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// In-page anchor URL for one of this document's sections.
    pub fn section_url(&self, section: &Section) -> String {
        format!("{}#{}", self.url, section.id)
    }
}

impl Section {
    pub fn new(id: String, title: String, content: String) -> Self {
        Self { id, title, content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new(
            "/guide/intro/".to_string(),
            "Introduction".to_string(),
            "Welcome to the guide".to_string(),
        );

        assert_eq!(doc.url, "/guide/intro/");
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_section_url() {
        let section = Section::new(
            "getting-started".to_string(),
            "Getting Started".to_string(),
            "First steps".to_string(),
        );
        let doc = Document::new(
            "/guide/intro/".to_string(),
            "Introduction".to_string(),
            String::new(),
        )
        .with_sections(vec![section]);

        assert_eq!(
            doc.section_url(&doc.sections[0]),
            "/guide/intro/#getting-started"
        );
    }

    #[test]
    fn test_missing_sections_field_tolerated() {
        let json = r#"{"url": "/a/", "title": "A", "content": "text"}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_sparse_document_tolerated() {
        let doc: Document = serde_json::from_str(r#"{"title": "Bare"}"#).unwrap();
        assert_eq!(doc.title, "Bare");
        assert!(doc.url.is_empty());
        assert!(doc.content.is_empty());
    }
}
