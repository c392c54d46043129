// file: src/utils/validation.rs
// description: data validation utilities and index invariant checks
// reference: input validation patterns

use crate::error::{Result, SearchError};
use crate::index::SearchIndex;
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(SearchError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(SearchError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_markdown_extension(path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("md") | Some("markdown") => Ok(()),
            _ => Err(SearchError::Validation(format!(
                "File is not a markdown file: {}",
                path.display()
            ))),
        }
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(SearchError::Validation("Content is empty".to_string()));
        }
        Ok(())
    }

    /// Collect violations of the index invariants: document URLs unique
    /// within the index, section ids unique within their document.
    pub fn index_invariant_violations(index: &SearchIndex) -> Vec<String> {
        let mut violations = Vec::new();

        let mut urls = HashSet::new();
        for doc in &index.documents {
            if !urls.insert(doc.url.as_str()) {
                violations.push(format!("duplicate document URL: {}", doc.url));
            }

            let mut ids = HashSet::new();
            for section in &doc.sections {
                if !ids.insert(section.id.as_str()) {
                    violations.push(format!(
                        "duplicate section id '{}' in {}",
                        section.id, doc.url
                    ));
                }
            }
        }

        violations
    }

    /// Loaded artifacts are consulted read-only, so violations are reported
    /// rather than fatal; queries still degrade gracefully over them.
    pub fn warn_on_invariant_violations(index: &SearchIndex) {
        for violation in Self::index_invariant_violations(index) {
            warn!("Index invariant violated: {}", violation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, Section};

    #[test]
    fn test_validate_content_not_empty() {
        assert!(Validator::validate_content_not_empty("text").is_ok());
        assert!(Validator::validate_content_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_markdown_extension() {
        assert!(Validator::validate_markdown_extension(Path::new("a.md")).is_ok());
        assert!(Validator::validate_markdown_extension(Path::new("a.markdown")).is_ok());
        assert!(Validator::validate_markdown_extension(Path::new("a.html")).is_err());
    }

    #[test]
    fn test_duplicate_urls_detected() {
        let index = SearchIndex::new(vec![
            Document::new("/a/".into(), "A".into(), "x".into()),
            Document::new("/a/".into(), "B".into(), "y".into()),
        ]);

        let violations = Validator::index_invariant_violations(&index);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("/a/"));
    }

    #[test]
    fn test_duplicate_section_ids_detected() {
        let doc = Document::new("/a/".into(), "A".into(), "x".into()).with_sections(vec![
            Section::new("s".into(), "S1".into(), "one".into()),
            Section::new("s".into(), "S2".into(), "two".into()),
        ]);
        let index = SearchIndex::new(vec![doc]);

        let violations = Validator::index_invariant_violations(&index);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_clean_index_has_no_violations() {
        let index = SearchIndex::new(vec![
            Document::new("/a/".into(), "A".into(), "x".into()),
            Document::new("/b/".into(), "B".into(), "y".into()),
        ]);
        assert!(Validator::index_invariant_violations(&index).is_empty());
    }
}
