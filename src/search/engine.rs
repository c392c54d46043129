// file: src/search/engine.rs
// description: substring ranking over the loaded index
// reference: linear-scan scoring with fixed relevance weights

use crate::index::{IndexState, SearchIndex};
use crate::models::SearchResult;
use crate::search::excerpt::{extract_excerpt, literal_matcher};

/// Minimum query length (after trimming) before a search runs.
pub const MIN_QUERY_LEN: usize = 2;

/// Ranked results are truncated to this many entries.
pub const MAX_RESULTS: usize = 15;

/// Relevance weights. These are observable contract, not tuning knobs:
/// consumers key UI behavior off the exact values.
pub const SCORE_DOC_TITLE: u32 = 10;
pub const SCORE_SECTION_TITLE: u32 = 8;
pub const SCORE_DOC_CONTENT: u32 = 5;
pub const SCORE_SECTION_CONTENT: u32 = 3;

/// Outcome of querying through an [`IndexState`].
#[derive(Debug, Clone)]
pub enum QueryResponse {
    /// The artifact has not finished loading; the UI shows a loading hint.
    NotReady,
    Results(Vec<SearchResult>),
}

impl IndexState {
    /// Query through the load state machine: before the index is ready the
    /// caller gets a "not ready" signal instead of an error or empty set.
    pub fn query(&self, query_text: &str) -> QueryResponse {
        match self.index() {
            Some(index) => QueryResponse::Results(query(index, query_text)),
            None => QueryResponse::NotReady,
        }
    }
}

/// Rank documents and sections against a free-text query.
///
/// Matching is case-insensitive substring containment. A title match emits
/// a document-kind result and suppresses the content branch; each section
/// is scored independently and links to its in-page anchor. Results are
/// stable-sorted by descending score and truncated to [`MAX_RESULTS`].
/// Malformed input never panics; it degrades to an empty result set.
pub fn query(index: &SearchIndex, query_text: &str) -> Vec<SearchResult> {
    let trimmed = query_text.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = trimmed.to_lowercase();
    let Some(matcher) = literal_matcher(trimmed) else {
        return Vec::new();
    };

    let mut results = Vec::new();

    for doc in &index.documents {
        let title_match = doc.title.to_lowercase().contains(&needle);
        let content_match = doc.content.to_lowercase().contains(&needle);

        if title_match {
            results.push(SearchResult::document(
                doc.title.clone(),
                doc.url.clone(),
                extract_excerpt(&doc.content, &matcher),
                SCORE_DOC_TITLE,
            ));
        } else if content_match {
            results.push(SearchResult::document(
                doc.title.clone(),
                doc.url.clone(),
                extract_excerpt(&doc.content, &matcher),
                SCORE_DOC_CONTENT,
            ));
        }

        for section in &doc.sections {
            let section_title_match = section.title.to_lowercase().contains(&needle);
            let section_content_match = section.content.to_lowercase().contains(&needle);

            if section_title_match || section_content_match {
                results.push(SearchResult::section(
                    doc.title.clone(),
                    section.title.clone(),
                    doc.section_url(section),
                    extract_excerpt(&section.content, &matcher),
                    if section_title_match {
                        SCORE_SECTION_TITLE
                    } else {
                        SCORE_SECTION_CONTENT
                    },
                ));
            }
        }
    }

    // Stable sort keeps encounter order among equal scores.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(MAX_RESULTS);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, ResultKind, Section};

    fn doc(url: &str, title: &str, content: &str) -> Document {
        Document::new(url.to_string(), title.to_string(), content.to_string())
    }

    fn section(id: &str, title: &str, content: &str) -> Section {
        Section::new(id.to_string(), title.to_string(), content.to_string())
    }

    fn sample_index() -> SearchIndex {
        SearchIndex::new(vec![
            doc("/guide/", "Installation Guide", "How to install the tool").with_sections(vec![
                section("requirements", "Requirements", "A supported platform"),
                section("steps", "Steps", "Run the install script"),
            ]),
            doc("/faq/", "FAQ", "Common questions about installation"),
            doc("/changelog/", "Changelog", "Release history"),
        ])
    }

    #[test]
    fn test_short_query_returns_empty() {
        let index = sample_index();
        assert!(query(&index, "").is_empty());
        assert!(query(&index, "a").is_empty());
        assert!(query(&index, "  a  ").is_empty());
    }

    #[test]
    fn test_title_match_scores_ten_and_suppresses_content_branch() {
        let index = sample_index();
        let results = query(&index, "installation guide");

        let doc_hits: Vec<_> = results
            .iter()
            .filter(|r| r.kind == ResultKind::Document && r.url == "/guide/")
            .collect();
        assert_eq!(doc_hits.len(), 1);
        assert_eq!(doc_hits[0].score, SCORE_DOC_TITLE);
    }

    #[test]
    fn test_content_only_match_scores_five() {
        let index = sample_index();
        let results = query(&index, "common questions");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, SCORE_DOC_CONTENT);
        assert_eq!(results[0].kind, ResultKind::Document);
        assert_eq!(results[0].url, "/faq/");
    }

    #[test]
    fn test_section_title_match_links_to_anchor() {
        let index = sample_index();
        let results = query(&index, "requirements");

        let hit = results
            .iter()
            .find(|r| r.kind == ResultKind::Section)
            .unwrap();
        assert_eq!(hit.score, SCORE_SECTION_TITLE);
        assert_eq!(hit.url, "/guide/#requirements");
        assert_eq!(hit.section.as_deref(), Some("Requirements"));
    }

    #[test]
    fn test_section_content_match_scores_three() {
        let index = sample_index();
        let results = query(&index, "install script");

        let hit = results
            .iter()
            .find(|r| r.url == "/guide/#steps")
            .unwrap();
        assert_eq!(hit.score, SCORE_SECTION_CONTENT);
    }

    #[test]
    fn test_document_contributes_doc_and_section_results() {
        let index = sample_index();
        let results = query(&index, "install");

        // Guide title, the steps section content, and the FAQ content all hit.
        let urls: Vec<_> = results.iter().map(|r| r.url.as_str()).collect();
        assert!(urls.contains(&"/guide/"));
        assert!(urls.contains(&"/guide/#steps"));
        assert!(urls.contains(&"/faq/"));
    }

    #[test]
    fn test_results_sorted_descending_and_capped() {
        let docs: Vec<Document> = (0..30)
            .map(|i| doc(&format!("/page-{i}/"), &format!("Page {i}"), "shared topic"))
            .collect();
        let index = SearchIndex::new(docs);

        let results = query(&index, "shared topic");
        assert_eq!(results.len(), MAX_RESULTS);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let index = SearchIndex::new(vec![
            doc("/first/", "First", "needle here"),
            doc("/second/", "Second", "needle here"),
        ]);

        let results = query(&index, "needle");
        assert_eq!(results[0].url, "/first/");
        assert_eq!(results[1].url, "/second/");
    }

    #[test]
    fn test_exact_title_query_ranks_top() {
        let index = sample_index();
        let results = query(&index, "FAQ");

        assert_eq!(results[0].url, "/faq/");
        assert_eq!(results[0].score, SCORE_DOC_TITLE);
    }

    #[test]
    fn test_special_character_query_is_literal() {
        let index = SearchIndex::new(vec![doc("/api/", "API", "call foo(*) or bar(.)")]);

        let results = query(&index, "foo(*)");
        assert_eq!(results.len(), 1);
        assert!(results[0].excerpt.contains("<mark>foo(*)</mark>"));

        // A pattern-looking query with no literal occurrence matches nothing.
        assert!(query(&index, ".*").is_empty());
    }

    #[test]
    fn test_case_insensitive_matching() {
        let index = sample_index();
        let results = query(&index, "INSTALLATION");
        assert!(!results.is_empty());
        assert_eq!(results[0].score, SCORE_DOC_TITLE);
    }

    #[test]
    fn test_document_without_sections_contributes_none() {
        let index = SearchIndex::new(vec![doc("/plain/", "Plain", "no sections at all")]);
        let results = query(&index, "sections");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, ResultKind::Document);
    }

    #[test]
    fn test_not_ready_state_signals_instead_of_failing() {
        let state = IndexState::NotLoaded;
        assert!(matches!(state.query("install"), QueryResponse::NotReady));

        let ready = IndexState::Ready(sample_index());
        match ready.query("install") {
            QueryResponse::Results(results) => assert!(!results.is_empty()),
            QueryResponse::NotReady => panic!("ready index reported not ready"),
        }
    }
}
