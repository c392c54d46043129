// file: src/index/loader.rs
// description: one-shot index artifact loading with fail-soft degradation
// reference: https://docs.rs/reqwest

use crate::error::Result;
use crate::index::SearchIndex;
use crate::utils::Validator;
use std::path::Path;
use tracing::{info, warn};

/// Load state of the index artifact. Transitions NotLoaded -> Loading ->
/// Ready exactly once at startup; a failed load still lands on Ready with
/// zero documents so the consumer degrades instead of erroring.
#[derive(Debug, Clone, Default)]
pub enum IndexState {
    #[default]
    NotLoaded,
    Loading,
    Ready(SearchIndex),
}

impl IndexState {
    pub fn is_ready(&self) -> bool {
        matches!(self, IndexState::Ready(_))
    }

    pub fn index(&self) -> Option<&SearchIndex> {
        match self {
            IndexState::Ready(index) => Some(index),
            _ => None,
        }
    }
}

/// Fetches the index artifact once from its well-known path. All failure
/// paths degrade to an empty ready index rather than propagating.
#[derive(Debug, Clone)]
pub struct IndexLoader {
    client: reqwest::Client,
}

impl IndexLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the artifact over HTTP. Never fails: network errors and
    /// malformed payloads yield a ready index with zero documents.
    pub async fn fetch(&self, url: &str) -> IndexState {
        match self.try_fetch(url).await {
            Ok(index) => {
                info!(
                    "Loaded search index from {} ({} documents)",
                    url,
                    index.document_count()
                );
                Validator::warn_on_invariant_violations(&index);
                IndexState::Ready(index)
            }
            Err(e) => {
                warn!("Failed to load search index from {}: {}", url, e);
                IndexState::Ready(SearchIndex::empty())
            }
        }
    }

    /// Read the artifact from a local file with the same fail-soft posture.
    pub fn read_file(&self, path: &Path) -> IndexState {
        match SearchIndex::from_file(path) {
            Ok(index) => {
                info!(
                    "Loaded search index from {} ({} documents)",
                    path.display(),
                    index.document_count()
                );
                Validator::warn_on_invariant_violations(&index);
                IndexState::Ready(index)
            }
            Err(e) => {
                warn!(
                    "Failed to load search index from {}: {}",
                    path.display(),
                    e
                );
                IndexState::Ready(SearchIndex::empty())
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<SearchIndex> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        SearchIndex::from_slice(&bytes)
    }
}

impl Default for IndexLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_initial_state_not_ready() {
        let state = IndexState::default();
        assert!(!state.is_ready());
        assert!(state.index().is_none());
    }

    #[test]
    fn test_read_file_success() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("search-index.json");
        fs::write(
            &path,
            r#"{"documents": [{"url": "/a/", "title": "A", "content": "text", "sections": []}]}"#,
        )
        .unwrap();

        let state = IndexLoader::new().read_file(&path);
        assert!(state.is_ready());
        assert_eq!(state.index().unwrap().document_count(), 1);
    }

    #[test]
    fn test_missing_file_degrades_to_empty_ready() {
        let dir = tempdir().unwrap();
        let state = IndexLoader::new().read_file(&dir.path().join("missing.json"));

        assert!(state.is_ready());
        assert_eq!(state.index().unwrap().document_count(), 0);
    }

    #[test]
    fn test_malformed_payload_degrades_to_empty_ready() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("search-index.json");
        fs::write(&path, "<!doctype html>").unwrap();

        let state = IndexLoader::new().read_file(&path);
        assert!(state.is_ready());
        assert_eq!(state.index().unwrap().document_count(), 0);
    }

    #[tokio::test]
    async fn test_fetch_unreachable_degrades_to_empty_ready() {
        let loader = IndexLoader::new();
        let state = loader.fetch("http://127.0.0.1:1/search-index.json").await;

        assert!(state.is_ready());
        assert_eq!(state.index().unwrap().document_count(), 0);
    }
}
