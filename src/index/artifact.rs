// file: src/index/artifact.rs
// description: serialized search index artifact model and file IO
// reference: artifact schema { "documents": [...] }

use crate::error::{Result, SearchError};
use crate::models::Document;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// The precomputed index artifact: an ordered, immutable document corpus.
/// Built once per corpus version and consulted read-only by every query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchIndex {
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl SearchIndex {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Index with zero documents; every query against it returns no results.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let index: SearchIndex = serde_json::from_slice(bytes)?;
        Ok(index)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| SearchError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(&bytes)
    }

    pub fn save(&self, path: &Path, pretty: bool) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SearchError::FileOperation {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let payload = if pretty {
            serde_json::to_vec_pretty(self)?
        } else {
            serde_json::to_vec(self)?
        };

        fs::write(path, payload).map_err(|source| SearchError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Wrote search index with {} documents to {}",
            self.documents.len(),
            path.display()
        );
        Ok(())
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn section_count(&self) -> usize {
        self.documents.iter().map(|d| d.sections.len()).sum()
    }
}
