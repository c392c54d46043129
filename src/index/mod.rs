// file: src/index/mod.rs
// description: module exports for the search index artifact and loader

pub mod artifact;
pub mod loader;

pub use artifact::SearchIndex;
pub use loader::{IndexLoader, IndexState};
