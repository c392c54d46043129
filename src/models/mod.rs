// file: src/models/mod.rs
// description: module exports for core data models

pub mod document;
pub mod search_result;

pub use document::{Document, Section};
pub use search_result::{ResultKind, SearchResult};
