// file: src/search/mod.rs
// description: module exports for query ranking, excerpts and debouncing

pub mod debounce;
pub mod engine;
pub mod excerpt;

pub use debounce::Debouncer;
pub use engine::{QueryResponse, query};
pub use excerpt::extract_excerpt;
