// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod builder;
pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod parser;
pub mod render;
pub mod search;
pub mod utils;

pub use builder::{BuildStats, CorpusScanner, IndexBuilder, ScannedPage};
pub use config::{ArtifactConfig, Config, CorpusConfig, SearchConfig};
pub use error::{Result, SearchError};
pub use index::{IndexLoader, IndexState, SearchIndex};
pub use models::{Document, ResultKind, SearchResult, Section};
pub use parser::{FrontmatterParser, MarkdownParser, PageOutline, slugify};
pub use render::{escape_html, render_results};
pub use search::{Debouncer, QueryResponse, query};
