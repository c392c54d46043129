// file: src/builder/mod.rs
// description: module exports for corpus scanning and index building

pub mod indexer;
pub mod progress;
pub mod scanner;

pub use indexer::IndexBuilder;
pub use progress::{BuildProgress, BuildStats};
pub use scanner::{CorpusScanner, ScannedPage};
