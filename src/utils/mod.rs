// file: src/utils/mod.rs
// description: module exports for shared utilities

pub mod logging;
pub mod validation;

pub use validation::Validator;
