// file: src/parser/mod.rs
// description: module exports for markdown corpus parsing

pub mod frontmatter;
pub mod markdown;
pub mod slug;

pub use frontmatter::{FrontmatterParser, PageFrontmatter};
pub use markdown::{MarkdownParser, PageOutline};
pub use slug::slugify;
