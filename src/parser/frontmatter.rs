// file: src/parser/frontmatter.rs
// description: YAML frontmatter extraction from markdown pages
// reference: https://docs.rs/yaml-rust

use crate::error::{Result, SearchError};
use yaml_rust::{Yaml, YamlLoader};

pub struct FrontmatterParser;

/// Page-level metadata the index builder cares about. `title` overrides the
/// first heading; `permalink` overrides the path-derived URL.
#[derive(Debug, Clone, Default)]
pub struct PageFrontmatter {
    pub title: Option<String>,
    pub permalink: Option<String>,
}

impl FrontmatterParser {
    pub fn new() -> Self {
        Self
    }

    /// Split a page into its frontmatter and body. Returns `None` when the
    /// page carries no frontmatter block.
    pub fn extract(&self, content: &str) -> Result<Option<(PageFrontmatter, String)>> {
        if !content.starts_with("---") {
            return Ok(None);
        }

        let parts: Vec<&str> = content.splitn(3, "---").collect();

        if parts.len() < 3 {
            return Ok(None);
        }

        let yaml_content = parts[1].trim();
        let body = parts[2].trim();

        let docs =
            YamlLoader::load_from_str(yaml_content).map_err(|e| SearchError::MarkdownParse {
                file: "frontmatter".to_string(),
                message: format!("YAML parse error: {}", e),
            })?;

        if docs.is_empty() {
            return Ok(None);
        }

        let mut frontmatter = PageFrontmatter::default();

        if let Yaml::Hash(hash) = &docs[0] {
            for (key, value) in hash {
                let (Yaml::String(key), Yaml::String(value)) = (key, value) else {
                    continue;
                };
                match key.as_str() {
                    "title" => frontmatter.title = Some(value.clone()),
                    "permalink" => frontmatter.permalink = Some(value.clone()),
                    _ => {}
                }
            }
        }

        Ok(Some((frontmatter, body.to_string())))
    }
}

impl Default for FrontmatterParser {
    fn default() -> Self {
        Self::new()
    }
}
