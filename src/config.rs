// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub artifact: ArtifactConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    pub docs_dir: PathBuf,
    pub base_url: String,
    pub skip_patterns: Vec<String>,
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactConfig {
    pub output_path: PathBuf,
    pub pretty: bool,
    pub fetch_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub path_prefix: String,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOCSEARCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            corpus: CorpusConfig {
                docs_dir: PathBuf::from("./docs"),
                base_url: "/".to_string(),
                skip_patterns: vec![
                    "node_modules/*".to_string(),
                    ".git/*".to_string(),
                    "_site/*".to_string(),
                ],
                max_file_size_mb: 10,
            },
            artifact: ArtifactConfig {
                output_path: PathBuf::from("./_site/search-index.json"),
                pretty: false,
                fetch_url: None,
            },
            search: SearchConfig {
                debounce_ms: 300,
                path_prefix: String::new(),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.corpus.max_file_size_mb == 0 {
            return Err(SearchError::Config(
                "max_file_size_mb must be greater than 0".to_string(),
            ));
        }

        if !self.corpus.base_url.starts_with('/') {
            return Err(SearchError::Config(
                "base_url must start with '/'".to_string(),
            ));
        }

        Ok(())
    }
}
