// file: src/builder/scanner.rs
// description: Directory walking and markdown page discovery with filtering
// reference: https://docs.rs/walkdir

use crate::config::CorpusConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct CorpusScanner {
    config: CorpusConfig,
}

#[derive(Debug, Clone)]
pub struct ScannedPage {
    pub path: PathBuf,
    pub relative_path: String,
    pub size: u64,
}

impl CorpusScanner {
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedPage>> {
        info!("Scanning docs directory: {}", root.display());
        let mut pages = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if self.should_skip(path) {
                debug!("Skipping file: {}", path.display());
                continue;
            }

            if let Some(extension) = path.extension().and_then(|e| e.to_str())
                && matches!(extension, "md" | "markdown")
                && let Ok(metadata) = entry.metadata()
            {
                let size = metadata.len();
                let max_size = (self.config.max_file_size_mb * 1024 * 1024) as u64;

                if size > max_size {
                    debug!(
                        "Skipping large file ({} MB): {}",
                        size / 1024 / 1024,
                        path.display()
                    );
                    continue;
                }

                let relative_path = path
                    .strip_prefix(root)
                    .unwrap_or(path)
                    .to_string_lossy()
                    .replace('\\', "/");

                pages.push(ScannedPage {
                    path: path.to_path_buf(),
                    relative_path,
                    size,
                });
            }
        }

        info!("Found {} markdown pages", pages.len());
        Ok(pages)
    }

    fn should_skip(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.config.skip_patterns {
            if pattern.contains('*') {
                let pattern_without_star = pattern.replace('*', "");
                if path_str.contains(&pattern_without_star) {
                    return true;
                }
            } else if path_str.contains(pattern) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use tempfile::TempDir;

    fn corpus_config() -> CorpusConfig {
        Config::default_config().corpus
    }

    #[test]
    fn test_scan_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("intro.md"), "# Intro").unwrap();
        fs::write(temp.path().join("styles.css"), "body {}").unwrap();

        let scanner = CorpusScanner::new(corpus_config());
        let pages = scanner.scan_directory(temp.path()).unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].relative_path, "intro.md");
    }

    #[test]
    fn test_nested_pages_use_relative_paths() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("guide")).unwrap();
        fs::write(temp.path().join("guide/install.md"), "# Install").unwrap();

        let scanner = CorpusScanner::new(corpus_config());
        let pages = scanner.scan_directory(temp.path()).unwrap();

        assert_eq!(pages[0].relative_path, "guide/install.md");
    }

    #[test]
    fn test_skip_patterns() {
        let mut config = corpus_config();
        config.skip_patterns = vec!["drafts/*".to_string(), "README.md".to_string()];
        let scanner = CorpusScanner::new(config);

        assert!(scanner.should_skip(Path::new("drafts/wip.md")));
        assert!(scanner.should_skip(Path::new("README.md")));
        assert!(!scanner.should_skip(Path::new("guide/install.md")));
    }
}
