// file: src/builder/progress.rs
// description: progress tracking and statistics reporting for index builds
// reference: uses indicatif for progress bars and tracks build metrics

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    pub pages_scanned: usize,
    pub documents_indexed: usize,
    pub pages_failed: usize,
    pub sections_indexed: usize,
    pub total_bytes_processed: u64,
    pub duration_secs: u64,
}

impl BuildStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages_per_second(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        self.documents_indexed as f64 / self.duration_secs as f64
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.documents_indexed + self.pages_failed;
        if total == 0 {
            return 0.0;
        }
        (self.documents_indexed as f64 / total as f64) * 100.0
    }

    pub fn format_summary(&self) -> String {
        format!(
            "{}\n  pages scanned:     {}\n  documents indexed: {}\n  sections indexed:  {}\n  failed:            {}\n  success rate:      {:.1}%\n  duration:          {}s",
            "Index build complete".green().bold(),
            self.pages_scanned,
            self.documents_indexed,
            self.sections_indexed,
            self.pages_failed,
            self.success_rate(),
            self.duration_secs
        )
    }
}

pub struct BuildProgress {
    bar: ProgressBar,
    start_time: Instant,
}

impl BuildProgress {
    pub fn new(total_pages: usize, colored: bool) -> Self {
        let bar = ProgressBar::new(total_pages as u64);

        let template = if colored {
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
        } else {
            "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
        };

        bar.set_style(
            ProgressStyle::with_template(template)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        Self {
            bar,
            start_time: Instant::now(),
        }
    }

    pub fn page_done(&self, relative_path: &str) {
        self.bar.set_message(relative_path.to_string());
        self.bar.inc(1);
    }

    pub fn finish(&self, stats: &mut BuildStats) {
        stats.duration_secs = self.start_time.elapsed().as_secs();
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        let stats = BuildStats {
            documents_indexed: 9,
            pages_failed: 1,
            ..Default::default()
        };
        assert!((stats.success_rate() - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_stats_do_not_divide_by_zero() {
        let stats = BuildStats::new();
        assert_eq!(stats.success_rate(), 0.0);
        assert_eq!(stats.pages_per_second(), 0.0);
    }

    #[test]
    fn test_summary_mentions_counts() {
        let stats = BuildStats {
            pages_scanned: 4,
            documents_indexed: 3,
            sections_indexed: 7,
            pages_failed: 1,
            ..Default::default()
        };
        let summary = stats.format_summary();
        assert!(summary.contains("documents indexed: 3"));
        assert!(summary.contains("sections indexed:  7"));
    }
}
