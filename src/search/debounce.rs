// file: src/search/debounce.rs
// description: timer-based coalescing stage in front of the query function
// reference: https://docs.rs/tokio (time utilities)

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Collapses bursts of keystrokes into a single query. Each call bumps a
/// generation counter and waits out the quiet period; if a newer call
/// arrived in the meantime the older one resolves to `None` without running
/// its closure. No explicit cancellation is needed.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Default 300ms quiet period used by the search input.
    pub fn for_search_input() -> Self {
        Self::new(Duration::from_millis(300))
    }

    pub fn from_config(config: &crate::config::SearchConfig) -> Self {
        Self::new(Duration::from_millis(config.debounce_ms))
    }

    /// Run `action` once input has been quiet for the configured period.
    /// Returns `None` when superseded by a later call.
    pub async fn debounce<T, F>(&self, action: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.quiet_period).await;

        if self.generation.load(Ordering::SeqCst) == my_generation {
            Some(action())
        } else {
            None
        }
    }
}
