use std::collections::VecDeque;

use crate::core::config::Config;

/// Records the outcome of the last `window` `find_top_documents` calls and
/// reports how many of them came back empty.
pub struct RequestTracker {
    outcomes: VecDeque<bool>,
    window: usize,
}

impl RequestTracker {
    pub fn new() -> Self {
        RequestTracker::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        RequestTracker { outcomes: VecDeque::new(), window: config.request_window }
    }

    /// `found_results` is true for a successful (non-empty) query.
    pub fn record(&mut self, found_results: bool) {
        self.outcomes.push_back(found_results);
        if self.outcomes.len() > self.window {
            self.outcomes.pop_front();
        }
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|&&ok| !ok).count()
    }
}

impl Default for RequestTracker {
    fn default() -> Self {
        RequestTracker::new()
    }
}
