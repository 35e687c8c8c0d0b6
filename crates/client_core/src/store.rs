use std::sync::Arc;

use shared::protocol::AppState;
use tracing::debug;

/// Holds the last broadcast snapshot. Every broadcast replaces it wholesale.
#[derive(Debug, Default)]
pub struct StateStore {
    current: Arc<AppState>,
    revision: u64,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, next: AppState) {
        self.revision += 1;
        debug!(
            revision = self.revision,
            images = next.images.len(),
            focus = ?next.focus_id,
            "state replaced"
        );
        self.current = Arc::new(next);
    }

    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.current)
    }

    pub fn state(&self) -> &AppState {
        &self.current
    }

    /// Number of replacements so far; `0` means nothing has been broadcast yet.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
