//! Recording notifier for board tests.

use crate::board::ports::{BoardNotice, BoardNotifier};
use std::sync::{Arc, Mutex};

/// Notifier that records every published notice for later assertion.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<BoardNotice>>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the notices published so far.
    #[must_use]
    pub fn notices(&self) -> Vec<BoardNotice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    /// Returns the most recently published notice, if any.
    #[must_use]
    pub fn last(&self) -> Option<BoardNotice> {
        self.notices
            .lock()
            .ok()
            .and_then(|notices| notices.last().cloned())
    }
}

impl BoardNotifier for RecordingNotifier {
    fn publish(&self, notice: BoardNotice) {
        let Ok(mut notices) = self.notices.lock() else {
            return;
        };
        notices.push(notice);
    }
}
