use std::time::{Duration, Instant};

/// Turns a burst of edits into a single "settled" signal.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    last_edit: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_edit: None,
        }
    }

    pub fn touch(&mut self, now: Instant) {
        self.last_edit = Some(now);
    }

    pub fn cancel(&mut self) {
        self.last_edit = None;
    }

    pub fn is_pending(&self) -> bool {
        self.last_edit.is_some()
    }

    /// True exactly once per burst, after `interval` has passed since the last edit.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_edit {
            Some(at) if now.saturating_duration_since(at) >= self.interval => {
                self.last_edit = None;
                true
            }
            _ => false,
        }
    }
}
