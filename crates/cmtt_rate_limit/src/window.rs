//! Fixed-capacity call history.

use crate::WindowQuota;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

/// History of permitted calls, oldest first.
///
/// Holds at most `quota.calls()` records. When full, only the oldest record
/// is checked: once it is at least one window old it is evicted and the new
/// call recorded at the back.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    quota: WindowQuota,
    calls: VecDeque<Instant>,
}

impl SlidingWindow {
    /// Empty history for `quota`.
    pub fn new(quota: WindowQuota) -> Self {
        Self {
            quota,
            calls: VecDeque::with_capacity(quota.capacity()),
        }
    }

    /// Record a call at `now` if the budget allows it.
    ///
    /// Returns `false` without touching the history when the oldest record is
    /// younger than the window.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if self.calls.len() < self.quota.capacity() {
            self.calls.push_back(now);
            return true;
        }

        match self.calls.front() {
            Some(&oldest) if now.saturating_duration_since(oldest) >= *self.quota.window() => {
                self.calls.pop_front();
                self.calls.push_back(now);
                true
            }
            _ => false,
        }
    }

    /// Time until a call at `now` would be permitted; zero if it would be now.
    pub fn wait_time(&self, now: Instant) -> Duration {
        if self.calls.len() < self.quota.capacity() {
            return Duration::ZERO;
        }
        self.calls
            .front()
            .map(|&oldest| (oldest + *self.quota.window()).saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }

    /// Oldest record still held.
    pub fn oldest(&self) -> Option<Instant> {
        self.calls.front().copied()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether no call has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// The quota this window enforces.
    pub fn quota(&self) -> &WindowQuota {
        &self.quota
    }
}
