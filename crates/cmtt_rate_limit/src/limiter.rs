//! Shared, async rate limiter over a [`SlidingWindow`].
//!
//! The acquire decision is local and synchronous: the window sits behind a
//! `std::sync::Mutex` that is held only while one caller checks and records a
//! call, never across a sleep. When the budget is spent, callers sleep until
//! the oldest record leaves the window and then check again. There is no
//! FIFO fairness between waiting callers; the only guarantee is the aggregate
//! cap across every clone of the limiter.

use crate::{SlidingWindow, WindowQuota};
use cmtt_error::{TimeoutError, TimeoutStage};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, instrument, trace};

/// Sliding-window limiter shared by every call of one dispatcher.
///
/// Clones share the same history.
///
/// # Example
///
/// ```rust,ignore
/// use cmtt_rate_limit::{RateLimiter, WindowQuota};
///
/// let limiter = RateLimiter::new(WindowQuota::default());
///
/// // Waits until fewer than 3 calls happened in the last second
/// limiter.acquire().await;
/// // Make API call...
/// ```
#[derive(Debug, Clone)]
pub struct RateLimiter {
    quota: WindowQuota,
    window: Arc<Mutex<SlidingWindow>>,
}

impl RateLimiter {
    /// Create a limiter with an empty history.
    pub fn new(quota: WindowQuota) -> Self {
        debug!(calls = quota.calls(), window = ?quota.window(), "Creating rate limiter");
        Self {
            quota,
            window: Arc::new(Mutex::new(SlidingWindow::new(quota))),
        }
    }

    /// The enforced quota.
    pub fn quota(&self) -> &WindowQuota {
        &self.quota
    }

    /// Try to record a call now without waiting.
    ///
    /// Returns `false` if the budget is spent; the history is left untouched.
    pub fn try_acquire(&self) -> bool {
        self.lock().try_acquire(Instant::now())
    }

    /// Wait until a call is permitted and record it.
    #[instrument(skip(self))]
    pub async fn acquire(&self) {
        loop {
            match self.poll() {
                Ok(()) => return,
                Err(wait) => {
                    trace!(wait_ms = wait.as_millis() as u64, "Rate limit reached, sleeping");
                    tokio::time::sleep(wait).await;
                }
            }
        }
    }

    /// Wait at most `limit` for permission.
    ///
    /// # Errors
    ///
    /// Returns `TimeoutError` (stage `Acquire`) as soon as the window cannot
    /// free up before the deadline. No call is recorded in that case.
    pub async fn acquire_within(&self, limit: Duration) -> Result<(), TimeoutError> {
        self.acquire_until(Instant::now() + limit).await
    }

    /// Wait for permission until `deadline`.
    ///
    /// # Errors
    ///
    /// As [`RateLimiter::acquire_within`]; the reported limit is the time
    /// that was left when the wait began.
    #[instrument(skip(self))]
    pub async fn acquire_until(&self, deadline: Instant) -> Result<(), TimeoutError> {
        let limit = deadline.saturating_duration_since(Instant::now());
        loop {
            match self.poll() {
                Ok(()) => return Ok(()),
                Err(wait) => {
                    if Instant::now() + wait > deadline {
                        debug!(wait_ms = wait.as_millis() as u64, "Rate limit wait exceeds deadline");
                        return Err(TimeoutError::new(TimeoutStage::Acquire, limit));
                    }
                    trace!(wait_ms = wait.as_millis() as u64, "Rate limit reached, sleeping");
                    tokio::time::sleep(wait).await;
                }
            }
        }
    }

    /// Number of calls currently recorded.
    pub fn in_window(&self) -> usize {
        self.lock().len()
    }

    /// Time a caller arriving now would have to wait.
    pub fn wait_time(&self) -> Duration {
        self.lock().wait_time(Instant::now())
    }

    fn poll(&self) -> Result<(), Duration> {
        let mut window = self.lock();
        let now = Instant::now();
        if window.try_acquire(now) {
            Ok(())
        } else {
            Err(window.wait_time(now))
        }
    }

    // Every mutation is a single push or pop, so a poisoned history is still valid.
    fn lock(&self) -> MutexGuard<'_, SlidingWindow> {
        self.window.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(WindowQuota::default())
    }
}
