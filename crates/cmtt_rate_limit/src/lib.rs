//! Client-side call budget.
//!
//! The remote APIs throttle clients that send more than a handful of calls
//! per second. This crate keeps a fixed-size history of recent calls and
//! makes callers wait until the budget has room:
//!
//! - [`WindowQuota`] - at most N calls per rolling window (default 3 per second)
//! - [`SlidingWindow`] - the history itself, oldest record first
//! - [`RateLimiter`] - a shareable, async wrapper that sleeps instead of spinning

mod limiter;
mod quota;
mod window;

pub use limiter::RateLimiter;
pub use quota::WindowQuota;
pub use window::SlidingWindow;
