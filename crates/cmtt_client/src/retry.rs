//! Opt-in retries layered above [`Dispatcher::call`].
//!
//! Retries happen only when the caller asks for them. Each attempt is a full
//! call, so it re-acquires rate-limit permission before touching the network.

use crate::{Dispatcher, Transport};
use cmtt_core::EndpointDescriptor;
use cmtt_error::CmttResult;
use serde_json::Value;
use std::iter::Take;
use std::time::Duration;
use tokio_retry2::strategy::{ExponentialFactorBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{info, warn};

/// Backoff parameters for [`Dispatcher::call_with_retry`].
///
/// Delays start at `initial_backoff`, grow by `factor`, are capped at
/// `max_delay` and randomized with full jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct RetryPolicy {
    initial_backoff: Duration,
    factor: u64,
    max_delay: Duration,
    max_retries: usize,
}

impl RetryPolicy {
    /// Policy with explicit parameters.
    pub fn new(initial_backoff: Duration, factor: u64, max_delay: Duration, max_retries: usize) -> Self {
        Self {
            initial_backoff,
            factor,
            max_delay,
            max_retries,
        }
    }

    /// Policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Same policy with a different retry count.
    pub fn with_max_retries(self, max_retries: usize) -> Self {
        Self { max_retries, ..self }
    }

    /// Delays between attempts before jitter is applied.
    ///
    /// Yields `initial_backoff`, then each delay multiplied by `factor`,
    /// capped at `max_delay`, at most `max_retries` times.
    pub fn backoff(&self) -> Take<ExponentialFactorBackoff> {
        let initial_ms = u64::try_from(self.initial_backoff.as_millis()).unwrap_or(u64::MAX);
        ExponentialFactorBackoff::from_millis(initial_ms, self.factor as f64)
            .max_delay(self.max_delay)
            .take(self.max_retries)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_backoff: Duration::from_millis(2000),
            factor: 2,
            max_delay: Duration::from_secs(60),
            max_retries: 5,
        }
    }
}

impl<T: Transport> Dispatcher<T> {
    /// Call `descriptor`, retrying retryable failures according to `policy`.
    ///
    /// Retryable failures are `ApiError` with status 408, 429, 500, 502, 503
    /// or 504, `TransportError` and `TimeoutError`. Anything else is returned
    /// at once.
    ///
    /// # Errors
    ///
    /// The last error once retries are exhausted, or the first permanent one.
    pub async fn call_with_retry(
        &self,
        descriptor: &EndpointDescriptor,
        policy: &RetryPolicy,
    ) -> CmttResult<Value> {
        let strategy = policy.backoff().map(jitter);

        info!(
            path = %descriptor.path(),
            max_retries = policy.max_retries,
            initial_backoff_ms = policy.initial_backoff.as_millis() as u64,
            "Calling with retry"
        );

        Retry::spawn(strategy, || async {
            match self.call(descriptor).await {
                Ok(value) => Ok(value),
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, "Call failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Permanent error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await
    }
}
