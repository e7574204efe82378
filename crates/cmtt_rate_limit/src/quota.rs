//! Call budget description.

use cmtt_core::{CALLS_LIMIT, CALLS_WINDOW, ClientConfig};
use cmtt_error::{CmttResult, ConfigError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// At most `calls` calls in any rolling `window`.
///
/// # Example
///
/// ```toml
/// calls = 3
/// window_ms = 1000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct WindowQuota {
    /// Calls admitted per window
    calls: u32,

    /// Window length
    #[serde(rename = "window_ms", with = "millis")]
    window: Duration,
}

impl WindowQuota {
    /// Create a quota.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `calls` is zero or `window` is empty.
    pub fn new(calls: u32, window: Duration) -> CmttResult<Self> {
        if calls == 0 {
            return Err(ConfigError::new("Rate limit must admit at least one call").into());
        }
        if window.is_zero() {
            return Err(ConfigError::new("Rate limit window must be longer than zero").into());
        }
        Ok(Self { calls, window })
    }

    /// Quota configured on a client.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured quota is degenerate.
    pub fn from_config(config: &ClientConfig) -> CmttResult<Self> {
        Self::new(*config.calls_per_window(), *config.window())
    }

    /// Capacity as a collection size.
    pub fn capacity(&self) -> usize {
        self.calls as usize
    }
}

impl Default for WindowQuota {
    fn default() -> Self {
        Self {
            calls: CALLS_LIMIT,
            window: CALLS_WINDOW,
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
