//! Client configuration.
//!
//! `ClientConfig` is the one-time constructor input of a dispatcher. It is
//! immutable once built: fields are exposed through getters only.
//!
//! Configuration can be assembled in code with [`ClientConfig::builder`] or
//! read from `CMTT_*` environment variables with [`ClientConfig::from_env`].

use crate::Platform;
use cmtt_error::{CmttResult, ConfigError};
use config::{Config, Environment};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default API version.
pub const API_VERSION: &str = "1.6";

/// Default `User-Agent` header value.
pub const USER_AGENT: &str = "cmtt-rs";

/// Default number of calls admitted per window.
pub const CALLS_LIMIT: u32 = 3;

/// Default rate-limit window.
pub const CALLS_WINDOW: Duration = Duration::from_secs(1);

/// Connection settings for one platform deployment.
///
/// # Examples
///
/// ```
/// use cmtt_core::{ClientConfig, Platform};
///
/// let config = ClientConfig::builder()
///     .platform(Platform::Vc)
///     .token("secret")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.version(), "1.6");
/// assert_eq!(config.calls_per_window(), &3);
/// assert_eq!(config.base_url(), "https://api.vc.ru/v1.6");
/// ```
#[derive(Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters)]
#[builder(
    setter(into),
    build_fn(private, name = "build_internal", validate = "Self::validate")
)]
pub struct ClientConfig {
    /// Target deployment.
    platform: Platform,

    /// Device token sent as `X-Device-Token`.
    #[builder(default, setter(into, strip_option))]
    token: Option<String>,

    /// API version, without the leading `v`.
    #[builder(default = "API_VERSION.to_string()")]
    version: String,

    /// `User-Agent` header value.
    #[builder(default = "USER_AGENT.to_string()")]
    user_agent: String,

    /// Calls admitted per rolling window.
    #[builder(default = "CALLS_LIMIT")]
    calls_per_window: u32,

    /// Length of the rolling window.
    #[builder(default = "CALLS_WINDOW")]
    window: Duration,

    /// Default deadline for each call (acquire plus network).
    #[builder(default, setter(into, strip_option))]
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Start building a configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Configuration with defaults for `platform` and no token.
    pub fn anonymous(platform: Platform) -> Self {
        Self {
            platform,
            token: None,
            version: API_VERSION.to_string(),
            user_agent: USER_AGENT.to_string(),
            calls_per_window: CALLS_LIMIT,
            window: CALLS_WINDOW,
            timeout: None,
        }
    }

    /// `https://api.<domain>/v<version>`.
    pub fn base_url(&self) -> String {
        self.platform.base_url(&self.version)
    }

    /// Read configuration from `CMTT_*` environment variables.
    ///
    /// Recognized variables: `CMTT_PLATFORM` (required), `CMTT_TOKEN`,
    /// `CMTT_VERSION`, `CMTT_USER_AGENT`, `CMTT_CALLS_PER_WINDOW`,
    /// `CMTT_WINDOW_MS` and `CMTT_TIMEOUT_MS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the platform is missing or unknown, or a
    /// numeric variable does not parse.
    #[instrument]
    pub fn from_env() -> CmttResult<Self> {
        debug!("Loading client configuration from environment");

        let raw: RawClientConfig = Config::builder()
            .add_source(Environment::with_prefix("CMTT"))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read environment: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse environment: {}", e)))?;

        raw.into_config()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("platform", &self.platform)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("version", &self.version)
            .field("user_agent", &self.user_agent)
            .field("calls_per_window", &self.calls_per_window)
            .field("window", &self.window)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfigBuilder {
    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the platform is missing, the version or user
    /// agent is empty, the token or user agent cannot be sent as a header
    /// value, or the quota admits no calls.
    pub fn build(&self) -> CmttResult<ClientConfig> {
        self.build_internal()
            .map_err(|e| ConfigError::new(e.to_string()).into())
    }

    fn validate(&self) -> Result<(), String> {
        if self.version.as_ref().is_some_and(|v| v.trim().is_empty()) {
            return Err("API version must not be empty".to_string());
        }
        if self.user_agent.as_ref().is_some_and(|ua| ua.trim().is_empty()) {
            return Err("User agent must not be empty".to_string());
        }
        if self
            .user_agent
            .as_ref()
            .is_some_and(|ua| !is_header_value(ua))
        {
            return Err("User agent contains characters not allowed in a header".to_string());
        }
        if self
            .token
            .as_ref()
            .and_then(Option::as_ref)
            .is_some_and(|token| !is_header_value(token))
        {
            return Err("Token contains characters not allowed in a header".to_string());
        }
        if self.calls_per_window == Some(0) {
            return Err("calls_per_window must be at least 1".to_string());
        }
        if self.window == Some(Duration::ZERO) {
            return Err("window must be longer than zero".to_string());
        }
        Ok(())
    }
}

/// HTTP header values may not contain control characters other than tab.
fn is_header_value(value: &str) -> bool {
    !value.chars().any(|c| c.is_ascii_control() && c != '\t')
}

/// Environment form of `ClientConfig`; every value arrives as text.
#[derive(Debug, Deserialize)]
struct RawClientConfig {
    platform: Option<String>,
    token: Option<String>,
    version: Option<String>,
    user_agent: Option<String>,
    calls_per_window: Option<String>,
    window_ms: Option<String>,
    timeout_ms: Option<String>,
}

impl RawClientConfig {
    fn into_config(self) -> CmttResult<ClientConfig> {
        let platform: Platform = self
            .platform
            .ok_or_else(|| ConfigError::new("CMTT_PLATFORM is not set"))?
            .parse()?;

        let mut builder = ClientConfig::builder();
        builder.platform(platform);

        if let Some(token) = self.token.filter(|t| !t.is_empty()) {
            builder.token(token);
        }
        if let Some(version) = self.version {
            builder.version(version);
        }
        if let Some(user_agent) = self.user_agent {
            builder.user_agent(user_agent);
        }
        if let Some(calls) = self.calls_per_window {
            builder.calls_per_window(parse_number::<u32>("CMTT_CALLS_PER_WINDOW", &calls)?);
        }
        if let Some(window) = self.window_ms {
            builder.window(Duration::from_millis(parse_number(
                "CMTT_WINDOW_MS",
                &window,
            )?));
        }
        if let Some(timeout) = self.timeout_ms {
            builder.timeout(Duration::from_millis(parse_number(
                "CMTT_TIMEOUT_MS",
                &timeout,
            )?));
        }

        builder.build()
    }
}

fn parse_number<N: std::str::FromStr>(name: &str, value: &str) -> CmttResult<N> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::new(format!("{} is not a number: {}", name, value)).into())
}
