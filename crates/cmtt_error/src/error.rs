//! Top-level error wrapper types.

use crate::{ApiError, ConfigError, DecodeError, IoError, TimeoutError, TransportError};

/// Every failure a dispatched call can produce.
///
/// # Examples
///
/// ```
/// use cmtt_error::{CmttError, TransportError};
///
/// let transport_err = TransportError::new("dns lookup failed");
/// let err: CmttError = transport_err.into();
/// assert!(format!("{}", err).contains("Transport Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CmttErrorKind {
    /// Invalid construction input
    #[from(ConfigError)]
    Config(ConfigError),
    /// Upload file could not be read
    #[from(IoError)]
    Io(IoError),
    /// Network-level failure
    #[from(TransportError)]
    Transport(TransportError),
    /// Non-2xx HTTP response
    #[from(ApiError)]
    Api(ApiError),
    /// Response body was not the expected JSON
    #[from(DecodeError)]
    Decode(DecodeError),
    /// Deadline exceeded
    #[from(TimeoutError)]
    Timeout(TimeoutError),
}

/// cmtt error with kind discrimination.
///
/// # Examples
///
/// ```
/// use cmtt_error::{ApiError, CmttError, CmttErrorKind, CmttResult};
///
/// fn might_fail() -> CmttResult<()> {
///     Err(ApiError::new(500, "oops"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), CmttErrorKind::Api(_)));
/// assert_eq!(err.status(), Some(500));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("cmtt Error: {}", _0)]
pub struct CmttError(Box<CmttErrorKind>);

impl CmttError {
    /// Create a new error from a kind.
    pub fn new(kind: CmttErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CmttErrorKind {
        &self.0
    }

    /// Consume the wrapper and return the kind.
    pub fn into_kind(self) -> CmttErrorKind {
        *self.0
    }

    /// HTTP status for `Api` failures.
    pub fn status(&self) -> Option<u16> {
        match self.kind() {
            CmttErrorKind::Api(e) => Some(e.status),
            _ => None,
        }
    }

    /// Whether a caller-side retry could succeed.
    ///
    /// Transport failures and timeouts qualify, as do `Api` failures with a
    /// transient status. Configuration, I/O and decode failures never do.
    pub fn is_retryable(&self) -> bool {
        match self.kind() {
            CmttErrorKind::Api(e) => e.is_retryable(),
            CmttErrorKind::Transport(_) | CmttErrorKind::Timeout(_) => true,
            CmttErrorKind::Config(_) | CmttErrorKind::Io(_) | CmttErrorKind::Decode(_) => false,
        }
    }
}

// Generic From implementation for any type that converts to CmttErrorKind
impl<T> From<T> for CmttError
where
    T: Into<CmttErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for cmtt operations.
///
/// # Examples
///
/// ```
/// use cmtt_error::{CmttResult, DecodeError};
///
/// fn parse_body() -> CmttResult<String> {
///     Err(DecodeError::new("trailing characters"))?
/// }
/// ```
pub type CmttResult<T> = std::result::Result<T, CmttError>;
