//! Non-success HTTP responses.

/// The remote API answered with a 4xx or 5xx status.
///
/// The body is kept verbatim; platform error payloads are left for the
/// caller to interpret.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("API Error: HTTP {}: {} at line {} in {}", status, body, line, file)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ApiError {
    /// Create a new ApiError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmtt_error::ApiError;
    ///
    /// let err = ApiError::new(429, r#"{"message":"Too many requests"}"#);
    /// assert_eq!(err.status, 429);
    /// assert!(err.is_retryable());
    /// ```
    #[track_caller]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            status,
            body: body.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the status is one a caller may reasonably retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self.status, 408 | 429 | 500 | 502 | 503 | 504)
    }
}
