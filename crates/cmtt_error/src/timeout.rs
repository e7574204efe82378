//! Deadline errors.

use std::time::Duration;

/// Where the deadline ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TimeoutStage {
    /// Waiting for rate-limit permission
    #[display("rate-limit acquire")]
    Acquire,
    /// Waiting on the network round-trip
    #[display("network call")]
    Network,
}

/// A call did not complete before its deadline.
#[derive(Debug, Clone, derive_more::Error)]
pub struct TimeoutError {
    /// Stage that exceeded the deadline
    pub stage: TimeoutStage,
    /// The configured limit, when the caller knows it
    pub limit: Option<Duration>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TimeoutError {
    /// Create a new TimeoutError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmtt_error::{TimeoutError, TimeoutStage};
    /// use std::time::Duration;
    ///
    /// let err = TimeoutError::new(TimeoutStage::Acquire, Duration::from_millis(250));
    /// assert_eq!(err.stage, TimeoutStage::Acquire);
    /// assert_eq!(err.limit, Some(Duration::from_millis(250)));
    /// ```
    #[track_caller]
    pub fn new(stage: TimeoutStage, limit: Duration) -> Self {
        Self::at_caller(stage, Some(limit))
    }

    /// Create a TimeoutError for a deadline enforced elsewhere, such as by an
    /// HTTP client whose timeout is not known here.
    #[track_caller]
    pub fn unknown_limit(stage: TimeoutStage) -> Self {
        Self::at_caller(stage, None)
    }

    #[track_caller]
    fn at_caller(stage: TimeoutStage, limit: Option<Duration>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            stage,
            limit,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.limit {
            Some(limit) => write!(f, "Timeout Error: {} exceeded {:?}", self.stage, limit)?,
            None => write!(f, "Timeout Error: {} timed out", self.stage)?,
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}
