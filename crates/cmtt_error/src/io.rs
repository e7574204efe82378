//! Local file I/O errors.

use std::path::PathBuf;

/// Failure to read a local file while preparing an upload.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("IO Error: {} ({}) at line {} in {}", message, path.display(), line, file)]
pub struct IoError {
    /// Path that could not be read
    pub path: PathBuf,
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl IoError {
    /// Create a new IoError for `path` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmtt_error::IoError;
    ///
    /// let err = IoError::new("/tmp/missing.png", "No such file or directory");
    /// assert_eq!(err.path.to_str(), Some("/tmp/missing.png"));
    /// ```
    #[track_caller]
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            path: path.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
