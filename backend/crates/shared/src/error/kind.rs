//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by every crate in the workspace.

use serde::Serialize;

/// Error classification
///
/// There is no transport layer in this workspace, so kinds describe how the
/// caller should react rather than which status code to send.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Validation;
/// assert!(kind.is_recoverable());
/// assert_eq!(kind.as_str(), "Validation Failed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed input that never reached validation (bad config value, bad id)
    BadRequest,
    /// Field-level validation failed; the user can correct and resubmit
    Validation,
    /// The actor lacks the capability for the request
    Forbidden,
    /// The requested record does not exist
    NotFound,
    /// Input type is not supported (e.g. a non-image avatar)
    Unsupported,
    /// Unexpected failure inside the process
    Internal,
}

impl ErrorKind {
    /// Human readable name of the kind
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Validation => "Validation Failed",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Unsupported => "Unsupported",
            ErrorKind::Internal => "Internal Error",
        }
    }

    /// Whether the user can fix the problem locally and retry
    #[inline]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
