//! Application Error
//!
//! [`AppError`] is what value objects and configuration loaders return when
//! input is rejected. Domain crates wrap it in their own `thiserror` enums and
//! convert back with `to_app_error()` when a caller needs a uniform shape.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::Serialize;

use super::kind::ErrorKind;

type Text = Cow<'static, str>;
type BoxedSource = Box<dyn Error + Send + Sync + 'static>;

/// Unified application error
///
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::validation("Please enter a valid email")
///     .with_action("Use the form name@example.com");
/// assert_eq!(err.kind(), ErrorKind::Validation);
/// assert_eq!(err.action(), Some("Use the form name@example.com"));
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Text,
    action: Option<Text>,
    source: Option<BoxedSource>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Text>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    /// Form input the user can correct
    #[inline]
    pub fn validation(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Malformed input outside a form (environment, ids)
    #[inline]
    pub fn bad_request(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    #[inline]
    pub fn not_found(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    #[inline]
    pub fn internal(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Hint shown next to the message
    #[inline]
    pub fn with_action(mut self, action: impl Into<Text>) -> Self {
        self.action = Some(action.into());
        self
    }

    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    #[inline]
    pub fn is_recoverable(&self) -> bool {
        self.kind.is_recoverable()
    }

    /// Serializable snapshot without the source chain
    pub fn report(&self) -> ErrorReport<'_> {
        ErrorReport {
            kind: self.kind,
            message: &self.message,
            action: self.action.as_deref(),
            recoverable: self.is_recoverable(),
        }
    }
}

/// What a caller shows for a failed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport<'a> {
    pub kind: ErrorKind,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'a str>,
    pub recoverable: bool,
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("source", &self.source.as_ref().map(|s| s.to_string()))
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        match &self.action {
            Some(action) => write!(f, " ({})", action),
            None => Ok(()),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(AppError::validation("x").kind(), ErrorKind::Validation);
        assert_eq!(AppError::bad_request("x").kind(), ErrorKind::BadRequest);
        assert_eq!(AppError::not_found("x").kind(), ErrorKind::NotFound);
        assert_eq!(AppError::internal("x").kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_display_includes_action() {
        let err = AppError::not_found("User not found: u9");
        assert_eq!(err.to_string(), "Not Found: User not found: u9");

        let err = AppError::validation("Please enter email").with_action("Fill in the field");
        assert_eq!(
            err.to_string(),
            "Validation Failed: Please enter email (Fill in the field)"
        );
    }

    #[test]
    fn test_source_is_kept() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "avatar.png");
        let err = AppError::internal("Failed to read avatar").with_source(io_err);
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("avatar.png"));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let err = AppError::not_found("User not found: u9");
        let json = serde_json::to_value(err.report()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "NOT_FOUND",
                "message": "User not found: u9",
                "recoverable": true
            })
        );

        let err = AppError::internal("boom").with_action("Retry later");
        let report = err.report();
        assert_eq!(report.action, Some("Retry later"));
        assert!(!report.recoverable);
    }
}
