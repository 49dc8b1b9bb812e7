//! Accounts Error Types
//!
//! Crate-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::policy::{LifecycleAction, ProfileSection};
use crate::domain::validation::FieldErrors;

/// Accounts-specific result type alias
pub type AccountsResult<T> = Result<T, AccountsError>;

#[derive(Debug, Error)]
pub enum AccountsError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// One or more form fields failed validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Section cannot be edited here: {0}")]
    SectionNotEditable(ProfileSection),

    #[error("Action not available: {0}")]
    ActionNotAvailable(LifecycleAction),

    #[error("Unsupported image file: {0}")]
    UnsupportedImage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Embedded fixture could not be parsed
    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountsError::UserNotFound(_) => ErrorKind::NotFound,
            AccountsError::Validation(_) => ErrorKind::Validation,
            AccountsError::SectionNotEditable(_) | AccountsError::ActionNotAvailable(_) => {
                ErrorKind::Forbidden
            }
            AccountsError::UnsupportedImage(_) => ErrorKind::Unsupported,
            AccountsError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            AccountsError::Io(_) | AccountsError::Seed(_) | AccountsError::Internal(_) => {
                ErrorKind::Internal
            }
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.kind().is_recoverable()
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AccountsError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AccountsError::UnsupportedImage(_) => {
                err.with_action("Choose an image file such as PNG or JPEG")
            }
            AccountsError::Validation(_) => err.with_action("Correct the highlighted fields"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AccountsError::Seed(e) => {
                tracing::error!(error = %e, "Seed data could not be loaded");
            }
            AccountsError::Internal(msg) => {
                tracing::error!(message = %msg, "Accounts internal error");
            }
            AccountsError::Io(e) => {
                tracing::warn!(error = %e, "Accounts I/O error");
            }
            AccountsError::SectionNotEditable(_) | AccountsError::ActionNotAvailable(_) => {
                tracing::warn!(error = %self, "Rejected by access policy");
            }
            _ => {
                tracing::debug!(error = %self, "Accounts error");
            }
        }
    }
}

impl From<AppError> for AccountsError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => AccountsError::UserNotFound(err.message().to_string()),
            _ => AccountsError::Internal(err.to_string()),
        }
    }
}

impl From<FieldErrors> for AccountsError {
    fn from(errors: FieldErrors) -> Self {
        AccountsError::Validation(errors)
    }
}
