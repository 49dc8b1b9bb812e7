use serde::Serialize;
use std::borrow::Cow;

use crate::error::AccountsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

/// Toast message handed back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: Cow<'static, str>,
}

impl Notification {
    pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

impl From<&AccountsError> for Notification {
    fn from(err: &AccountsError) -> Self {
        let message = err.to_app_error().message().to_string();
        if err.is_recoverable() {
            Self::warning(message)
        } else {
            Self::error(message)
        }
    }
}

/// Section save
pub const SECTION_UPDATED: &str = "Section updated successfully!";
/// Add-user form submitted
pub const USER_ADDED: &str = "User added successfully!";
/// Avatar stored
pub const AVATAR_UPDATED: &str = "Avatar updated successfully!";
