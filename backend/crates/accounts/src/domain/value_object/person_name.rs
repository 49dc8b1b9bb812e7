//! Person Name Value Object
//!
//! First or last name of an account holder. NFKC normalized and trimmed,
//! 1 to 50 characters after normalization.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

pub const PERSON_NAME_MAX_LENGTH: usize = 50;

/// Which name field is being validated; only affects messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePart {
    First,
    Last,
    /// Neither field in particular (e.g. fixture data)
    Any,
}

impl NamePart {
    const fn noun(&self) -> &'static str {
        match self {
            Self::First => "first name",
            Self::Last => "last name",
            Self::Any => "name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    pub fn new(raw: impl AsRef<str>, part: NamePart) -> AppResult<Self> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let name = normalized.trim();

        if name.is_empty() {
            return Err(AppError::validation(format!("Please enter {}", part.noun())));
        }

        if name.chars().count() > PERSON_NAME_MAX_LENGTH {
            let noun = part.noun();
            let mut capitalized = noun[..1].to_uppercase();
            capitalized.push_str(&noun[1..]);
            return Err(AppError::validation(format!(
                "{} must be less than {} characters",
                capitalized, PERSON_NAME_MAX_LENGTH
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(AppError::validation(format!(
                "Please enter a valid {}",
                part.noun()
            )));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased first character, used for avatar initials
    pub fn initial(&self) -> String {
        self.0
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl TryFrom<String> for PersonName {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        PersonName::new(value, NamePart::Any)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
