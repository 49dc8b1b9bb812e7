//! Phone Number Value Object
//!
//! International dialling prefix (`+1`, `+44`, ...) and the local number as
//! typed, e.g. `(555) 123-4567`.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix offered by default on the add-user form
pub const DEFAULT_PHONE_PREFIX: &str = "+1";

const PREFIX_MAX_DIGITS: usize = 4;
const NUMBER_MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPhoneNumber")]
pub struct PhoneNumber {
    #[serde(rename = "phonePrefix")]
    prefix: String,
    #[serde(rename = "phoneNumber")]
    number: String,
}

/// Unvalidated wire form
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPhoneNumber {
    pub phone_prefix: String,
    pub phone_number: String,
}

impl PhoneNumber {
    pub fn new(prefix: &str, number: &str) -> AppResult<Self> {
        Ok(Self {
            prefix: Self::validate_prefix(prefix)?,
            number: Self::validate_number(number)?,
        })
    }

    /// `+` followed by 1 to 4 digits
    pub fn validate_prefix(prefix: &str) -> AppResult<String> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(AppError::validation("Required"));
        }
        let digits = prefix.strip_prefix('+').unwrap_or("");
        if digits.is_empty()
            || digits.len() > PREFIX_MAX_DIGITS
            || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return Err(AppError::validation("Invalid prefix").with_action("Use the form +1"));
        }
        Ok(prefix.to_string())
    }

    /// Digits plus common separators, at least one digit
    pub fn validate_number(number: &str) -> AppResult<String> {
        let number = number.trim();
        if number.is_empty() {
            return Err(AppError::validation("Please enter phone number"));
        }
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '-' | '.');
        if number.len() > NUMBER_MAX_LENGTH
            || !number.chars().all(allowed)
            || !number.chars().any(|c| c.is_ascii_digit())
        {
            return Err(AppError::validation("Please enter a valid phone number"));
        }
        Ok(number.to_string())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

impl TryFrom<RawPhoneNumber> for PhoneNumber {
    type Error = AppError;

    fn try_from(raw: RawPhoneNumber) -> AppResult<Self> {
        PhoneNumber::new(&raw.phone_prefix, &raw.phone_number)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.number)
    }
}
