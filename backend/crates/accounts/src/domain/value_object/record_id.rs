//! Record Id Value Object
//!
//! Opaque, immutable identifier of a user record (e.g.
//! `user_3k4dqxwmjr858vzk8mqp4zyb59`). Ids of seeded records are kept as-is;
//! new records get `user_` followed by a 21 character nanoid.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use nid::Nanoid;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const RECORD_ID_PREFIX: &str = "user_";
const RECORD_ID_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(try_from = "String", into = "String")]
#[display("{_0}")]
pub struct RecordId(String);

impl RecordId {
    /// Fresh id for a record created through the add-user form
    pub fn generate() -> Self {
        let suffix: Nanoid = Nanoid::new();
        Self(format!("{}{}", RECORD_ID_PREFIX, suffix.as_str()))
    }

    pub fn parse_str(s: &str) -> AppResult<Self> {
        if s.is_empty() || s.len() > RECORD_ID_MAX_LENGTH {
            return Err(AppError::bad_request(format!("Invalid record id: {:?}", s)));
        }
        if !s.chars().all(|c| c.is_ascii_graphic()) {
            return Err(AppError::bad_request(format!("Invalid record id: {:?}", s)));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key under which this record's avatar is stored
    pub fn avatar_key(&self) -> String {
        format!("avatar_{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        RecordId::parse_str(s)
    }
}

impl TryFrom<String> for RecordId {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        RecordId::parse_str(&value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
