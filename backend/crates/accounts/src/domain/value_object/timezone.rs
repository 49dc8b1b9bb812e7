//! Timezone Value Object
//!
//! The fixed set of zones offered in the preferences section. Stored by IANA
//! name.

use kernel::error::app_error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shown when a record has no timezone
pub const TIMEZONE_NOT_SET: &str = "Not set";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timezone {
    #[serde(rename = "America/New_York")]
    Eastern,
    #[serde(rename = "America/Chicago")]
    Central,
    #[serde(rename = "America/Denver")]
    Mountain,
    #[serde(rename = "America/Los_Angeles")]
    Pacific,
    #[serde(rename = "America/Anchorage")]
    Alaska,
    #[serde(rename = "Pacific/Honolulu")]
    Hawaii,
    #[serde(rename = "UTC")]
    Utc,
}

impl Timezone {
    pub const ALL: [Timezone; 7] = [
        Timezone::Eastern,
        Timezone::Central,
        Timezone::Mountain,
        Timezone::Pacific,
        Timezone::Alaska,
        Timezone::Hawaii,
        Timezone::Utc,
    ];

    #[inline]
    pub const fn iana(&self) -> &'static str {
        use Timezone::*;
        match self {
            Eastern => "America/New_York",
            Central => "America/Chicago",
            Mountain => "America/Denver",
            Pacific => "America/Los_Angeles",
            Alaska => "America/Anchorage",
            Hawaii => "Pacific/Honolulu",
            Utc => "UTC",
        }
    }

    #[inline]
    pub const fn label(&self) -> &'static str {
        use Timezone::*;
        match self {
            Eastern => "Eastern Time (ET)",
            Central => "Central Time (CT)",
            Mountain => "Mountain Time (MT)",
            Pacific => "Pacific Time (PT)",
            Alaska => "Alaska Time (AKT)",
            Hawaii => "Hawaii Time (HT)",
            Utc => "UTC",
        }
    }

    pub fn from_iana(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tz| tz.iana() == name)
    }

    /// Label for an optional zone
    pub fn display(tz: Option<Self>) -> &'static str {
        tz.map(|tz| tz.label()).unwrap_or(TIMEZONE_NOT_SET)
    }
}

impl FromStr for Timezone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iana(s)
            .ok_or_else(|| AppError::validation(format!("Unsupported timezone: {}", s)))
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iana())
    }
}
