//! User Record Entity
//!
//! One managed account as held by the record store. Status, alerts, tags and
//! the password expiration are derived on every call and never stored.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

use crate::domain::value_object::{
    account_status::{AccountStatus, FlagTag},
    email::Email,
    person_name::PersonName,
    phone_number::PhoneNumber,
    record_id::RecordId,
    sso_provider::SsoProvider,
    target_role::{RoleBadge, TargetRole, describe_level},
    timezone::Timezone,
};

/// Days between account creation and password expiration
pub const PASSWORD_EXPIRY_DAYS: i64 = 90;

/// Shown when the account has never signed in
pub const NEVER_LOGGED_IN: &str = "Never";

/// User record
///
/// The identifier has no setter; everything else is plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    id: RecordId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    #[serde(flatten)]
    pub phone: PhoneNumber,
    pub role: TargetRole,
    pub active: bool,
    pub locked: bool,
    pub verified: bool,
    #[serde(default)]
    pub sso_provider: SsoProvider,
    pub mfa_enabled: bool,
    pub test_mode_only: bool,
    #[serde(default)]
    pub timezone: Option<Timezone>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
}

/// Validated fields of a record that does not exist yet
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub phone: PhoneNumber,
    pub role: TargetRole,
    pub active: bool,
    pub locked: bool,
    pub verified: bool,
    pub sso_provider: SsoProvider,
    pub mfa_enabled: bool,
    pub test_mode_only: bool,
    pub timezone: Option<Timezone>,
}

/// Warning shown at the top of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAlert {
    SecurityLockOut,
    PasswordExpired,
}

impl UserAlert {
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SecurityLockOut => "Security Lock Out",
            Self::PasswordExpired => "Password Expired",
        }
    }
}

impl fmt::Display for UserAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl UserRecord {
    /// Build a record with a fresh id; `now` becomes both timestamps
    pub fn create(new: NewUserRecord, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::generate(),
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            role: new.role,
            active: new.active,
            locked: new.locked,
            verified: new.verified,
            sso_provider: new.sso_provider,
            mfa_enabled: new.mfa_enabled,
            test_mode_only: new.test_mode_only,
            timezone: new.timezone,
            last_login: None,
            created_on: now,
            modified_on: now,
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    #[inline]
    pub fn status(&self) -> AccountStatus {
        AccountStatus::derive(self.active, self.verified)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn initials(&self) -> String {
        format!("{}{}", self.first_name.initial(), self.last_name.initial())
    }

    pub fn role_badge(&self) -> RoleBadge {
        describe_level(i64::from(self.role.level()))
    }

    pub fn password_expires_at(&self, expiry_days: i64) -> DateTime<Utc> {
        self.created_on + Duration::days(expiry_days)
    }

    pub fn is_password_expired(&self, now: DateTime<Utc>, expiry_days: i64) -> bool {
        self.password_expires_at(expiry_days) < now
    }

    /// Lock-out first, then expiration
    pub fn alerts(&self, now: DateTime<Utc>, expiry_days: i64) -> Vec<UserAlert> {
        let mut alerts = Vec::new();
        if self.locked {
            alerts.push(UserAlert::SecurityLockOut);
        }
        if self.is_password_expired(now, expiry_days) {
            alerts.push(UserAlert::PasswordExpired);
        }
        alerts
    }

    pub fn last_login_display(&self) -> String {
        match self.last_login {
            Some(at) => at.format("%b %-d, %Y, %-I:%M %p").to_string(),
            None => NEVER_LOGGED_IN.to_string(),
        }
    }

    pub fn access_tag(&self) -> FlagTag {
        FlagTag::access(self.active)
    }

    pub fn security_lock_tag(&self) -> FlagTag {
        FlagTag::security_lock(self.locked)
    }

    pub fn verification_tag(&self) -> FlagTag {
        FlagTag::verification(self.verified)
    }

    pub fn mfa_tag(&self) -> FlagTag {
        FlagTag::mfa(self.mfa_enabled)
    }

    pub fn mode_access_tag(&self) -> FlagTag {
        FlagTag::mode_access(self.test_mode_only)
    }

    /// Case-insensitive substring match on the last name; the needle is
    /// NFKC-normalized like stored names
    pub fn last_name_contains(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle: String = needle.nfkc().collect();
        self.last_name.to_lowercase().contains(&needle.to_lowercase())
    }
}
