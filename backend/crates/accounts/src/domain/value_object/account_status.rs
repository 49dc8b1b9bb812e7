//! Account Status
//!
//! Status is never stored. It is derived from the `active` and `verified`
//! flags of a record:
//!
//! | active | verified | status   |
//! |--------|----------|----------|
//! | false  | any      | Inactive |
//! | true   | false    | Invited  |
//! | true   | true     | Active   |

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Inactive,
    Invited,
    Active,
}

impl AccountStatus {
    #[inline]
    pub const fn derive(active: bool, verified: bool) -> Self {
        match (active, verified) {
            (false, _) => Self::Inactive,
            (true, false) => Self::Invited,
            (true, true) => Self::Active,
        }
    }

    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Inactive => "Inactive",
            Self::Invited => "Invited",
            Self::Active => "Active",
        }
    }

    #[inline]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Inactive => "red",
            Self::Invited => "orange",
            Self::Active => "green",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Two-state flag shown as a colored tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlagTag {
    pub label: &'static str,
    pub color: &'static str,
}

impl FlagTag {
    /// "Dashboard Access" tag
    pub const fn access(active: bool) -> Self {
        if active {
            Self { label: "Enabled", color: "green" }
        } else {
            Self { label: "Disabled", color: "red" }
        }
    }

    /// "Security Lock" tag
    pub const fn security_lock(locked: bool) -> Self {
        if locked {
            Self { label: "Locked Out", color: "red" }
        } else {
            Self { label: "Normal", color: "green" }
        }
    }

    /// "Verified" tag
    pub const fn verification(verified: bool) -> Self {
        if verified {
            Self { label: "Verified", color: "green" }
        } else {
            Self { label: "Pending", color: "orange" }
        }
    }

    /// "MFA Enabled" tag
    pub const fn mfa(enabled: bool) -> Self {
        if enabled {
            Self { label: "Enabled", color: "green" }
        } else {
            Self { label: "Disabled", color: "default" }
        }
    }

    /// "Mode Access" tag
    pub const fn mode_access(test_mode_only: bool) -> Self {
        if test_mode_only {
            Self { label: "Test Only", color: "purple" }
        } else {
            Self { label: "Test and Live", color: "default" }
        }
    }
}
