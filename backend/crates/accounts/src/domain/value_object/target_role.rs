//! Target Role Value Object
//!
//! Numeric permission level (1-5) assigned to a managed account, together with
//! its fixed display label and tag color.

use serde::{Deserialize, Serialize};
use std::fmt;

use kernel::error::app_error::AppError;

/// Label used for a level outside 1-5
pub const UNKNOWN_ROLE_LABEL: &str = "Unknown";

/// Tag color used for a level outside 1-5 (and for Viewer)
pub const DEFAULT_ROLE_COLOR: &str = "default";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum TargetRole {
    SuperAdmin = 1,
    Admin = 2,
    Manager = 3,
    /// New accounts start here
    #[default]
    User = 4,
    Viewer = 5,
}

impl TargetRole {
    /// All levels in ascending order
    pub const ALL: [TargetRole; 5] = [
        TargetRole::SuperAdmin,
        TargetRole::Admin,
        TargetRole::Manager,
        TargetRole::User,
        TargetRole::Viewer,
    ];

    #[inline]
    pub const fn level(&self) -> u8 {
        *self as u8
    }

    #[inline]
    pub const fn label(&self) -> &'static str {
        use TargetRole::*;
        match self {
            SuperAdmin => "Super Admin",
            Admin => "Admin",
            Manager => "Manager",
            User => "User",
            Viewer => "Viewer",
        }
    }

    #[inline]
    pub const fn color(&self) -> &'static str {
        use TargetRole::*;
        match self {
            SuperAdmin => "red",
            Admin => "orange",
            Manager => "blue",
            User => "green",
            Viewer => DEFAULT_ROLE_COLOR,
        }
    }

    /// Levels 1 and 2 may only be assigned by a super admin
    #[inline]
    pub const fn is_privileged(&self) -> bool {
        matches!(self, TargetRole::SuperAdmin | TargetRole::Admin)
    }

    #[inline]
    pub fn from_level(level: u8) -> Option<Self> {
        use TargetRole::*;
        match level {
            1 => Some(SuperAdmin),
            2 => Some(Admin),
            3 => Some(Manager),
            4 => Some(User),
            5 => Some(Viewer),
            _ => None,
        }
    }
}

impl TryFrom<u8> for TargetRole {
    type Error = AppError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level)
            .ok_or_else(|| AppError::validation(format!("Invalid role level: {}", level)))
    }
}

impl From<TargetRole> for u8 {
    fn from(role: TargetRole) -> Self {
        role.level()
    }
}

impl fmt::Display for TargetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label and color of a role tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleBadge {
    pub label: &'static str,
    pub color: &'static str,
}

/// Describe any numeric level, falling back to "Unknown"/"default"
pub fn describe_level(level: i64) -> RoleBadge {
    match u8::try_from(level).ok().and_then(TargetRole::from_level) {
        Some(role) => RoleBadge {
            label: role.label(),
            color: role.color(),
        },
        None => RoleBadge {
            label: UNKNOWN_ROLE_LABEL,
            color: DEFAULT_ROLE_COLOR,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_colors() {
        let expected = [
            (1, "Super Admin", "red"),
            (2, "Admin", "orange"),
            (3, "Manager", "blue"),
            (4, "User", "green"),
            (5, "Viewer", "default"),
        ];
        for (level, label, color) in expected {
            let badge = describe_level(level);
            assert_eq!(badge.label, label);
            assert_eq!(badge.color, color);
        }
    }

    #[test]
    fn test_unknown_level_falls_back() {
        for level in [0, 6, -1, 300] {
            assert_eq!(
                describe_level(level),
                RoleBadge {
                    label: "Unknown",
                    color: "default"
                }
            );
        }
    }

    #[test]
    fn test_from_level() {
        assert_eq!(TargetRole::from_level(3), Some(TargetRole::Manager));
        assert_eq!(TargetRole::from_level(0), None);
        assert!(TargetRole::try_from(9u8).is_err());
    }

    #[test]
    fn test_is_privileged() {
        assert!(TargetRole::SuperAdmin.is_privileged());
        assert!(TargetRole::Admin.is_privileged());
        assert!(!TargetRole::Manager.is_privileged());
        assert!(!TargetRole::User.is_privileged());
        assert!(!TargetRole::Viewer.is_privileged());
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&TargetRole::Manager).unwrap(), "3");
        let role: TargetRole = serde_json::from_str("2").unwrap();
        assert_eq!(role, TargetRole::Admin);
        assert!(serde_json::from_str::<TargetRole>("7").is_err());
    }
}
