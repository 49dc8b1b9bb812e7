use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission level of the person using the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActorRole {
    #[default]
    User,
    PlatformAdmin,
    SuperAdmin,
}

impl ActorRole {
    pub const ALL: [ActorRole; 3] = [
        ActorRole::User,
        ActorRole::PlatformAdmin,
        ActorRole::SuperAdmin,
    ];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use ActorRole::*;
        match self {
            User => "user",
            PlatformAdmin => "platform_admin",
            SuperAdmin => "super_admin",
        }
    }

    #[inline]
    pub const fn label(&self) -> &'static str {
        use ActorRole::*;
        match self {
            User => "User",
            PlatformAdmin => "Platform Admin",
            SuperAdmin => "Super Admin",
        }
    }

    #[inline]
    pub const fn is_super_admin(&self) -> bool {
        matches!(self, ActorRole::SuperAdmin)
    }

    #[inline]
    pub const fn is_platform_admin(&self) -> bool {
        matches!(self, ActorRole::PlatformAdmin | ActorRole::SuperAdmin)
    }

    /// Whether the "Users" area is reachable at all
    #[inline]
    pub const fn can_manage_users(&self) -> bool {
        self.is_platform_admin()
    }

    /// Unknown codes resolve to the least privileged role
    #[inline]
    pub fn from_code(code: &str) -> Self {
        use ActorRole::*;
        match code {
            "user" => User,
            "platform_admin" => PlatformAdmin,
            "super_admin" => SuperAdmin,
            _ => {
                tracing::warn!(code, "Unknown actor role, treating as user");
                User
            }
        }
    }
}

impl From<String> for ActorRole {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
