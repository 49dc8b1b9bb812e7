use serde::Serialize;
use std::fmt;

use crate::domain::validation::FormField;

/// Logical group of fields on the profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileSection {
    UserInformation,
    YourRole,
    RolesPermissions,
    Mfa,
    AccessPermissions,
    Security,
    Preferences,
}

impl ProfileSection {
    #[inline]
    pub const fn title(&self) -> &'static str {
        use ProfileSection::*;
        match self {
            UserInformation => "User Information",
            YourRole => "Your Role",
            RolesPermissions => "Roles & Permissions",
            Mfa => "MFA",
            AccessPermissions => "Access & Permissions",
            Security => "Security",
            Preferences => "Preferences",
        }
    }

    /// Descriptive panels never take input
    #[inline]
    pub const fn is_descriptive(&self) -> bool {
        matches!(
            self,
            ProfileSection::YourRole | ProfileSection::RolesPermissions | ProfileSection::Mfa
        )
    }

    /// Fields checked when the section is saved
    pub const fn fields(&self) -> &'static [FormField] {
        use ProfileSection::*;
        match self {
            UserInformation => &[
                FormField::FirstName,
                FormField::LastName,
                FormField::PhonePrefix,
                FormField::PhoneNumber,
            ],
            AccessPermissions => &[FormField::Role, FormField::TestModeOnly],
            Security => &[
                FormField::CurrentPassword,
                FormField::NewPassword,
                FormField::ConfirmPassword,
            ],
            Preferences | YourRole | RolesPermissions | Mfa => &[],
        }
    }
}

impl fmt::Display for ProfileSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionAccess {
    ReadOnly,
    Editable,
}

/// A visible section and what the actor may do with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub section: ProfileSection,
    pub access: SectionAccess,
    /// An "Edit" control is offered
    pub can_begin_edit: bool,
}

impl SectionView {
    #[inline]
    pub const fn is_editable(&self) -> bool {
        matches!(self.access, SectionAccess::Editable)
    }
}
