//! Lifecycle Actions
//!
//! Account operations an administrator can trigger from a profile. Each one
//! goes through a confirmation step and is simulated: confirming produces a
//! notification and an audit line, the record itself is left alone.

use serde::Serialize;
use std::fmt;

use crate::domain::entity::user_record::UserRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleAction {
    ResendVerification,
    ResetSecurityLock,
    DisableAccount,
    EnableAccount,
    ResetMfa,
}

impl LifecycleAction {
    /// Display order
    pub const ALL: [LifecycleAction; 5] = [
        LifecycleAction::ResendVerification,
        LifecycleAction::ResetSecurityLock,
        LifecycleAction::DisableAccount,
        LifecycleAction::EnableAccount,
        LifecycleAction::ResetMfa,
    ];

    #[inline]
    pub const fn label(&self) -> &'static str {
        use LifecycleAction::*;
        match self {
            ResendVerification => "Resend Verification Email",
            ResetSecurityLock => "Reset Security Lock",
            DisableAccount => "Disable Account",
            EnableAccount => "Enable Account",
            ResetMfa => "Reset MFA",
        }
    }

    /// Title of the confirmation dialog
    #[inline]
    pub const fn confirmation_title(&self) -> &'static str {
        match self {
            LifecycleAction::ResetMfa => "Reset Multi-Factor Authentication",
            other => other.label(),
        }
    }

    pub fn confirmation_body(&self, target: &UserRecord) -> String {
        use LifecycleAction::*;
        let name = target.full_name();
        match self {
            ResendVerification => format!(
                "Are you sure you want to resend the verification email to {}? This will send a new verification link to the user.",
                target.email
            ),
            ResetSecurityLock => format!(
                "Are you sure you want to reset the security lock for {}? This will unlock the user's account and allow them to log in again.",
                name
            ),
            DisableAccount => format!(
                "Are you sure you want to disable the account for {}? The user will not be able to log in until the account is re-enabled.",
                name
            ),
            EnableAccount => format!(
                "Are you sure you want to enable the account for {}? The user will be able to log in once their account is enabled.",
                name
            ),
            ResetMfa => format!(
                "Are you sure you want to reset MFA for {}? This will remove their current MFA setup and require them to set it up again on their next login.",
                name
            ),
        }
    }

    #[inline]
    pub const fn success_message(&self) -> &'static str {
        use LifecycleAction::*;
        match self {
            ResendVerification => "Verification email sent successfully!",
            ResetSecurityLock => "Security lock reset successfully!",
            DisableAccount => "Account disabled successfully!",
            EnableAccount => "Account enabled successfully!",
            ResetMfa => "MFA reset successfully!",
        }
    }

    /// Verb phrase written to the audit log
    #[inline]
    pub const fn audit_verb(&self) -> &'static str {
        use LifecycleAction::*;
        match self {
            ResendVerification => "resent verification email",
            ResetSecurityLock => "reset security lock",
            DisableAccount => "disabled account",
            EnableAccount => "enabled account",
            ResetMfa => "reset MFA",
        }
    }

    /// Shown as a destructive (red) control
    #[inline]
    pub const fn is_danger(&self) -> bool {
        matches!(self, LifecycleAction::DisableAccount | LifecycleAction::ResetMfa)
    }
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user_record::fixture::record;

    #[test]
    fn test_confirmation_texts() {
        let user = record("u1");
        assert_eq!(
            LifecycleAction::ResetSecurityLock.confirmation_body(&user),
            "Are you sure you want to reset the security lock for Ada Lovelace? This will unlock the user's account and allow them to log in again."
        );
        assert!(
            LifecycleAction::ResendVerification
                .confirmation_body(&user)
                .contains("u1@example.com")
        );
        assert_eq!(
            LifecycleAction::ResetMfa.confirmation_title(),
            "Reset Multi-Factor Authentication"
        );
        assert_eq!(
            LifecycleAction::DisableAccount.confirmation_title(),
            "Disable Account"
        );
    }

    #[test]
    fn test_success_messages() {
        assert_eq!(
            LifecycleAction::EnableAccount.success_message(),
            "Account enabled successfully!"
        );
        assert_eq!(LifecycleAction::ResetMfa.success_message(), "MFA reset successfully!");
    }
}
