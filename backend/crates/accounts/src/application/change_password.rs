//! Password Change
//!
//! Self-service change (current + new + confirm) and administrator reset
//! (new + confirm). Nothing is stored; a valid form only produces a
//! notification.

use platform::password::{
    ClearTextPassword, MIN_PASSWORD_LENGTH, PasswordPolicyError, PasswordStrength,
};

use crate::domain::policy::resolver::PasswordFormKind;
use crate::domain::validation::{FieldErrors, FormField};

/// Values typed into the password block
#[derive(Default)]
pub struct PasswordDraft {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl std::fmt::Debug for PasswordDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordDraft")
            .field("current", &"[REDACTED]")
            .field("new", &"[REDACTED]")
            .field("confirm", &"[REDACTED]")
            .finish()
    }
}

impl PasswordDraft {
    pub fn clear(&mut self) {
        self.current.clear();
        self.new.clear();
        self.confirm.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.new.is_empty() && self.confirm.is_empty()
    }

    /// Meter next to the new password field; hidden while it is empty
    pub fn strength(&self) -> Option<PasswordStrength> {
        PasswordStrength::assess_input(&self.new)
    }

    pub fn validate(&self, kind: PasswordFormKind) -> Result<ClearTextPassword, FieldErrors> {
        let mut errors = FieldErrors::new();

        if kind.requires_current_password() && self.current.is_empty() {
            errors.push(
                FormField::CurrentPassword,
                "Please enter your current password",
            );
        }

        let new = if self.new.is_empty() {
            errors.push(FormField::NewPassword, "Please enter new password");
            None
        } else {
            match ClearTextPassword::new(self.new.clone()) {
                Ok(password) => Some(password),
                Err(err) => {
                    errors.push(FormField::NewPassword, policy_message(&err));
                    None
                }
            }
        };

        if self.confirm.is_empty() {
            let message = match kind {
                PasswordFormKind::SelfServiceChange => "Please confirm your new password",
                PasswordFormKind::AdminReset => "Please confirm the new password",
            };
            errors.push(FormField::ConfirmPassword, message);
        } else if self.confirm != self.new {
            errors.push(FormField::ConfirmPassword, "Passwords do not match");
        }

        match new {
            Some(password) if errors.is_empty() => Ok(password),
            _ => Err(errors),
        }
    }
}

fn policy_message(err: &PasswordPolicyError) -> String {
    match err {
        PasswordPolicyError::TooShort { .. } | PasswordPolicyError::EmptyOrWhitespace => {
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::StrengthLabel;

    fn draft(current: &str, new: &str, confirm: &str) -> PasswordDraft {
        PasswordDraft {
            current: current.into(),
            new: new.into(),
            confirm: confirm.into(),
        }
    }

    #[test]
    fn test_self_service_requires_current() {
        let errors = draft("", "Sup3r-secret", "Sup3r-secret")
            .validate(PasswordFormKind::SelfServiceChange)
            .unwrap_err();
        assert_eq!(
            errors.get(FormField::CurrentPassword),
            Some("Please enter your current password")
        );
        assert!(
            draft("", "Sup3r-secret", "Sup3r-secret")
                .validate(PasswordFormKind::AdminReset)
                .is_ok()
        );
    }

    #[test]
    fn test_confirm_must_match() {
        let errors = draft("old-password", "Sup3r-secret", "Sup3r-secreT")
            .validate(PasswordFormKind::SelfServiceChange)
            .unwrap_err();
        assert_eq!(
            errors.get(FormField::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_messages_for_empty_and_short() {
        let errors = draft("", "", "").validate(PasswordFormKind::AdminReset).unwrap_err();
        assert_eq!(errors.get(FormField::NewPassword), Some("Please enter new password"));
        assert_eq!(
            errors.get(FormField::ConfirmPassword),
            Some("Please confirm the new password")
        );

        let errors = draft("x", "short", "")
            .validate(PasswordFormKind::SelfServiceChange)
            .unwrap_err();
        assert_eq!(
            errors.get(FormField::NewPassword),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(
            errors.get(FormField::ConfirmPassword),
            Some("Please confirm your new password")
        );
    }

    #[test]
    fn test_strength_meter() {
        assert!(draft("", "", "").strength().is_none());
        let meter = draft("", "abc", "").strength().unwrap();
        assert_eq!(meter.label, StrengthLabel::Weak);
        let meter = draft("", "Abcdefgh1!xyz", "").strength().unwrap();
        assert_eq!(meter.score, 100);
        assert_eq!(meter.label, StrengthLabel::Strong);
    }

    #[test]
    fn test_clear() {
        let mut d = draft("a", "b", "c");
        d.clear();
        assert!(d.is_empty());
    }
}
