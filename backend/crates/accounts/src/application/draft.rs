//! Profile Draft
//!
//! Raw form values of the profile and add-user forms, plus the per-section
//! checks that turn them back into validated values.

use serde::Serialize;

use crate::domain::entity::user_record::{NewUserRecord, UserRecord};
use crate::domain::policy::resolver::can_assign_role;
use crate::domain::validation::{FieldErrors, FormField};
use crate::domain::value_object::{
    actor_role::ActorRole,
    email::Email,
    person_name::{NamePart, PersonName},
    phone_number::{DEFAULT_PHONE_PREFIX, PhoneNumber},
    sso_provider::SsoProvider,
    target_role::TargetRole,
    timezone::Timezone,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_prefix: String,
    pub phone_number: String,
    /// Raw selector value; `None` when nothing is selected
    pub role: Option<u8>,
    pub test_mode_only: Option<bool>,
    pub active: bool,
    pub locked: bool,
    pub verified: bool,
    pub sso_provider: SsoProvider,
    pub mfa_enabled: bool,
    pub timezone: Option<Timezone>,
}

impl ProfileDraft {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            first_name: record.first_name.to_string(),
            last_name: record.last_name.to_string(),
            email: record.email.to_string(),
            phone_prefix: record.phone.prefix().to_string(),
            phone_number: record.phone.number().to_string(),
            role: Some(record.role.level()),
            test_mode_only: Some(record.test_mode_only),
            active: record.active,
            locked: record.locked,
            verified: record.verified,
            sso_provider: record.sso_provider,
            mfa_enabled: record.mfa_enabled,
            timezone: record.timezone,
        }
    }

    /// Starting values of the add-user form
    pub fn for_new_user() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone_prefix: DEFAULT_PHONE_PREFIX.to_string(),
            phone_number: String::new(),
            role: Some(TargetRole::default().level()),
            test_mode_only: Some(true),
            active: true,
            locked: false,
            verified: false,
            sso_provider: SsoProvider::None,
            mfa_enabled: false,
            timezone: None,
        }
    }

    pub fn first_name(&self, errors: &mut FieldErrors) -> Option<PersonName> {
        errors.capture(
            FormField::FirstName,
            PersonName::new(&self.first_name, NamePart::First),
        )
    }

    pub fn last_name(&self, errors: &mut FieldErrors) -> Option<PersonName> {
        errors.capture(
            FormField::LastName,
            PersonName::new(&self.last_name, NamePart::Last),
        )
    }

    pub fn email(&self, errors: &mut FieldErrors) -> Option<Email> {
        errors.capture(FormField::Email, Email::new(self.email.as_str()))
    }

    pub fn phone(&self, errors: &mut FieldErrors) -> Option<PhoneNumber> {
        let prefix = errors.capture(
            FormField::PhonePrefix,
            PhoneNumber::validate_prefix(&self.phone_prefix),
        );
        let number = errors.capture(
            FormField::PhoneNumber,
            PhoneNumber::validate_number(&self.phone_number),
        );
        match (prefix, number) {
            (Some(prefix), Some(number)) => {
                errors.capture(FormField::PhoneNumber, PhoneNumber::new(&prefix, &number))
            }
            _ => None,
        }
    }

    /// Role selection, including the super-admin gate on levels 1 and 2
    ///
    /// `current` is the loaded role; keeping it unchanged is always allowed.
    pub fn role(
        &self,
        actor: ActorRole,
        current: Option<TargetRole>,
        errors: &mut FieldErrors,
    ) -> Option<TargetRole> {
        let Some(role) = self.role.and_then(TargetRole::from_level) else {
            errors.push(FormField::Role, "Please select a role");
            return None;
        };
        if current != Some(role) && !can_assign_role(actor, role) {
            errors.push(
                FormField::Role,
                format!("Only a super admin can assign the {} role", role.label()),
            );
            return None;
        }
        Some(role)
    }

    pub fn test_mode_only(&self, errors: &mut FieldErrors) -> Option<bool> {
        if self.test_mode_only.is_none() {
            errors.push(FormField::TestModeOnly, "Please select mode access");
        }
        self.test_mode_only
    }

    /// Every field of the add-user form
    pub fn to_new_record(&self, actor: ActorRole) -> Result<NewUserRecord, FieldErrors> {
        let mut errors = FieldErrors::new();
        let first_name = self.first_name(&mut errors);
        let last_name = self.last_name(&mut errors);
        let email = self.email(&mut errors);
        let phone = self.phone(&mut errors);
        let role = self.role(actor, None, &mut errors);
        let test_mode_only = self.test_mode_only(&mut errors);

        match (first_name, last_name, email, phone, role, test_mode_only) {
            (
                Some(first_name),
                Some(last_name),
                Some(email),
                Some(phone),
                Some(role),
                Some(test_mode_only),
            ) => Ok(NewUserRecord {
                first_name,
                last_name,
                email,
                phone,
                role,
                active: self.active,
                locked: self.locked,
                verified: self.verified,
                sso_provider: self.sso_provider,
                mfa_enabled: self.mfa_enabled,
                test_mode_only,
                timezone: self.timezone,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user_record::fixture::record;

    fn filled() -> ProfileDraft {
        ProfileDraft {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            phone_number: "(555) 201-0000".into(),
            ..ProfileDraft::for_new_user()
        }
    }

    #[test]
    fn test_new_user_defaults() {
        let draft = ProfileDraft::for_new_user();
        assert_eq!(draft.phone_prefix, "+1");
        assert_eq!(draft.role, Some(4));
        assert_eq!(draft.test_mode_only, Some(true));
        assert!(draft.active);
        assert!(!draft.locked);
        assert!(!draft.verified);
        assert_eq!(draft.sso_provider, SsoProvider::None);
        assert!(!draft.mfa_enabled);
        assert!(draft.timezone.is_none());
    }

    #[test]
    fn test_from_record() {
        let draft = ProfileDraft::from_record(&record("u1"));
        assert_eq!(draft.first_name, "Ada");
        assert_eq!(draft.phone_prefix, "+1");
        assert_eq!(draft.role, Some(4));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let draft = ProfileDraft {
            phone_prefix: String::new(),
            role: None,
            test_mode_only: None,
            ..ProfileDraft::for_new_user()
        };
        let errors = draft.to_new_record(ActorRole::SuperAdmin).unwrap_err();
        assert_eq!(errors.get(FormField::FirstName), Some("Please enter first name"));
        assert_eq!(errors.get(FormField::LastName), Some("Please enter last name"));
        assert_eq!(errors.get(FormField::Email), Some("Please enter email"));
        assert_eq!(errors.get(FormField::PhonePrefix), Some("Required"));
        assert_eq!(errors.get(FormField::PhoneNumber), Some("Please enter phone number"));
        assert_eq!(errors.get(FormField::Role), Some("Please select a role"));
        assert_eq!(
            errors.get(FormField::TestModeOnly),
            Some("Please select mode access")
        );
    }

    #[test]
    fn test_privileged_role_needs_super_admin() {
        let draft = ProfileDraft {
            role: Some(2),
            ..filled()
        };
        let errors = draft.to_new_record(ActorRole::PlatformAdmin).unwrap_err();
        assert_eq!(
            errors.get(FormField::Role),
            Some("Only a super admin can assign the Admin role")
        );
        assert!(draft.to_new_record(ActorRole::SuperAdmin).is_ok());
    }

    #[test]
    fn test_unchanged_privileged_role_is_kept() {
        let mut existing = record("u2");
        existing.role = TargetRole::Admin;
        let draft = ProfileDraft::from_record(&existing);

        let mut errors = FieldErrors::new();
        let role = draft.role(ActorRole::PlatformAdmin, Some(TargetRole::Admin), &mut errors);
        assert_eq!(role, Some(TargetRole::Admin));
        assert!(errors.is_empty());

        let promoted = ProfileDraft {
            role: Some(1),
            ..draft
        };
        let mut errors = FieldErrors::new();
        assert!(
            promoted
                .role(ActorRole::PlatformAdmin, Some(TargetRole::Admin), &mut errors)
                .is_none()
        );
        assert_eq!(
            errors.get(FormField::Role),
            Some("Only a super admin can assign the Super Admin role")
        );
    }

    #[test]
    fn test_valid_form() {
        let new = filled().to_new_record(ActorRole::PlatformAdmin).unwrap();
        assert_eq!(new.first_name.as_str(), "Grace");
        assert_eq!(new.role, TargetRole::User);
        assert!(new.test_mode_only);
        assert_eq!(new.phone.to_string(), "+1 (555) 201-0000");
    }
}
