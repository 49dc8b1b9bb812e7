//! Profile Page
//!
//! State of one open profile: the last-loaded record, the draft being edited,
//! the section open for editing, the password block and the confirmation
//! dialog. At most one section is open at a time.
//!
//! Saves validate the open section and report success, but nothing is written
//! back to the store. After a save the draft shows the loaded values again.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::password::PasswordStrength;
use serde::Serialize;

use crate::application::add_user::{AddUserOutput, AddUserUseCase};
use crate::application::audit::AuditEntry;
use crate::application::change_password::PasswordDraft;
use crate::application::config::DashboardConfig;
use crate::application::draft::ProfileDraft;
use crate::application::lifecycle::{ActionOutcome, ConfirmationModal};
use crate::application::notification::{Notification, SECTION_UPDATED};
use crate::domain::entity::{actor_context::ActorContext, user_record::UserRecord};
use crate::domain::policy::{
    LifecycleAction, PageContext, PageMode, ProfileSection, SubMode, Visibility,
    resolver::PasswordFormKind, resolve,
};
use crate::domain::repository::UserRecordRepository;
use crate::domain::validation::FieldErrors;
use crate::domain::value_object::record_id::RecordId;
use crate::error::{AccountsError, AccountsResult};

/// Which profile to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenProfileInput {
    /// The actor's own record
    SelfService,
    /// Another record, by id
    Admin { id: RecordId, sub: SubMode },
    /// Empty creation form
    Add,
}

pub struct OpenProfileUseCase<R>
where
    R: UserRecordRepository,
{
    repo: Arc<R>,
    config: Arc<DashboardConfig>,
}

impl<R> OpenProfileUseCase<R>
where
    R: UserRecordRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<DashboardConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        actor: &ActorContext,
        input: OpenProfileInput,
    ) -> AccountsResult<ProfilePage> {
        let (context, record) = match input {
            OpenProfileInput::SelfService => {
                let record = self.load(&actor.self_user_id).await?;
                (PageContext::self_service(), Some(record))
            }
            OpenProfileInput::Admin { id, sub: SubMode::Add } => {
                tracing::debug!(%id, "Add mode ignores the record id");
                (PageContext::admin(SubMode::Add), None)
            }
            OpenProfileInput::Admin { id, sub } => {
                let record = self.load(&id).await?;
                let context = match actor.page_mode_for(&id) {
                    PageMode::SelfService => PageContext::self_service(),
                    PageMode::Admin => PageContext::admin(sub),
                };
                (context, Some(record))
            }
            OpenProfileInput::Add => (PageContext::admin(SubMode::Add), None),
        };

        tracing::debug!(
            actor_role = %actor.role,
            context = %context,
            id = record.as_ref().map(|r| r.id().as_str()),
            "Profile opened"
        );

        Ok(ProfilePage::new(
            actor.clone(),
            context,
            record,
            self.config.password_expiry_days,
        ))
    }

    async fn load(&self, id: &RecordId) -> AccountsResult<UserRecord> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AccountsError::UserNotFound(id.to_string()))
    }
}

/// Result of a successful section save
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSaved {
    pub section: ProfileSection,
    pub notification: Notification,
    /// Present for changes made to someone else's record
    pub audit: Option<AuditEntry>,
}

#[derive(Debug)]
pub struct ProfilePage {
    actor: ActorContext,
    context: PageContext,
    record: Option<UserRecord>,
    draft: ProfileDraft,
    password: PasswordDraft,
    editing: Option<ProfileSection>,
    modal: Option<ConfirmationModal>,
    password_expiry_days: i64,
}

impl ProfilePage {
    pub fn new(
        actor: ActorContext,
        context: PageContext,
        record: Option<UserRecord>,
        password_expiry_days: i64,
    ) -> Self {
        let draft = match &record {
            Some(record) if !context.is_add() => ProfileDraft::from_record(record),
            _ => ProfileDraft::for_new_user(),
        };
        Self {
            actor,
            context,
            record: record.filter(|_| !context.is_add()),
            draft,
            password: PasswordDraft::default(),
            editing: None,
            modal: None,
            password_expiry_days,
        }
    }

    pub fn context(&self) -> PageContext {
        self.context
    }

    pub fn actor(&self) -> &ActorContext {
        &self.actor
    }

    pub fn record(&self) -> Option<&UserRecord> {
        self.record.as_ref()
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Form values; only the open section's fields are checked on save
    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    pub fn password_mut(&mut self) -> &mut PasswordDraft {
        &mut self.password
    }

    pub fn password_strength(&self) -> Option<PasswordStrength> {
        self.password.strength()
    }

    pub fn editing(&self) -> Option<ProfileSection> {
        self.editing
    }

    pub fn modal(&self) -> Option<&ConfirmationModal> {
        self.modal.as_ref()
    }

    pub fn password_expiry_days(&self) -> i64 {
        self.password_expiry_days
    }

    pub fn password_expires_at(&self) -> Option<DateTime<Utc>> {
        self.record
            .as_ref()
            .map(|r| r.password_expires_at(self.password_expiry_days))
    }

    pub fn visibility(&self) -> Visibility {
        resolve(
            self.actor.role,
            self.context,
            self.record.as_ref(),
            self.editing,
        )
    }

    /// Open `section`; a different open section is discarded first
    pub fn begin_edit(&mut self, section: ProfileSection) -> AccountsResult<()> {
        if self.editing == Some(section) {
            return Ok(());
        }
        let offered = self
            .visibility()
            .section(section)
            .is_some_and(|s| s.can_begin_edit);
        if !offered {
            return Err(AccountsError::SectionNotEditable(section));
        }
        if let Some(open) = self.editing {
            tracing::debug!(%open, next = %section, "Discarding open section");
            self.discard_edit();
        }
        self.editing = Some(section);
        Ok(())
    }

    /// Close the open section and restore the last-loaded values
    pub fn discard_edit(&mut self) {
        self.reset_draft();
        self.editing = None;
    }

    pub fn save_section(&mut self, section: ProfileSection) -> AccountsResult<SectionSaved> {
        if self.context.is_add() || self.editing != Some(section) {
            return Err(AccountsError::SectionNotEditable(section));
        }
        let Some(record) = self.record.as_ref() else {
            return Err(AccountsError::SectionNotEditable(section));
        };
        let target_id = record.id().clone();

        let password_form = PasswordFormKind::for_page(self.context.page);
        self.validate_section(section, password_form)
            .map_err(AccountsError::Validation)?;

        let (message, action) = match section {
            ProfileSection::Security => (
                password_form.success_message(),
                "reset password".to_string(),
            ),
            other => (SECTION_UPDATED, format!("updated {}", other.title())),
        };

        let audit = match self.context.page {
            PageMode::Admin => Some(AuditEntry::new(self.actor.role, target_id, action).emit()),
            PageMode::SelfService => {
                tracing::info!(id = %target_id, %section, "Self-service update (not persisted)");
                None
            }
        };

        self.discard_edit();

        Ok(SectionSaved {
            section,
            notification: Notification::success(message),
            audit,
        })
    }

    fn validate_section(
        &self,
        section: ProfileSection,
        password_form: PasswordFormKind,
    ) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        match section {
            ProfileSection::UserInformation => {
                self.draft.first_name(&mut errors);
                self.draft.last_name(&mut errors);
                self.draft.phone(&mut errors);
            }
            ProfileSection::AccessPermissions => {
                let current = self.record.as_ref().map(|r| r.role);
                self.draft.role(self.actor.role, current, &mut errors);
                self.draft.test_mode_only(&mut errors);
            }
            ProfileSection::Security => {
                self.password.validate(password_form)?;
            }
            ProfileSection::Preferences
            | ProfileSection::YourRole
            | ProfileSection::RolesPermissions
            | ProfileSection::Mfa => {}
        }
        errors.into_result()
    }

    /// Submit the creation form
    pub async fn submit_add<R>(
        &self,
        repo: Arc<R>,
        now: DateTime<Utc>,
    ) -> AccountsResult<AddUserOutput>
    where
        R: UserRecordRepository,
    {
        if !self.context.is_add() {
            return Err(AccountsError::SectionNotEditable(
                ProfileSection::UserInformation,
            ));
        }
        AddUserUseCase::new(repo, self.actor.role)
            .execute(&self.draft, now)
            .await
    }

    pub fn open_action(&mut self, action: LifecycleAction) -> AccountsResult<&ConfirmationModal> {
        let record = self
            .record
            .as_ref()
            .ok_or(AccountsError::ActionNotAvailable(action))?;
        let modal = ConfirmationModal::open(self.actor.role, self.context, record, action)?;
        Ok(self.modal.insert(modal))
    }

    pub fn confirm_action(&mut self) -> AccountsResult<ActionOutcome> {
        let modal = self
            .modal
            .take()
            .ok_or_else(|| AccountsError::Internal("No confirmation is open".to_string()))?;
        let record = self
            .record
            .as_ref()
            .ok_or(AccountsError::ActionNotAvailable(modal.action))?;
        modal.confirm(self.actor.role, self.context, record)
    }

    pub fn cancel_action(&mut self) {
        self.modal = None;
    }

    fn reset_draft(&mut self) {
        self.draft = match &self.record {
            Some(record) => ProfileDraft::from_record(record),
            None => ProfileDraft::for_new_user(),
        };
        self.password.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user_record::fixture::record;
    use crate::domain::validation::FormField;
    use crate::domain::value_object::{actor_role::ActorRole, target_role::TargetRole};
    use crate::infra::MockUserStore;

    fn admin_page(role: ActorRole, sub: SubMode) -> ProfilePage {
        let actor = ActorContext::new(role, RecordId::parse_str("me").unwrap());
        ProfilePage::new(actor, PageContext::admin(sub), Some(record("u1")), 90)
    }

    #[test]
    fn test_one_section_at_a_time() {
        let mut page = admin_page(ActorRole::SuperAdmin, SubMode::Edit);
        page.begin_edit(ProfileSection::UserInformation).unwrap();
        page.draft_mut().first_name = "Changed".into();

        page.begin_edit(ProfileSection::Preferences).unwrap();
        assert_eq!(page.editing(), Some(ProfileSection::Preferences));
        assert_eq!(page.draft().first_name, "Ada");
        assert!(page.visibility().is_editable(ProfileSection::Preferences));
        assert!(!page.visibility().is_editable(ProfileSection::UserInformation));
    }

    #[test]
    fn test_discard_reverts() {
        let mut page = admin_page(ActorRole::SuperAdmin, SubMode::Edit);
        page.begin_edit(ProfileSection::AccessPermissions).unwrap();
        page.draft_mut().role = Some(5);
        page.discard_edit();
        assert_eq!(page.draft().role, Some(4));
        assert!(page.editing().is_none());
    }

    #[test]
    fn test_view_mode_refuses_edit() {
        let mut page = admin_page(ActorRole::SuperAdmin, SubMode::View);
        assert!(matches!(
            page.begin_edit(ProfileSection::UserInformation),
            Err(AccountsError::SectionNotEditable(ProfileSection::UserInformation))
        ));
    }

    #[test]
    fn test_save_validates_and_audits() {
        let mut page = admin_page(ActorRole::PlatformAdmin, SubMode::Edit);
        page.begin_edit(ProfileSection::UserInformation).unwrap();
        page.draft_mut().last_name = "   ".into();
        let err = page.save_section(ProfileSection::UserInformation).unwrap_err();
        assert_eq!(
            err.field_errors().and_then(|e| e.get(FormField::LastName)),
            Some("Please enter last name")
        );
        assert_eq!(page.editing(), Some(ProfileSection::UserInformation));

        page.draft_mut().last_name = "Byron".into();
        let saved = page.save_section(ProfileSection::UserInformation).unwrap();
        assert_eq!(saved.notification.message, "Section updated successfully!");
        assert_eq!(
            saved.audit.unwrap().to_string(),
            "AUDIT: Admin platform_admin updated User Information for user u1"
        );
        assert!(page.editing().is_none());
        assert_eq!(page.record().unwrap().last_name.as_str(), "Lovelace");
        assert_eq!(page.draft().last_name, "Lovelace");
    }

    #[test]
    fn test_platform_admin_saves_access_of_admin_record() {
        let mut target = record("u2");
        target.role = TargetRole::Admin;
        let actor = ActorContext::new(ActorRole::PlatformAdmin, RecordId::parse_str("me").unwrap());
        let mut page = ProfilePage::new(actor, PageContext::admin(SubMode::Edit), Some(target), 90);

        page.begin_edit(ProfileSection::AccessPermissions).unwrap();
        page.draft_mut().test_mode_only = Some(false);
        let saved = page.save_section(ProfileSection::AccessPermissions).unwrap();
        assert_eq!(saved.notification.message, "Section updated successfully!");

        page.begin_edit(ProfileSection::AccessPermissions).unwrap();
        page.draft_mut().role = Some(1);
        let err = page.save_section(ProfileSection::AccessPermissions).unwrap_err();
        assert_eq!(
            err.field_errors().and_then(|e| e.get(FormField::Role)),
            Some("Only a super admin can assign the Super Admin role")
        );
    }

    #[test]
    fn test_save_requires_open_section() {
        let mut page = admin_page(ActorRole::SuperAdmin, SubMode::Edit);
        assert!(page.save_section(ProfileSection::Preferences).is_err());
    }

    #[test]
    fn test_admin_password_reset() {
        let mut page = admin_page(ActorRole::SuperAdmin, SubMode::Edit);
        page.begin_edit(ProfileSection::Security).unwrap();
        page.password_mut().new = "N3w-password".into();
        page.password_mut().confirm = "N3w-password".into();
        assert!(page.password_strength().is_some());
        let saved = page.save_section(ProfileSection::Security).unwrap();
        assert_eq!(
            saved.notification.message,
            "Password reset successfully. User will be notified via email."
        );
        assert_eq!(saved.audit.unwrap().action, "reset password");
        assert!(page.password_strength().is_none());
    }

    #[test]
    fn test_self_service_password_change() {
        let actor = ActorContext::new(ActorRole::User, RecordId::parse_str("u1").unwrap());
        let mut page = ProfilePage::new(actor, PageContext::self_service(), Some(record("u1")), 90);
        page.begin_edit(ProfileSection::Security).unwrap();
        page.password_mut().new = "N3w-password".into();
        page.password_mut().confirm = "N3w-password".into();
        let err = page.save_section(ProfileSection::Security).unwrap_err();
        assert!(
            err.field_errors()
                .and_then(|e| e.get(FormField::CurrentPassword))
                .is_some()
        );

        page.password_mut().current = "old-password".into();
        let saved = page.save_section(ProfileSection::Security).unwrap();
        assert_eq!(saved.notification.message, "Password changed successfully!");
        assert!(saved.audit.is_none());
    }

    #[test]
    fn test_action_modal_flow() {
        let mut page = admin_page(ActorRole::PlatformAdmin, SubMode::View);
        let modal = page.open_action(LifecycleAction::ResendVerification).unwrap();
        assert_eq!(modal.title, "Resend Verification Email");
        page.cancel_action();
        assert!(page.modal().is_none());
        assert!(page.confirm_action().is_err());

        page.open_action(LifecycleAction::DisableAccount).unwrap();
        let outcome = page.confirm_action().unwrap();
        assert_eq!(outcome.notification.message, "Account disabled successfully!");
        assert!(page.record().unwrap().active);
    }

    #[tokio::test]
    async fn test_add_page() {
        let actor = ActorContext::new(ActorRole::SuperAdmin, RecordId::parse_str("me").unwrap());
        let mut page = ProfilePage::new(actor, PageContext::admin(SubMode::Add), None, 90);
        assert!(page.begin_edit(ProfileSection::UserInformation).is_err());
        assert!(page.open_action(LifecycleAction::DisableAccount).is_err());

        let draft = page.draft_mut();
        draft.first_name = "Alan".into();
        draft.last_name = "Turing".into();
        draft.email = "alan@example.com".into();
        draft.phone_number = "555 0199".into();
        draft.role = Some(1);
        let store = Arc::new(MockUserStore::new(vec![record("u1")]).unwrap());
        let output = page.submit_add(store, Utc::now()).await.unwrap();
        assert_eq!(output.record.role.label(), "Super Admin");
    }
}
