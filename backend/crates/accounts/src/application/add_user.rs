//! Add User Use Case
//!
//! Validates the creation form and builds the record. The email must not be
//! taken by a stored record. The record is returned to the caller and
//! audited; the store is not touched.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::audit::AuditEntry;
use crate::application::draft::ProfileDraft;
use crate::application::notification::{Notification, USER_ADDED};
use crate::domain::entity::user_record::UserRecord;
use crate::domain::repository::UserRecordRepository;
use crate::domain::validation::{FieldErrors, FormField};
use crate::domain::value_object::{actor_role::ActorRole, email::Email};
use crate::error::AccountsResult;

pub const EMAIL_TAKEN: &str = "Email already exists";

#[derive(Debug, Clone, Serialize)]
pub struct AddUserOutput {
    pub record: UserRecord,
    pub notification: Notification,
    pub audit: AuditEntry,
}

pub struct AddUserUseCase<R>
where
    R: UserRecordRepository,
{
    repo: Arc<R>,
    actor: ActorRole,
}

impl<R> AddUserUseCase<R>
where
    R: UserRecordRepository,
{
    pub fn new(repo: Arc<R>, actor: ActorRole) -> Self {
        Self { repo, actor }
    }

    pub async fn execute(
        &self,
        draft: &ProfileDraft,
        now: DateTime<Utc>,
    ) -> AccountsResult<AddUserOutput> {
        let taken = match Email::new(draft.email.as_str()) {
            Ok(email) => self.email_taken(&email).await?,
            Err(_) => false,
        };

        let new = match draft.to_new_record(self.actor) {
            Ok(new) if !taken => new,
            Ok(_) => {
                let mut errors = FieldErrors::new();
                errors.push(FormField::Email, EMAIL_TAKEN);
                return Err(errors.into());
            }
            Err(mut errors) => {
                if taken {
                    errors.push(FormField::Email, EMAIL_TAKEN);
                }
                return Err(errors.into());
            }
        };
        let record = UserRecord::create(new, now);

        let audit = AuditEntry::new(self.actor, record.id().clone(), "added new user").emit();

        tracing::info!(
            id = %record.id(),
            role = record.role.level(),
            "User added (not persisted)"
        );

        Ok(AddUserOutput {
            record,
            notification: Notification::success(USER_ADDED),
            audit,
        })
    }

    async fn email_taken(&self, email: &Email) -> AccountsResult<bool> {
        let records = self.repo.list().await?;
        Ok(records.iter().any(|r| r.email == *email))
    }
}
