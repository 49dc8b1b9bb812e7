//! Lifecycle Confirmation
//!
//! Opening an action shows a confirmation dialog; confirming re-checks that
//! the action is still offered and then yields a notification plus an audit
//! entry. The record is never changed.

use serde::Serialize;

use crate::application::audit::AuditEntry;
use crate::application::notification::Notification;
use crate::domain::entity::user_record::UserRecord;
use crate::domain::policy::{LifecycleAction, PageContext, resolver::lifecycle_actions};
use crate::domain::value_object::{actor_role::ActorRole, record_id::RecordId};
use crate::error::{AccountsError, AccountsResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationModal {
    pub action: LifecycleAction,
    pub target_id: RecordId,
    pub title: &'static str,
    pub body: String,
    pub danger: bool,
}

impl ConfirmationModal {
    /// Fails when the resolver does not offer `action` for these inputs
    pub fn open(
        actor: ActorRole,
        ctx: PageContext,
        target: &UserRecord,
        action: LifecycleAction,
    ) -> AccountsResult<Self> {
        ensure_offered(actor, ctx, target, action)?;
        Ok(Self {
            action,
            target_id: target.id().clone(),
            title: action.confirmation_title(),
            body: action.confirmation_body(target),
            danger: action.is_danger(),
        })
    }

    pub fn confirm(
        self,
        actor: ActorRole,
        ctx: PageContext,
        target: &UserRecord,
    ) -> AccountsResult<ActionOutcome> {
        if *target.id() != self.target_id {
            return Err(AccountsError::Internal(format!(
                "Confirmation for {} applied to {}",
                self.target_id,
                target.id()
            )));
        }
        ensure_offered(actor, ctx, target, self.action)?;

        let audit =
            AuditEntry::new(actor, self.target_id, self.action.audit_verb()).emit();

        Ok(ActionOutcome {
            action: self.action,
            notification: Notification::success(self.action.success_message()),
            audit,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub action: LifecycleAction,
    pub notification: Notification,
    pub audit: AuditEntry,
}

fn ensure_offered(
    actor: ActorRole,
    ctx: PageContext,
    target: &UserRecord,
    action: LifecycleAction,
) -> AccountsResult<()> {
    if lifecycle_actions(actor, ctx, target).contains(&action) {
        Ok(())
    } else {
        Err(AccountsError::ActionNotAvailable(action))
    }
}
