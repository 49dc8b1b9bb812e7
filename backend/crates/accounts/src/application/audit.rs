//! Audit Log
//!
//! Administrative changes are simulated, so the audit line is their only
//! trace. Lines go to the `audit` tracing target.

use serde::Serialize;
use std::fmt;

use crate::domain::value_object::{actor_role::ActorRole, record_id::RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub actor_role: ActorRole,
    pub target_id: RecordId,
    pub action: String,
}

impl AuditEntry {
    pub fn new(actor_role: ActorRole, target_id: RecordId, action: impl Into<String>) -> Self {
        Self {
            actor_role,
            target_id,
            action: action.into(),
        }
    }

    /// Write the entry to the audit target and hand it back
    pub fn emit(self) -> Self {
        tracing::info!(
            target: "audit",
            actor_role = %self.actor_role,
            target_id = %self.target_id,
            action = %self.action,
            "{}",
            self
        );
        self
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AUDIT: Admin {} {} for user {}",
            self.actor_role, self.action, self.target_id
        )
    }
}
