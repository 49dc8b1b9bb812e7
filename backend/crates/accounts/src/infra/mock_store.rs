//! Mock Record Store
//!
//! Read-only, ordered collection of user records seeded from an embedded
//! JSON fixture. Nothing is ever written back.

use std::sync::Arc;

use crate::domain::entity::user_record::UserRecord;
use crate::domain::repository::UserRecordRepository;
use crate::domain::value_object::record_id::RecordId;
use crate::error::{AccountsError, AccountsResult};

const SEED_JSON: &str = include_str!("../../data/mock_users.json");

/// In-memory user store, cheap to clone
#[derive(Debug, Clone)]
pub struct MockUserStore {
    records: Arc<[UserRecord]>,
}

impl MockUserStore {
    pub fn new(records: Vec<UserRecord>) -> AccountsResult<Self> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.id() == record.id()) {
                return Err(AccountsError::Internal(format!(
                    "Duplicate record id: {}",
                    record.id()
                )));
            }
            if records[..i].iter().any(|r| r.email == record.email) {
                return Err(AccountsError::Internal(format!(
                    "Duplicate email: {}",
                    record.email
                )));
            }
        }
        Ok(Self {
            records: records.into(),
        })
    }

    /// Store holding the embedded fixture
    pub fn seeded() -> AccountsResult<Self> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(json: &str) -> AccountsResult<Self> {
        let records: Vec<UserRecord> = serde_json::from_str(json)?;
        tracing::debug!(count = records.len(), "Seed records parsed");
        Self::new(records)
    }

    /// First record; the default self-service account
    pub fn first_id(&self) -> Option<&RecordId> {
        self.records.first().map(UserRecord::id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl UserRecordRepository for MockUserStore {
    async fn list(&self) -> AccountsResult<Vec<UserRecord>> {
        Ok(self.records.to_vec())
    }

    async fn find_by_id(&self, id: &RecordId) -> AccountsResult<Option<UserRecord>> {
        Ok(self.records.iter().find(|r| r.id() == id).cloned())
    }
}
