//! Repository Traits
//!
//! Read access to user records and the avatar key-value store.
//! Implementations are in the infrastructure layer.

use crate::domain::entity::user_record::UserRecord;
use crate::domain::value_object::record_id::RecordId;
use crate::error::AccountsResult;

/// User record repository trait
#[trait_variant::make(UserRecordRepository: Send)]
pub trait LocalUserRecordRepository {
    /// All records in store order
    async fn list(&self) -> AccountsResult<Vec<UserRecord>>;

    /// Find record by ID
    async fn find_by_id(&self, id: &RecordId) -> AccountsResult<Option<UserRecord>>;
}

/// Avatar storage trait, keyed by `avatar_{id}`
#[trait_variant::make(AvatarRepository: Send)]
pub trait LocalAvatarRepository {
    /// Store a data URI, replacing any previous one
    async fn save(&self, id: &RecordId, data_uri: String) -> AccountsResult<()>;

    async fn find(&self, id: &RecordId) -> AccountsResult<Option<String>>;
}
