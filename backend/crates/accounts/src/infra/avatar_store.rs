//! In-memory avatar store
//!
//! Caller-owned key-value map from `avatar_{id}` to an image data URI.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use platform::data_uri;

use crate::domain::repository::AvatarRepository;
use crate::domain::value_object::record_id::RecordId;
use crate::error::{AccountsError, AccountsResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryAvatarStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryAvatarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw lookup by storage key
    pub fn get(&self, key: &str) -> AccountsResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AccountsError::Internal("Avatar store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }
}

impl AvatarRepository for MemoryAvatarStore {
    async fn save(&self, id: &RecordId, uri: String) -> AccountsResult<()> {
        if !data_uri::mime_of(&uri).is_some_and(|mime| mime.starts_with("image/")) {
            return Err(AccountsError::UnsupportedImage(id.avatar_key()));
        }
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AccountsError::Internal("Avatar store lock poisoned".to_string()))?;
        entries.insert(id.avatar_key(), uri);
        Ok(())
    }

    async fn find(&self, id: &RecordId) -> AccountsResult<Option<String>> {
        self.get(&id.avatar_key())
    }
}
