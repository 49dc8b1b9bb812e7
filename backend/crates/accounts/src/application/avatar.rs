//! Avatar Upload Use Case
//!
//! Reads an image file, encodes it as a data URI and stores it under the
//! record's avatar key.

use std::path::Path;
use std::sync::Arc;

use platform::data_uri;

use crate::application::notification::{AVATAR_UPDATED, Notification};
use crate::domain::repository::AvatarRepository;
use crate::domain::value_object::record_id::RecordId;
use crate::error::{AccountsError, AccountsResult};

pub struct UploadAvatarUseCase<A>
where
    A: AvatarRepository,
{
    avatars: Arc<A>,
}

impl<A> UploadAvatarUseCase<A>
where
    A: AvatarRepository,
{
    pub fn new(avatars: Arc<A>) -> Self {
        Self { avatars }
    }

    pub async fn execute(&self, id: &RecordId, path: &Path) -> AccountsResult<Notification> {
        let mime = data_uri::image_mime_for_path(path)
            .ok_or_else(|| AccountsError::UnsupportedImage(path.display().to_string()))?;

        let bytes = tokio::fs::read(path).await?;
        let uri = data_uri::encode(mime.essence_str(), &bytes);

        self.avatars.save(id, uri).await?;

        tracing::info!(%id, %mime, size = bytes.len(), "Avatar stored");
        Ok(Notification::success(AVATAR_UPDATED))
    }

    /// Stored data URI, if any
    pub async fn current(&self, id: &RecordId) -> AccountsResult<Option<String>> {
        self.avatars.find(id).await
    }
}
