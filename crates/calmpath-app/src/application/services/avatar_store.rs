use async_trait::async_trait;
use std::sync::Arc;

use crate::application::utils::ResultExt;
use calmpath_domain::shared::{DomainError, UserId};
use calmpath_infrastructure::http::BlobStoreClient;

use super::session::SessionStore;

/// Where profile avatars go. Seam kept narrow so handlers stay
/// independent of the blob store wire details.
#[async_trait]
pub trait AvatarStore: Send + Sync {
    /// Upload the avatar and return its public download URL.
    async fn upload(
        &self,
        user_id: &UserId,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError>;
}

pub struct BlobAvatarStore {
    blobstore: Arc<BlobStoreClient>,
    session: Arc<SessionStore>,
}

impl BlobAvatarStore {
    pub fn new(blobstore: Arc<BlobStoreClient>, session: Arc<SessionStore>) -> Self {
        Self { blobstore, session }
    }
}

#[async_trait]
impl AvatarStore for BlobAvatarStore {
    async fn upload(
        &self,
        user_id: &UserId,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError> {
        let id_token = self
            .session
            .id_token()
            .await
            .ok_or_else(|| DomainError::InvalidCredentials("Not signed in".to_string()))?;

        self.blobstore
            .upload_profile_image(user_id, bytes, content_type, &id_token)
            .await
            .to_infra_err()
    }
}
