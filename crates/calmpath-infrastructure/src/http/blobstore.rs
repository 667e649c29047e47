//! REST client for the managed blob store. Only profile images are
//! uploaded; everything else the client reads via plain download URLs.

use anyhow::{anyhow, Context, Result};
use log::info;
use serde_json::Value;
use std::sync::Arc;

use calmpath_domain::shared::UserId;

use super::HttpClient;
use crate::config::BackendConfig;

pub struct BlobStoreClient {
    http: Arc<HttpClient>,
    base_url: String,
    bucket: String,
}

impl BlobStoreClient {
    pub fn new(http: Arc<HttpClient>, config: &BackendConfig) -> Self {
        Self {
            http,
            base_url: config.blobstore_url.trim_end_matches('/').to_string(),
            bucket: config.storage_bucket.clone(),
        }
    }

    /// Upload the user's avatar and return its public download URL.
    /// One object per user, overwritten on every upload.
    pub async fn upload_profile_image(
        &self,
        user_id: &UserId,
        bytes: Vec<u8>,
        content_type: &str,
        id_token: &str,
    ) -> Result<String> {
        let object_name = format!("profile_images/{}.jpg", user_id.as_str());
        let upload_url = format!(
            "{}/b/{}/o?uploadType=media&name={}",
            self.base_url,
            self.bucket,
            urlencode(&object_name)
        );

        let metadata = self
            .http
            .execute_with_retry("Upload profile image", || {
                let upload_url = upload_url.clone();
                let bytes = bytes.clone();
                let content_type = content_type.to_string();
                let id_token = id_token.to_string();
                let client = self.http.client.clone();

                async move {
                    let response = client
                        .post(&upload_url)
                        .header("Content-Type", content_type)
                        .bearer_auth(&id_token)
                        .body(bytes)
                        .send()
                        .await
                        .context("Image upload failed")?
                        .error_for_status()
                        .context("Image upload rejected")?;

                    let metadata: Value =
                        response.json().await.context("Invalid upload response")?;
                    Ok(metadata)
                }
            })
            .await?;

        let token = metadata["downloadTokens"]
            .as_str()
            .ok_or_else(|| anyhow!("Upload response carries no download token"))?
            // Multiple tokens are comma-separated; the first one works
            .split(',')
            .next()
            .unwrap_or_default()
            .to_string();

        let download_url = format!(
            "{}/b/{}/o/{}?alt=media&token={}",
            self.base_url,
            self.bucket,
            urlencode(&object_name),
            token
        );

        info!(
            "[blobstore] profile image uploaded user_id={} object={}",
            user_id.as_str(),
            object_name
        );

        Ok(download_url)
    }
}

/// Object names embed a slash that must survive as %2F in the object URL.
fn urlencode(name: &str) -> String {
    url::form_urlencoded::byte_serialize(name.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencode_escapes_slash() {
        assert_eq!(
            urlencode("profile_images/user-1.jpg"),
            "profile_images%2Fuser-1.jpg"
        );
    }
}
