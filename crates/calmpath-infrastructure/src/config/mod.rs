use std::env;
use std::time::Duration;

use calmpath_domain::shared::DomainError;

/// Connection settings for the managed backend: document store, auth
/// provider and blob store. All three are external services reached over
/// HTTPS; nothing is persisted locally.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend project identifier, part of every document path.
    pub project_id: String,
    /// Public web API key appended to auth requests.
    pub api_key: String,
    /// Document store base URL.
    pub docstore_url: String,
    /// Auth provider base URL.
    pub auth_url: String,
    /// Blob store base URL.
    pub blobstore_url: String,
    /// Bucket holding uploaded profile images.
    pub storage_bucket: String,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self, DomainError> {
        let project_id = require_var("CALMPATH_PROJECT_ID")?;
        let api_key = require_var("CALMPATH_API_KEY")?;

        Ok(Self {
            docstore_url: env::var("CALMPATH_DOCSTORE_URL")
                .unwrap_or_else(|_| "https://firestore.googleapis.com/v1".to_string()),
            auth_url: env::var("CALMPATH_AUTH_URL")
                .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com/v1".to_string()),
            blobstore_url: env::var("CALMPATH_BLOBSTORE_URL")
                .unwrap_or_else(|_| "https://firebasestorage.googleapis.com/v0".to_string()),
            storage_bucket: env::var("CALMPATH_STORAGE_BUCKET")
                .unwrap_or_else(|_| format!("{}.appspot.com", project_id)),
            project_id,
            api_key,
        })
    }
}

fn require_var(name: &str) -> Result<String, DomainError> {
    env::var(name)
        .map_err(|_| DomainError::Infrastructure(format!("Missing environment variable {}", name)))
}

/// Centralized timeout configuration for backend calls.
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Per-request timeout (default: 30 seconds)
    pub request: Duration,

    /// Connect timeout (default: 10 seconds)
    pub connect: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(30),
            connect: Duration::from_secs(10),
        }
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request(mut self, duration: Duration) -> Self {
        self.request = duration;
        self
    }

    pub fn with_connect(mut self, duration: Duration) -> Self {
        self.connect = duration;
        self
    }
}
