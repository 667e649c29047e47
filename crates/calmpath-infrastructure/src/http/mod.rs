pub mod auth;
pub mod blobstore;
pub mod docstore;

mod client;

pub use auth::{AuthClient, AuthSession};
pub use blobstore::BlobStoreClient;
pub use client::{HttpClient, RetryConfig};
pub use docstore::DocStoreClient;
