mod app_state;
mod auth_service;
mod avatar_store;
mod session;

pub use app_state::AppState;
pub use auth_service::AuthService;
pub use avatar_store::{AvatarStore, BlobAvatarStore};
pub use session::SessionStore;
