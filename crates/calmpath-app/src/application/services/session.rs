use tokio::sync::RwLock;

use calmpath_domain::shared::UserId;
use calmpath_infrastructure::http::AuthSession;

/// Holds the signed-in session for the lifetime of the process.
/// Cleared on sign-out; never persisted.
pub struct SessionStore {
    session: RwLock<Option<AuthSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
        }
    }

    pub async fn set(&self, session: Option<AuthSession>) {
        *self.session.write().await = session;
    }

    pub async fn user_id(&self) -> Option<UserId> {
        self.session.read().await.as_ref().map(|s| s.user_id.clone())
    }

    pub async fn id_token(&self) -> Option<String> {
        self.session.read().await.as_ref().map(|s| s.id_token.clone())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_round_trip() {
        let store = SessionStore::new();
        assert!(store.user_id().await.is_none());

        store
            .set(Some(AuthSession {
                user_id: UserId::from_string("u1"),
                email: "u1@example.com".to_string(),
                id_token: "tok".to_string(),
                expires_in_secs: 3600,
            }))
            .await;

        assert_eq!(store.user_id().await, Some(UserId::from_string("u1")));
        assert_eq!(store.id_token().await.as_deref(), Some("tok"));

        store.set(None).await;
        assert!(store.id_token().await.is_none());
    }
}
