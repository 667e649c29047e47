use log::info;
use std::sync::Arc;

use crate::application::dtos::UserProfileDto;
use calmpath_domain::profile::{UserProfile, UserProfileRepository};
use calmpath_domain::shared::{DomainError, UserId};
use calmpath_infrastructure::http::{AuthClient, DocStoreClient};

use super::session::SessionStore;

/// Email/password auth plus the profile bootstrap that goes with it.
///
/// On success the session token is handed to the document store so
/// repository calls run as the signed-in user.
pub struct AuthService {
    auth_client: Arc<AuthClient>,
    docstore: Arc<DocStoreClient>,
    profile_repo: Arc<dyn UserProfileRepository>,
    session: Arc<SessionStore>,
}

impl AuthService {
    pub fn new(
        auth_client: Arc<AuthClient>,
        docstore: Arc<DocStoreClient>,
        profile_repo: Arc<dyn UserProfileRepository>,
        session: Arc<SessionStore>,
    ) -> Self {
        Self {
            auth_client,
            docstore,
            profile_repo,
            session,
        }
    }

    /// Register a new account and create its empty profile document.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<UserProfileDto, DomainError> {
        let auth_session = self.auth_client.sign_up(email, password).await?;
        info!("[auth] signed up user={}", auth_session.user_id.as_str());

        self.docstore
            .set_auth_token(Some(auth_session.id_token.clone()))
            .await;

        let profile = UserProfile::new(auth_session.user_id.clone(), auth_session.email.clone())?;
        self.profile_repo.save(&profile).await?;

        self.session.set(Some(auth_session)).await;

        Ok(UserProfileDto::from(&profile))
    }

    /// Sign in and load the profile, creating it when the profile
    /// document is missing (e.g. a half-finished sign-up).
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfileDto, DomainError> {
        let auth_session = self.auth_client.sign_in(email, password).await?;
        info!("[auth] signed in user={}", auth_session.user_id.as_str());

        self.docstore
            .set_auth_token(Some(auth_session.id_token.clone()))
            .await;

        let profile = match self.profile_repo.find_by_id(&auth_session.user_id).await? {
            Some(profile) => profile,
            None => {
                let profile =
                    UserProfile::new(auth_session.user_id.clone(), auth_session.email.clone())?;
                self.profile_repo.save(&profile).await?;
                profile
            }
        };

        self.session.set(Some(auth_session)).await;

        Ok(UserProfileDto::from(&profile))
    }

    pub async fn sign_out(&self) {
        self.session.set(None).await;
        self.docstore.set_auth_token(None).await;
        info!("[auth] signed out");
    }

    pub async fn current_user_id(&self) -> Option<UserId> {
        self.session.user_id().await
    }
}
