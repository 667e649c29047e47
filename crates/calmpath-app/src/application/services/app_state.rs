use anyhow::Result;
use std::sync::Arc;

use crate::application::commands::handlers::{
    RecordCheckInCommandHandler, ToggleHabitCommandHandler, UpdateProfileCommandHandler,
    VoteTechniqueCommandHandler,
};
use crate::application::queries::{
    AnxietyQueries, HabitQueries, ProfileQueries, TechniqueQueries,
};
use calmpath_domain::check_in::CheckInRepository;
use calmpath_domain::habit::HabitRepository;
use calmpath_domain::profile::UserProfileRepository;
use calmpath_domain::technique::TechniqueRepository;
use calmpath_infrastructure::config::BackendConfig;
use calmpath_infrastructure::http::{AuthClient, BlobStoreClient, DocStoreClient, HttpClient};
use calmpath_infrastructure::persistence::repositories::{
    DocStoreCheckInRepository, DocStoreHabitRepository, DocStoreTechniqueRepository,
    DocStoreUserProfileRepository,
};

use super::auth_service::AuthService;
use super::avatar_store::{AvatarStore, BlobAvatarStore};
use super::session::SessionStore;

/// Composition root. Wires the HTTP clients, repositories, handlers and
/// query services once; everything downstream receives its dependencies
/// explicitly.
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub session: Arc<SessionStore>,
    pub record_check_in: Arc<RecordCheckInCommandHandler>,
    pub update_profile: Arc<UpdateProfileCommandHandler>,
    pub toggle_habit: Arc<ToggleHabitCommandHandler>,
    pub vote_technique: Arc<VoteTechniqueCommandHandler>,
    pub anxiety_queries: Arc<AnxietyQueries>,
    pub profile_queries: Arc<ProfileQueries>,
    pub habit_queries: Arc<HabitQueries>,
    pub technique_queries: Arc<TechniqueQueries>,
}

impl AppState {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let http = Arc::new(HttpClient::new()?);

        let docstore = Arc::new(DocStoreClient::new(http.clone(), config));
        let auth_client = Arc::new(AuthClient::new(http.clone(), config));
        let blobstore = Arc::new(BlobStoreClient::new(http, config));

        let check_in_repo: Arc<dyn CheckInRepository> =
            Arc::new(DocStoreCheckInRepository::new(docstore.clone()));
        let profile_repo: Arc<dyn UserProfileRepository> =
            Arc::new(DocStoreUserProfileRepository::new(docstore.clone()));
        let habit_repo: Arc<dyn HabitRepository> =
            Arc::new(DocStoreHabitRepository::new(docstore.clone()));
        let technique_repo: Arc<dyn TechniqueRepository> =
            Arc::new(DocStoreTechniqueRepository::new(docstore.clone()));

        let session = Arc::new(SessionStore::new());
        let avatar_store: Arc<dyn AvatarStore> =
            Arc::new(BlobAvatarStore::new(blobstore, session.clone()));

        Ok(Self {
            auth: Arc::new(AuthService::new(
                auth_client,
                docstore,
                profile_repo.clone(),
                session.clone(),
            )),
            session,
            record_check_in: Arc::new(RecordCheckInCommandHandler::new(
                check_in_repo.clone(),
                profile_repo.clone(),
            )),
            update_profile: Arc::new(UpdateProfileCommandHandler::new(
                profile_repo.clone(),
                avatar_store,
            )),
            toggle_habit: Arc::new(ToggleHabitCommandHandler::new(profile_repo.clone())),
            vote_technique: Arc::new(VoteTechniqueCommandHandler::new(technique_repo.clone())),
            anxiety_queries: Arc::new(AnxietyQueries::new(check_in_repo)),
            profile_queries: Arc::new(ProfileQueries::new(profile_repo.clone())),
            habit_queries: Arc::new(HabitQueries::new(habit_repo, profile_repo)),
            technique_queries: Arc::new(TechniqueQueries::new(technique_repo)),
        })
    }
}
