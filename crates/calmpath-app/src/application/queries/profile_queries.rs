use std::sync::Arc;

use crate::application::dtos::UserProfileDto;
use calmpath_domain::profile::UserProfileRepository;
use calmpath_domain::shared::{DomainError, UserId};

pub struct ProfileQueries {
    profile_repo: Arc<dyn UserProfileRepository>,
}

impl ProfileQueries {
    pub fn new(profile_repo: Arc<dyn UserProfileRepository>) -> Self {
        Self { profile_repo }
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfileDto>, DomainError> {
        let profile = self
            .profile_repo
            .find_by_id(&UserId::from_string(user_id))
            .await?;

        Ok(profile.as_ref().map(UserProfileDto::from))
    }
}
