use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::profile_commands::*;
use crate::application::dtos::UserProfileDto;
use crate::application::services::AvatarStore;
use calmpath_domain::profile::UserProfileRepository;
use calmpath_domain::shared::{DomainError, UserId};

/// Update the user's display name, bio and (optionally) avatar.
pub struct UpdateProfileCommandHandler {
    profile_repo: Arc<dyn UserProfileRepository>,
    avatar_store: Arc<dyn AvatarStore>,
}

impl UpdateProfileCommandHandler {
    pub fn new(
        profile_repo: Arc<dyn UserProfileRepository>,
        avatar_store: Arc<dyn AvatarStore>,
    ) -> Self {
        Self {
            profile_repo,
            avatar_store,
        }
    }
}

#[async_trait]
impl CommandHandler<UpdateProfileCommand> for UpdateProfileCommandHandler {
    type Result = UserProfileDto;

    async fn handle(&self, cmd: UpdateProfileCommand) -> Result<Self::Result, DomainError> {
        info!("Handling UpdateProfileCommand for user: {}", cmd.user_id);

        let user_id = UserId::from_string(&cmd.user_id);
        let mut profile = self
            .profile_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(cmd.user_id.clone()))?;

        profile.rename(cmd.name, cmd.bio);

        // Upload the avatar first; a failed upload leaves the profile
        // document untouched
        if let Some(avatar) = cmd.avatar {
            let url = self
                .avatar_store
                .upload(&user_id, avatar.bytes, &avatar.content_type)
                .await?;
            info!("[profile] avatar uploaded user={}", user_id.as_str());
            profile = profile.with_profile_image_url(url);
        }

        self.profile_repo.save(&profile).await?;

        Ok(UserProfileDto::from(&profile))
    }
}
