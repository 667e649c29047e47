use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::profile_commands::*;
use calmpath_domain::profile::UserProfileRepository;
use calmpath_domain::shared::{DomainError, HabitId, UserId};

/// Flip a habit in or out of the user's tracked subset.
pub struct ToggleHabitCommandHandler {
    profile_repo: Arc<dyn UserProfileRepository>,
}

impl ToggleHabitCommandHandler {
    pub fn new(profile_repo: Arc<dyn UserProfileRepository>) -> Self {
        Self { profile_repo }
    }
}

#[async_trait]
impl CommandHandler<ToggleHabitCommand> for ToggleHabitCommandHandler {
    type Result = ToggleHabitResult;

    async fn handle(&self, cmd: ToggleHabitCommand) -> Result<Self::Result, DomainError> {
        let user_id = UserId::from_string(&cmd.user_id);
        let mut profile = self
            .profile_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(cmd.user_id.clone()))?;

        profile.toggle_habit(HabitId::from_string(&cmd.habit_id));

        self.profile_repo
            .save_selected_habits(&user_id, profile.selected_habit_ids())
            .await?;

        info!(
            "[habits] user={} selected={}",
            user_id.as_str(),
            profile.selected_habit_ids().len()
        );

        Ok(ToggleHabitResult {
            selected_habit_ids: profile
                .selected_habit_ids()
                .iter()
                .map(|h| h.as_str().to_string())
                .collect(),
        })
    }
}
