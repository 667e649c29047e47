use async_trait::async_trait;
use chrono::Utc;
use log::info;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::application::commands::check_in_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use calmpath_domain::check_in::{AnxietyLevel, CheckInAggregator, CheckInRepository};
use calmpath_domain::profile::UserProfileRepository;
use calmpath_domain::shared::{DomainError, HabitId, UserId};

/// Record (or overwrite) today's check-in and refresh the profile
/// aggregates derived from it.
pub struct RecordCheckInCommandHandler {
    check_in_repo: Arc<dyn CheckInRepository>,
    profile_repo: Arc<dyn UserProfileRepository>,
}

impl RecordCheckInCommandHandler {
    pub fn new(
        check_in_repo: Arc<dyn CheckInRepository>,
        profile_repo: Arc<dyn UserProfileRepository>,
    ) -> Self {
        Self {
            check_in_repo,
            profile_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<RecordCheckInCommand> for RecordCheckInCommandHandler {
    type Result = RecordCheckInResult;

    async fn handle(&self, cmd: RecordCheckInCommand) -> Result<Self::Result, DomainError> {
        info!("Handling RecordCheckInCommand for user: {}", cmd.user_id);

        let user_id = UserId::from_string(&cmd.user_id);
        let anxiety_level = AnxietyLevel::new(cmd.anxiety_level)?;
        let selected_habits: BTreeSet<HabitId> = cmd
            .selected_habits
            .iter()
            .map(|id| HabitId::from_string(id))
            .collect();

        let today = Utc::now().date_naive();

        // 1. Build today's check-in, reusing the existing id if the user
        //    already checked in today
        let existing = self.check_in_repo.find_for_day(&user_id, today).await?;
        let check_in = CheckInAggregator::record_check_in(
            existing.as_ref(),
            &user_id,
            anxiety_level,
            selected_habits,
            cmd.notes,
            today,
        );

        // 2. Save before recounting so the count includes this check-in
        self.check_in_repo.upsert(&check_in).await?;
        let check_in_count = self.check_in_repo.count_for_user(&user_id).await?;

        // 3. Advance the profile aggregates
        self.profile_repo
            .update_check_in_stats(&user_id, check_in_count, today)
            .await?;

        info!(
            "[checkin] recorded id={} user={} count={}",
            check_in.id().as_str(),
            user_id.as_str(),
            check_in_count
        );

        Ok(RecordCheckInResult {
            check_in_id: check_in.id().as_str().to_string(),
            check_in_count,
        })
    }
}
