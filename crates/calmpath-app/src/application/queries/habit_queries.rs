use std::collections::BTreeSet;
use std::sync::Arc;

use crate::application::dtos::HabitDto;
use calmpath_domain::habit::HabitRepository;
use calmpath_domain::profile::UserProfileRepository;
use calmpath_domain::shared::{DomainError, UserId};

/// The habit catalog, flagged with the user's current selection.
pub struct HabitQueries {
    habit_repo: Arc<dyn HabitRepository>,
    profile_repo: Arc<dyn UserProfileRepository>,
}

impl HabitQueries {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        profile_repo: Arc<dyn UserProfileRepository>,
    ) -> Self {
        Self {
            habit_repo,
            profile_repo,
        }
    }

    pub async fn get_catalog(&self, user_id: &str) -> Result<Vec<HabitDto>, DomainError> {
        let selected = self
            .profile_repo
            .find_by_id(&UserId::from_string(user_id))
            .await?
            .map(|p| p.selected_habit_ids().clone())
            .unwrap_or_else(BTreeSet::new);

        let habits = self.habit_repo.find_all().await?;

        Ok(habits
            .iter()
            .map(|habit| HabitDto::from_habit(habit, selected.contains(&habit.id)))
            .collect())
    }
}
