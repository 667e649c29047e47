use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeSet;

use super::aggregate::UserProfile;
use crate::shared::{DomainError, HabitId, UserId};

#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Save (upsert, merge) the profile document.
    async fn save(&self, profile: &UserProfile) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError>;

    /// Advance the stored check-in aggregates: count replaced, last date
    /// set to `today`, streak incremented by one.
    async fn update_check_in_stats(
        &self,
        user_id: &UserId,
        check_in_count: u32,
        today: NaiveDate,
    ) -> Result<(), DomainError>;

    /// Persist the user's tracked-habit subset.
    async fn save_selected_habits(
        &self,
        user_id: &UserId,
        habit_ids: &BTreeSet<HabitId>,
    ) -> Result<(), DomainError>;
}
