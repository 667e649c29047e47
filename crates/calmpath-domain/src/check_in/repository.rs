use async_trait::async_trait;
use chrono::NaiveDate;

use super::aggregate::CheckIn;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Save (upsert) a check-in keyed by its id.
    async fn upsert(&self, check_in: &CheckIn) -> Result<(), DomainError>;

    /// Find the user's check-in for a specific calendar day, if any.
    async fn find_for_day(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, DomainError>;

    /// List the user's check-ins on or after `since`, ascending by date.
    async fn list_since(
        &self,
        user_id: &UserId,
        since: NaiveDate,
    ) -> Result<Vec<CheckIn>, DomainError>;

    /// Total number of check-ins the user has ever recorded.
    async fn count_for_user(&self, user_id: &UserId) -> Result<u32, DomainError>;
}
