use chrono::{Duration, Utc};
use log::info;
use std::sync::Arc;

use crate::application::dtos::{AnxietyPointDto, AnxietySeriesDto, CheckInDto, TrendDto};
use calmpath_domain::check_in::{CheckInAggregator, CheckInRepository, SERIES_LEN};
use calmpath_domain::shared::{DomainError, UserId};

/// Read side of the home screen: the padded series, the day-over-day
/// trend and the overall progress sentence.
pub struct AnxietyQueries {
    check_in_repo: Arc<dyn CheckInRepository>,
}

impl AnxietyQueries {
    pub fn new(check_in_repo: Arc<dyn CheckInRepository>) -> Self {
        Self { check_in_repo }
    }

    pub async fn get_dashboard(&self, user_id: &str) -> Result<AnxietySeriesDto, DomainError> {
        let user_id = UserId::from_string(user_id);
        let today = Utc::now().date_naive();
        let since = today - Duration::days(SERIES_LEN as i64 - 1);

        let records = self.check_in_repo.list_since(&user_id, since).await?;
        info!(
            "[dashboard] user={} records={} since={}",
            user_id.as_str(),
            records.len(),
            since
        );

        let series = CheckInAggregator::build_series(&records);
        let trend = CheckInAggregator::trend_summary(&series);
        let description = CheckInAggregator::overall_description(&series);

        Ok(AnxietySeriesDto {
            points: series.iter().map(AnxietyPointDto::from).collect(),
            trend: TrendDto::from(&trend),
            description,
        })
    }

    /// Today's check-in, used to pre-fill the check-in form.
    pub async fn get_today(&self, user_id: &str) -> Result<Option<CheckInDto>, DomainError> {
        let user_id = UserId::from_string(user_id);
        let today = Utc::now().date_naive();

        let check_in = self.check_in_repo.find_for_day(&user_id, today).await?;
        Ok(check_in.as_ref().map(CheckInDto::from))
    }
}
