use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

use super::aggregate::CheckIn;
use super::value_objects::{AnxietyDataPoint, AnxietyLevel, TrendDirection, TrendSummary};
use crate::shared::{HabitId, UserId};

/// Number of slots in the dashboard series.
pub const SERIES_LEN: usize = 30;

/// Domain service for the dashboard aggregation rules.
/// Pure transformations only; state lives in the document store.
pub struct CheckInAggregator;

impl CheckInAggregator {
    /// Turn the user's recent check-ins into a 30-slot, date-aligned series.
    ///
    /// `records` must already be sorted ascending by date. An empty input
    /// yields an empty series; padding only happens once at least one
    /// record exists. Otherwise the series is anchored at the first
    /// record's date and always has exactly 30 entries, with days lacking
    /// a check-in carried as absent readings.
    pub fn build_series(records: &[CheckIn]) -> Vec<AnxietyDataPoint> {
        let anchor = match records.first() {
            Some(first) => first.date(),
            None => return Vec::new(),
        };

        (0..SERIES_LEN as i64)
            .map(|i| {
                let day = anchor + Duration::days(i);
                match records.iter().find(|r| r.date() == day) {
                    // First match wins; duplicates cannot occur under the
                    // one-per-day rule.
                    Some(record) => {
                        AnxietyDataPoint::present(day, record.anxiety_level().as_percentage())
                    }
                    None => AnxietyDataPoint::absent(day),
                }
            })
            .collect()
    }

    /// Compare the two most recent present readings.
    ///
    /// "Yesterday" in the text means the previous present reading, not
    /// necessarily the previous calendar day. Existing behavior, kept for
    /// compatibility with the shipped dashboard.
    pub fn trend_summary(series: &[AnxietyDataPoint]) -> TrendSummary {
        let present: Vec<f64> = series.iter().filter_map(|p| p.level).collect();

        if present.len() < 2 {
            return TrendSummary {
                direction: TrendDirection::Insufficient,
                magnitude: 0.0,
                text: "Keep logging to see trends".to_string(),
            };
        }

        let last = present[present.len() - 1];
        let second_to_last = present[present.len() - 2];
        let difference = last - second_to_last;
        let magnitude = difference.abs();

        let (direction, text) = if difference < 0.0 {
            (
                TrendDirection::Down,
                format!("Anxiety down {:.1}% from yesterday", magnitude),
            )
        } else if difference > 0.0 {
            (
                TrendDirection::Up,
                format!("Anxiety up {:.1}% from yesterday", magnitude),
            )
        } else {
            (
                TrendDirection::Unchanged,
                "Anxiety unchanged from yesterday".to_string(),
            )
        };

        TrendSummary {
            direction,
            magnitude,
            text,
        }
    }

    /// One-sentence summary of the change between the first and last
    /// present readings.
    pub fn overall_description(series: &[AnxietyDataPoint]) -> String {
        let present: Vec<f64> = series.iter().filter_map(|p| p.level).collect();

        if present.len() < 2 {
            return "Log more check-ins to see detailed trends.".to_string();
        }

        let first = present[0];
        let last = present[present.len() - 1];
        let difference = last - first;
        let trend = if difference < 0.0 {
            "decreased"
        } else {
            "increased"
        };
        let suffix = if difference < 0.0 {
            "You're on the right path!"
        } else {
            "Let's work on reducing it."
        };

        format!(
            "Overall, your anxiety has {} by {:.1} percentage points since your first check-in. {}",
            trend,
            difference.abs(),
            suffix
        )
    }

    /// Build the check-in to persist for today.
    ///
    /// When a check-in already exists for today its id, user and date are
    /// kept and the user-editable fields are overwritten. Otherwise a new
    /// check-in with a fresh id is created for `today`.
    pub fn record_check_in(
        existing: Option<&CheckIn>,
        user_id: &UserId,
        anxiety_level: AnxietyLevel,
        selected_habits: BTreeSet<HabitId>,
        notes: String,
        today: NaiveDate,
    ) -> CheckIn {
        match existing {
            Some(current) => current.with_updated_entry(anxiety_level, selected_habits, notes),
            None => CheckIn::new(
                user_id.clone(),
                today,
                anxiety_level,
                selected_habits,
                notes,
            ),
        }
    }
}
