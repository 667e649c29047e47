#[cfg(test)]
mod tests {
    use super::super::domain_service::SERIES_LEN;
    use super::super::*;
    use crate::shared::{HabitId, UserId};
    use chrono::{Duration, NaiveDate};
    use std::collections::BTreeSet;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    fn check_in_on(date: NaiveDate, level: f64) -> CheckIn {
        CheckIn::new(
            UserId::from_string("user-1"),
            date,
            AnxietyLevel::new(level).unwrap(),
            BTreeSet::new(),
            String::new(),
        )
    }

    #[test]
    fn test_empty_input_builds_empty_series() {
        let series = CheckInAggregator::build_series(&[]);
        assert!(series.is_empty());
    }

    #[test]
    fn test_series_is_always_thirty_slots() {
        let records = vec![
            check_in_on(day(1), 0.3),
            check_in_on(day(2), 0.5),
            check_in_on(day(10), 0.4),
        ];

        let series = CheckInAggregator::build_series(&records);

        assert_eq!(series.len(), SERIES_LEN);
        assert_eq!(series[0].date, day(1));
        assert_eq!(series[SERIES_LEN - 1].date, day(1) + Duration::days(29));
    }

    #[test]
    fn test_single_record_pads_the_rest_absent() {
        let records = vec![check_in_on(day(5), 0.42)];

        let series = CheckInAggregator::build_series(&records);

        assert_eq!(series.len(), SERIES_LEN);
        assert_eq!(series[0].date, day(5));
        assert_eq!(series[0].level, Some(42.0));
        for slot in &series[1..] {
            assert_eq!(slot.level, None);
        }
    }

    #[test]
    fn test_gap_days_are_absent_not_zero() {
        let records = vec![check_in_on(day(1), 0.2), check_in_on(day(3), 0.6)];

        let series = CheckInAggregator::build_series(&records);

        assert_eq!(series[0].level, Some(20.0));
        assert_eq!(series[1].level, None);
        assert_eq!(series[2].level, Some(60.0));
    }

    #[test]
    fn test_trend_up_between_consecutive_days() {
        let records = vec![check_in_on(day(1), 0.30), check_in_on(day(2), 0.50)];
        let series = CheckInAggregator::build_series(&records);

        let trend = CheckInAggregator::trend_summary(&series);

        assert_eq!(trend.direction, TrendDirection::Up);
        assert!((trend.magnitude - 20.0).abs() < 1e-9);
        assert_eq!(trend.text, "Anxiety up 20.0% from yesterday");
    }

    #[test]
    fn test_trend_down() {
        let records = vec![check_in_on(day(1), 0.50), check_in_on(day(2), 0.35)];
        let series = CheckInAggregator::build_series(&records);

        let trend = CheckInAggregator::trend_summary(&series);

        assert_eq!(trend.direction, TrendDirection::Down);
        assert!((trend.magnitude - 15.0).abs() < 1e-9);
        assert_eq!(trend.direction.color_tag(), "green");
    }

    #[test]
    fn test_trend_unchanged_on_equal_levels() {
        let records = vec![check_in_on(day(1), 0.4), check_in_on(day(2), 0.4)];
        let series = CheckInAggregator::build_series(&records);

        let trend = CheckInAggregator::trend_summary(&series);

        assert_eq!(trend.direction, TrendDirection::Unchanged);
        assert_eq!(trend.magnitude, 0.0);
        assert_eq!(trend.text, "Anxiety unchanged from yesterday");
    }

    #[test]
    fn test_trend_insufficient_with_single_reading() {
        let records = vec![check_in_on(day(1), 0.4)];
        let series = CheckInAggregator::build_series(&records);

        let trend = CheckInAggregator::trend_summary(&series);

        assert_eq!(trend.direction, TrendDirection::Insufficient);
        assert_eq!(trend.magnitude, 0.0);
        assert_eq!(trend.text, "Keep logging to see trends");
    }

    #[test]
    fn test_trend_skips_absent_slots() {
        // Readings on days 1 and 7; the trend compares those two present
        // values, not day 7 against the (absent) day 6.
        let records = vec![check_in_on(day(1), 0.30), check_in_on(day(7), 0.45)];
        let series = CheckInAggregator::build_series(&records);

        let trend = CheckInAggregator::trend_summary(&series);

        assert_eq!(trend.direction, TrendDirection::Up);
        assert!((trend.magnitude - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_overall_description_needs_two_readings() {
        let records = vec![check_in_on(day(1), 0.4)];
        let series = CheckInAggregator::build_series(&records);

        assert_eq!(
            CheckInAggregator::overall_description(&series),
            "Log more check-ins to see detailed trends."
        );
        assert_eq!(
            CheckInAggregator::overall_description(&[]),
            "Log more check-ins to see detailed trends."
        );
    }

    #[test]
    fn test_overall_description_compares_first_and_last() {
        let records = vec![
            check_in_on(day(1), 0.60),
            check_in_on(day(2), 0.90),
            check_in_on(day(8), 0.35),
        ];
        let series = CheckInAggregator::build_series(&records);

        let text = CheckInAggregator::overall_description(&series);

        assert_eq!(
            text,
            "Overall, your anxiety has decreased by 25.0 percentage points since your first check-in. You're on the right path!"
        );
    }

    #[test]
    fn test_overall_description_increase_has_caution_suffix() {
        let records = vec![check_in_on(day(1), 0.20), check_in_on(day(5), 0.50)];
        let series = CheckInAggregator::build_series(&records);

        let text = CheckInAggregator::overall_description(&series);

        assert!(text.contains("increased by 30.0"));
        assert!(text.ends_with("Let's work on reducing it."));
    }

    #[test]
    fn test_record_check_in_creates_fresh_id() {
        let user_id = UserId::from_string("user-1");
        let level = AnxietyLevel::new(0.5).unwrap();

        let first = CheckInAggregator::record_check_in(
            None,
            &user_id,
            level,
            BTreeSet::new(),
            "first".to_string(),
            day(24),
        );
        let second = CheckInAggregator::record_check_in(
            None,
            &user_id,
            level,
            BTreeSet::new(),
            "second".to_string(),
            day(24),
        );

        assert_ne!(first.id(), second.id());
        assert_eq!(first.date(), day(24));
        assert_eq!(first.user_id(), &user_id);
    }

    #[test]
    fn test_record_check_in_preserves_existing_id() {
        let user_id = UserId::from_string("user-1");
        let existing = check_in_on(day(24), 0.3);

        let habits: BTreeSet<HabitId> = [HabitId::from_string("meditation")].into_iter().collect();
        let updated = CheckInAggregator::record_check_in(
            Some(&existing),
            &user_id,
            AnxietyLevel::new(0.8).unwrap(),
            habits,
            "updated".to_string(),
            day(24),
        );

        assert_eq!(updated.id(), existing.id());
        assert_eq!(updated.date(), existing.date());
        assert_eq!(updated.anxiety_level().value(), 0.8);
        assert_eq!(updated.notes(), "updated");
    }
}
