#[cfg(test)]
mod tests {
    use super::super::value_objects::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    #[test]
    fn test_anxiety_level_accepts_valid_range() {
        assert!(AnxietyLevel::new(0.0).is_ok());
        assert!(AnxietyLevel::new(0.42).is_ok());
        assert!(AnxietyLevel::new(1.0).is_ok());
    }

    #[test]
    fn test_anxiety_level_rejects_out_of_range() {
        assert!(AnxietyLevel::new(-0.1).is_err());
        assert!(AnxietyLevel::new(1.01).is_err());
        assert!(AnxietyLevel::new(f64::NAN).is_err());
    }

    #[test]
    fn test_anxiety_level_as_percentage() {
        let level = AnxietyLevel::new(0.42).unwrap();
        assert!((level.as_percentage() - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_data_point_presence() {
        let present = AnxietyDataPoint::present(day(1), 42.0);
        let absent = AnxietyDataPoint::absent(day(2));

        assert!(present.is_present());
        assert_eq!(present.level, Some(42.0));
        assert!(!absent.is_present());
        assert_eq!(absent.level, None);
    }

    #[test]
    fn test_absent_is_distinct_from_zero() {
        let zero = AnxietyDataPoint::present(day(1), 0.0);
        let absent = AnxietyDataPoint::absent(day(1));

        assert_ne!(zero, absent);
    }

    #[test]
    fn test_trend_direction_tags() {
        assert_eq!(TrendDirection::Down.icon_tag(), "arrow.down.circle.fill");
        assert_eq!(TrendDirection::Down.color_tag(), "green");
        assert_eq!(TrendDirection::Up.icon_tag(), "arrow.up.circle.fill");
        assert_eq!(TrendDirection::Up.color_tag(), "red");
        assert_eq!(TrendDirection::Unchanged.icon_tag(), "equal.circle.fill");
        assert_eq!(TrendDirection::Unchanged.color_tag(), "blue");
        assert_eq!(
            TrendDirection::Insufficient.icon_tag(),
            "exclamationmark.circle"
        );
        assert_eq!(TrendDirection::Insufficient.color_tag(), "gray");
    }
}
