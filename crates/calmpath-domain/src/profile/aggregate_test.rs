#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::shared::{HabitId, UserId};
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn profile_with_streak(streak: u32) -> UserProfile {
        UserProfile::restore(
            UserId::from_string("user-1"),
            "user@example.com".to_string(),
            "Hadi".to_string(),
            Some("bio".to_string()),
            Some("https://img.example.com/u.jpg".to_string()),
            5,
            NaiveDate::from_ymd_opt(2024, 10, 20),
            streak,
            BTreeSet::new(),
        )
    }

    #[test]
    fn test_new_profile_starts_at_zero() {
        let profile = UserProfile::new(UserId::new(), "new@example.com".to_string()).unwrap();

        assert_eq!(profile.check_in_count(), 0);
        assert_eq!(profile.current_streak(), 0);
        assert!(profile.last_check_in_date().is_none());
        assert!(profile.name().is_empty());
    }

    #[test]
    fn test_new_profile_rejects_empty_email() {
        assert!(UserProfile::new(UserId::new(), "  ".to_string()).is_err());
    }

    #[test]
    fn test_check_in_recorded_advances_aggregates() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 24).unwrap();
        let profile = profile_with_streak(3);

        let updated = profile.with_check_in_recorded(7, today);

        assert_eq!(updated.current_streak(), 4);
        assert_eq!(updated.check_in_count(), 7);
        assert_eq!(updated.last_check_in_date(), Some(today));
        // Everything else is untouched
        assert_eq!(updated.email(), profile.email());
        assert_eq!(updated.name(), profile.name());
        assert_eq!(updated.bio(), profile.bio());
        assert_eq!(updated.profile_image_url(), profile.profile_image_url());
        // Copy semantics: the original profile is not mutated
        assert_eq!(profile.current_streak(), 3);
        assert_eq!(profile.check_in_count(), 5);
    }

    #[test]
    fn test_streak_always_increments_even_after_gap() {
        // No gap-breaking logic: a last check-in four days ago still
        // yields +1, not a reset to 1.
        let profile = profile_with_streak(9);
        let today = NaiveDate::from_ymd_opt(2024, 10, 24).unwrap();

        let updated = profile.with_check_in_recorded(10, today);

        assert_eq!(updated.current_streak(), 10);
    }

    #[test]
    fn test_rename_updates_name_and_bio() {
        let mut profile = profile_with_streak(0);
        profile.rename("New Name".to_string(), None);

        assert_eq!(profile.name(), "New Name");
        assert!(profile.bio().is_none());
    }

    #[test]
    fn test_with_profile_image_url() {
        let profile = profile_with_streak(0);
        let updated = profile.with_profile_image_url("https://img.example.com/new.jpg".to_string());

        assert_eq!(
            updated.profile_image_url(),
            Some("https://img.example.com/new.jpg")
        );
        assert_eq!(
            profile.profile_image_url(),
            Some("https://img.example.com/u.jpg")
        );
    }

    #[test]
    fn test_toggle_habit_flips_membership() {
        let mut profile = profile_with_streak(0);
        let habit = HabitId::from_string("meditation");

        profile.toggle_habit(habit.clone());
        assert!(profile.selected_habit_ids().contains(&habit));

        profile.toggle_habit(habit.clone());
        assert!(!profile.selected_habit_ids().contains(&habit));
    }
}
