use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::shared::{DomainError, HabitId, UserId};

/// Per-user profile document. `check_in_count` and `current_streak` are
/// derived aggregates maintained as a side effect of saving a check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserId,
    email: String,
    name: String,
    bio: Option<String>,
    profile_image_url: Option<String>,
    check_in_count: u32,
    last_check_in_date: Option<NaiveDate>,
    current_streak: u32,
    selected_habit_ids: BTreeSet<HabitId>,
}

impl UserProfile {
    /// Fresh profile created right after sign-up.
    pub fn new(id: UserId, email: String) -> Result<Self, DomainError> {
        if email.trim().is_empty() {
            return Err(DomainError::Validation(
                "Email cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id,
            email: email.trim().to_string(),
            name: String::new(),
            bio: None,
            profile_image_url: None,
            check_in_count: 0,
            last_check_in_date: None,
            current_streak: 0,
            selected_habit_ids: BTreeSet::new(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: UserId,
        email: String,
        name: String,
        bio: Option<String>,
        profile_image_url: Option<String>,
        check_in_count: u32,
        last_check_in_date: Option<NaiveDate>,
        current_streak: u32,
        selected_habit_ids: BTreeSet<HabitId>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            bio,
            profile_image_url,
            check_in_count,
            last_check_in_date,
            current_streak,
            selected_habit_ids,
        }
    }

    /// Copy with the check-in aggregates advanced for a successful save.
    ///
    /// The streak increments by exactly 1 on every saved check-in, with no
    /// gap detection; a user returning after skipped days still gains +1
    /// rather than resetting to 1. Known product ambiguity, intentionally
    /// kept until clarified.
    pub fn with_check_in_recorded(&self, new_check_in_count: u32, today: NaiveDate) -> Self {
        let mut updated = self.clone();
        updated.check_in_count = new_check_in_count;
        updated.last_check_in_date = Some(today);
        updated.current_streak = self.current_streak + 1;
        updated
    }

    pub fn rename(&mut self, name: String, bio: Option<String>) {
        self.name = name;
        self.bio = bio;
    }

    pub fn with_profile_image_url(&self, url: String) -> Self {
        let mut updated = self.clone();
        updated.profile_image_url = Some(url);
        updated
    }

    /// Flip a habit in or out of the user's tracked subset.
    pub fn toggle_habit(&mut self, habit_id: HabitId) {
        if !self.selected_habit_ids.remove(&habit_id) {
            self.selected_habit_ids.insert(habit_id);
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn profile_image_url(&self) -> Option<&str> {
        self.profile_image_url.as_deref()
    }

    pub fn check_in_count(&self) -> u32 {
        self.check_in_count
    }

    pub fn last_check_in_date(&self) -> Option<NaiveDate> {
        self.last_check_in_date
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn selected_habit_ids(&self) -> &BTreeSet<HabitId> {
        &self.selected_habit_ids
    }
}
