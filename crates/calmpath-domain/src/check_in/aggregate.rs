use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::value_objects::AnxietyLevel;
use crate::shared::{CheckInId, DomainError, HabitId, UserId};

/// One daily check-in. At most one exists per (user, calendar day); a
/// same-day save replaces the previous fields under the same id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    id: CheckInId,
    user_id: UserId,
    date: NaiveDate,
    anxiety_level: AnxietyLevel,
    selected_habits: BTreeSet<HabitId>,
    notes: String,
}

impl CheckIn {
    pub fn new(
        user_id: UserId,
        date: NaiveDate,
        anxiety_level: AnxietyLevel,
        selected_habits: BTreeSet<HabitId>,
        notes: String,
    ) -> Self {
        Self {
            id: CheckInId::new(),
            user_id,
            date,
            anxiety_level,
            selected_habits,
            notes,
        }
    }

    /// Rebuild a check-in from stored fields, validating the level.
    pub fn restore(
        id: CheckInId,
        user_id: UserId,
        date: NaiveDate,
        anxiety_level: f64,
        selected_habits: BTreeSet<HabitId>,
        notes: String,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            user_id,
            date,
            anxiety_level: AnxietyLevel::new(anxiety_level)?,
            selected_habits,
            notes,
        })
    }

    /// Same id, user and date; everything the user can edit replaced.
    pub fn with_updated_entry(
        &self,
        anxiety_level: AnxietyLevel,
        selected_habits: BTreeSet<HabitId>,
        notes: String,
    ) -> Self {
        Self {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            date: self.date,
            anxiety_level,
            selected_habits,
            notes,
        }
    }

    pub fn id(&self) -> &CheckInId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn anxiety_level(&self) -> AnxietyLevel {
        self.anxiety_level
    }

    pub fn selected_habits(&self) -> &BTreeSet<HabitId> {
        &self.selected_habits
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}
