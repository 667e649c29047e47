use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// A user-reported anxiety reading, stored as a fraction in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnxietyLevel(f64);

impl AnxietyLevel {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&value) || value.is_nan() {
            return Err(DomainError::Validation(format!(
                "Anxiety level must be between 0 and 1, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// The chart-facing representation (0-100).
    pub fn as_percentage(&self) -> f64 {
        self.0 * 100.0
    }
}

/// One slot in the date-aligned anxiety series. `level` is a percentage
/// (0-100); `None` means no check-in was recorded that day, which is a
/// normal value and distinct from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnxietyDataPoint {
    pub date: NaiveDate,
    pub level: Option<f64>,
}

impl AnxietyDataPoint {
    pub fn present(date: NaiveDate, level: f64) -> Self {
        Self {
            date,
            level: Some(level),
        }
    }

    pub fn absent(date: NaiveDate) -> Self {
        Self { date, level: None }
    }

    pub fn is_present(&self) -> bool {
        self.level.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Down,
    Up,
    Unchanged,
    Insufficient,
}

impl TrendDirection {
    /// Icon name used by the dashboard chart footer.
    pub fn icon_tag(&self) -> &'static str {
        match self {
            TrendDirection::Down => "arrow.down.circle.fill",
            TrendDirection::Up => "arrow.up.circle.fill",
            TrendDirection::Unchanged => "equal.circle.fill",
            TrendDirection::Insufficient => "exclamationmark.circle",
        }
    }

    /// Color name used by the dashboard chart footer.
    pub fn color_tag(&self) -> &'static str {
        match self {
            TrendDirection::Down => "green",
            TrendDirection::Up => "red",
            TrendDirection::Unchanged => "blue",
            TrendDirection::Insufficient => "gray",
        }
    }
}

/// Comparison of the two most recent present readings in a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub direction: TrendDirection,
    /// Absolute change in percentage points, one decimal of precision.
    pub magnitude: f64,
    pub text: String,
}
