use serde::{Deserialize, Serialize};

use calmpath_domain::check_in::{AnxietyDataPoint, CheckIn, TrendDirection, TrendSummary};
use calmpath_domain::habit::Habit;
use calmpath_domain::profile::UserProfile;
use calmpath_domain::technique::Technique;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInDto {
    pub id: String,
    pub user_id: String,
    pub date: String, // YYYY-MM-DD
    pub anxiety_level: f64,
    pub selected_habits: Vec<String>,
    pub notes: String,
}

impl From<&CheckIn> for CheckInDto {
    fn from(check_in: &CheckIn) -> Self {
        Self {
            id: check_in.id().as_str().to_string(),
            user_id: check_in.user_id().as_str().to_string(),
            date: check_in.date().format("%Y-%m-%d").to_string(),
            anxiety_level: check_in.anxiety_level().value(),
            selected_habits: check_in
                .selected_habits()
                .iter()
                .map(|h| h.as_str().to_string())
                .collect(),
            notes: check_in.notes().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnxietyPointDto {
    pub date: String, // YYYY-MM-DD
    pub level: Option<f64>, // percentage 0.0-100.0, None when no check-in
}

impl From<&AnxietyDataPoint> for AnxietyPointDto {
    fn from(point: &AnxietyDataPoint) -> Self {
        Self {
            date: point.date.format("%Y-%m-%d").to_string(),
            level: point.level,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendDto {
    pub direction: String, // "down" | "up" | "unchanged" | "insufficient"
    pub magnitude: f64,
    pub text: String,
    pub icon: String,
    pub color: String,
}

impl From<&TrendSummary> for TrendDto {
    fn from(summary: &TrendSummary) -> Self {
        let direction = match summary.direction {
            TrendDirection::Down => "down",
            TrendDirection::Up => "up",
            TrendDirection::Unchanged => "unchanged",
            TrendDirection::Insufficient => "insufficient",
        };

        Self {
            direction: direction.to_string(),
            magnitude: summary.magnitude,
            text: summary.text.clone(),
            icon: summary.direction.icon_tag().to_string(),
            color: summary.direction.color_tag().to_string(),
        }
    }
}

/// Everything the home screen chart needs in one payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnxietySeriesDto {
    pub points: Vec<AnxietyPointDto>,
    pub trend: TrendDto,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileDto {
    pub id: String,
    pub email: String,
    pub name: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub check_in_count: u32,
    pub last_check_in_date: Option<String>, // YYYY-MM-DD
    pub current_streak: u32,
    pub selected_habit_ids: Vec<String>,
}

impl From<&UserProfile> for UserProfileDto {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id().as_str().to_string(),
            email: profile.email().to_string(),
            name: profile.name().to_string(),
            bio: profile.bio().map(|s| s.to_string()),
            profile_image_url: profile.profile_image_url().map(|s| s.to_string()),
            check_in_count: profile.check_in_count(),
            last_check_in_date: profile
                .last_check_in_date()
                .map(|d| d.format("%Y-%m-%d").to_string()),
            current_streak: profile.current_streak(),
            selected_habit_ids: profile
                .selected_habit_ids()
                .iter()
                .map(|h| h.as_str().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitDto {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub is_positive: Option<bool>,
    pub is_selected: bool,
}

impl HabitDto {
    pub fn from_habit(habit: &Habit, is_selected: bool) -> Self {
        Self {
            id: habit.id.as_str().to_string(),
            name: habit.name.clone(),
            icon: habit.icon.clone(),
            is_positive: habit.is_positive,
            is_selected,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
}

impl From<&Technique> for TechniqueDto {
    fn from(technique: &Technique) -> Self {
        Self {
            id: technique.id().as_str().to_string(),
            name: technique.name().to_string(),
            category: technique.category().to_string(),
            description: technique.description().to_string(),
            image_url: technique.image_url().to_string(),
            upvotes: technique.upvotes(),
            downvotes: technique.downvotes(),
            score: technique.score(),
        }
    }
}
