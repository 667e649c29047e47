use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct AvatarUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<AvatarUpload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleHabitCommand {
    pub user_id: String,
    pub habit_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleHabitResult {
    pub selected_habit_ids: Vec<String>,
}
