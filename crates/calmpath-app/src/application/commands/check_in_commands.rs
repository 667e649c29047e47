use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordCheckInCommand {
    pub user_id: String,
    /// Raw anxiety level in the 0.0-1.0 range.
    pub anxiety_level: f64,
    pub selected_habits: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordCheckInResult {
    pub check_in_id: String,
    pub check_in_count: u32,
}
