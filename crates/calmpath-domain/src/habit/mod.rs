use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, HabitId};

/// Catalog entry a user may opt into tracking. Reference data, not owned
/// by any user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub icon: Option<String>,
    pub is_positive: Option<bool>,
}

impl Habit {
    pub fn new(id: HabitId, name: Option<String>, icon: Option<String>, is_positive: Option<bool>) -> Self {
        Self {
            id,
            name: name.unwrap_or_else(|| "Unnamed Habit".to_string()),
            icon,
            is_positive,
        }
    }
}

#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Fetch the full habit catalog.
    async fn find_all(&self) -> Result<Vec<Habit>, DomainError>;
}
