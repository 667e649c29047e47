use serde::{Deserialize, Serialize};

use crate::shared::TechniqueId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteKind {
    Up,
    Down,
}

/// Community-rated anxiety-management technique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technique {
    id: TechniqueId,
    name: String,
    category: String,
    description: String,
    image_url: String,
    upvotes: i64,
    downvotes: i64,
}

impl Technique {
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: TechniqueId,
        name: String,
        category: String,
        description: String,
        image_url: String,
        upvotes: i64,
        downvotes: i64,
    ) -> Self {
        Self {
            id,
            name,
            category,
            description,
            image_url,
            upvotes,
            downvotes,
        }
    }

    /// Net community rating used for the top-rated ordering.
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }

    pub fn apply_vote(&mut self, kind: VoteKind) {
        match kind {
            VoteKind::Up => self.upvotes += 1,
            VoteKind::Down => self.downvotes += 1,
        }
    }

    pub fn id(&self) -> &TechniqueId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn upvotes(&self) -> i64 {
        self.upvotes
    }

    pub fn downvotes(&self) -> i64 {
        self.downvotes
    }
}
