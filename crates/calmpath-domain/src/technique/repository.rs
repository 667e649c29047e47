use async_trait::async_trait;

use super::aggregate::Technique;
use crate::shared::DomainError;

#[async_trait]
pub trait TechniqueRepository: Send + Sync {
    /// Fetch the full technique catalog.
    async fn find_all(&self) -> Result<Vec<Technique>, DomainError>;

    /// Save (upsert) a technique, e.g. after a vote.
    async fn save(&self, technique: &Technique) -> Result<(), DomainError>;
}
