use async_trait::async_trait;

use calmpath_domain::shared::DomainError;

/// One handler per command type.
#[async_trait]
pub trait CommandHandler<C>: Send + Sync {
    type Result;

    async fn handle(&self, cmd: C) -> Result<Self::Result, DomainError>;
}
