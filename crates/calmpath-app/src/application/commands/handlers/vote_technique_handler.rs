use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::technique_commands::*;
use crate::application::dtos::TechniqueDto;
use calmpath_domain::shared::DomainError;
use calmpath_domain::technique::TechniqueRepository;

pub struct VoteTechniqueCommandHandler {
    technique_repo: Arc<dyn TechniqueRepository>,
}

impl VoteTechniqueCommandHandler {
    pub fn new(technique_repo: Arc<dyn TechniqueRepository>) -> Self {
        Self { technique_repo }
    }
}

#[async_trait]
impl CommandHandler<VoteTechniqueCommand> for VoteTechniqueCommandHandler {
    type Result = TechniqueDto;

    async fn handle(&self, cmd: VoteTechniqueCommand) -> Result<Self::Result, DomainError> {
        let mut technique = self
            .technique_repo
            .find_all()
            .await?
            .into_iter()
            .find(|t| t.id().as_str() == cmd.technique_id)
            .ok_or_else(|| DomainError::NotFound(format!("Technique {}", cmd.technique_id)))?;

        technique.apply_vote(cmd.vote);
        self.technique_repo.save(&technique).await?;

        info!(
            "[techniques] vote {:?} id={} score={}",
            cmd.vote,
            technique.id().as_str(),
            technique.score()
        );

        Ok(TechniqueDto::from(&technique))
    }
}
