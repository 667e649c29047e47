use std::sync::Arc;

use crate::application::dtos::TechniqueDto;
use calmpath_domain::shared::DomainError;
use calmpath_domain::technique::TechniqueRepository;

pub struct TechniqueQueries {
    technique_repo: Arc<dyn TechniqueRepository>,
}

impl TechniqueQueries {
    pub fn new(technique_repo: Arc<dyn TechniqueRepository>) -> Self {
        Self { technique_repo }
    }

    /// Techniques ordered by net score, optionally narrowed to a
    /// category and a case-insensitive name search.
    pub async fn get_top_rated(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<TechniqueDto>, DomainError> {
        let mut techniques = self.technique_repo.find_all().await?;

        if let Some(category) = category {
            techniques.retain(|t| t.category() == category);
        }
        if let Some(search) = search {
            let needle = search.to_lowercase();
            techniques.retain(|t| t.name().to_lowercase().contains(&needle));
        }

        techniques.sort_by(|a, b| b.score().cmp(&a.score()));

        Ok(techniques.iter().map(TechniqueDto::from).collect())
    }
}
