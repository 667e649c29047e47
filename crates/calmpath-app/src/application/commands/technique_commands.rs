use serde::{Deserialize, Serialize};

use calmpath_domain::technique::VoteKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteTechniqueCommand {
    pub technique_id: String,
    pub vote: VoteKind,
}
