use crate::models::domain::{Candidate, Preference};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank roommate candidates against a preference
///
/// The age window is checked by the handler (`minAge <= maxAge`) before any
/// scoring happens; the scorer itself trusts its inputs.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankMatchesRequest {
    pub preference: Preference,
    #[validate(range(min = 1))]
    #[serde(default = "default_limit")]
    pub limit: u16,
    #[serde(rename = "excludeListingIds", default)]
    pub exclude_listing_ids: Vec<String>,
}

fn default_limit() -> u16 {
    20
}

/// Request to score a single candidate against a preference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreCandidateRequest {
    pub preference: Preference,
    pub candidate: Candidate,
}
