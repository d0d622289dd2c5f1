use crate::models::domain::RankedMatch;
use serde::{Deserialize, Serialize};

/// Response for the rank matches endpoint
///
/// `request_id` identifies one search for log correlation; it is minted per
/// request and never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankMatchesResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub matches: Vec<RankedMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
