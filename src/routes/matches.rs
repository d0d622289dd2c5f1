use crate::core::Ranker;
use crate::models::{
    Candidate, ErrorResponse, HealthResponse, RankMatchesRequest, RankMatchesResponse,
    ScoreCandidateRequest,
};
use crate::services::{CacheKey, CacheManager, DirectoryClient};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<DirectoryClient>,
    pub cache: Arc<CacheManager>,
    pub ranker: Ranker,
    pub max_limit: u16,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_matches))
        .route("/matches/score", web::post().to(score_candidate));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank matches endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "preference": { "gender": "Female", "minAge": 18, "maxAge": 30 },
///   "limit": 20,
///   "excludeListingIds": ["string"]
/// }
/// ```
///
/// Fetches candidate listings from the roommate directory (cache-first),
/// scores every one of them against the preference, and returns them ranked
/// by score descending.
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankMatchesRequest>,
) -> impl Responder {
    // The scorer trusts its inputs; anything it would mis-handle is rejected here
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_matches request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }
    if !req.preference.valid_age_window() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: "minAge must not exceed maxAge".to_string(),
            status_code: 400,
        });
    }

    // Cap limit to prevent excessive directory queries
    let limit = req.limit.min(state.max_limit) as usize;

    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(
        "Ranking matches [{}]: limit {}, {} exclusions",
        request_id,
        limit,
        req.exclude_listing_ids.len()
    );

    // Candidate listings are cached; scores never are, so a cached listing
    // set is still re-scored against this request's preference
    let cache_key = CacheKey::candidates(limit, &req.exclude_listing_ids);

    let candidates: Vec<Candidate> = match state.cache.get(&cache_key).await {
        Ok(cached) => cached,
        Err(_) => {
            let fetched = match state
                .directory
                .fetch_candidates(&req.exclude_listing_ids, limit * 5)
                .await
            {
                Ok(candidates) => candidates,
                Err(e) => {
                    tracing::error!("Failed to fetch candidates: {}", e);
                    return HttpResponse::BadGateway().json(ErrorResponse {
                        error: "Failed to fetch candidates".to_string(),
                        message: e.to_string(),
                        status_code: 502,
                    });
                }
            };

            if let Err(e) = state.cache.set(&cache_key, &fetched).await {
                tracing::warn!("Failed to cache candidates: {}", e);
            }

            fetched
        }
    };

    tracing::debug!("Scoring {} candidates", candidates.len());

    let result = state.ranker.rank(&req.preference, candidates, limit);

    let response = RankMatchesResponse {
        request_id,
        matches: result.matches,
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} matches [{}] (from {} candidates)",
        response.matches.len(),
        response.request_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Score a single candidate endpoint
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "preference": { "gender": "Female" },
///   "candidate": { "listingId": "l1", "name": "Amina" }
/// }
/// ```
///
/// Used by the listing-detail view to show a match percentage for one
/// specific roommate listing.
async fn score_candidate(
    state: web::Data<AppState>,
    req: web::Json<ScoreCandidateRequest>,
) -> impl Responder {
    if !req.preference.valid_age_window() {
        tracing::info!("Rejected score request with inverted age window");
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: "minAge must not exceed maxAge".to_string(),
            status_code: 400,
        });
    }

    let result = state.ranker.score(&req.preference, &req.candidate);

    tracing::debug!(
        "Scored listing {}: {}",
        req.candidate.listing_id,
        result.score
    );

    HttpResponse::Ok().json(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
