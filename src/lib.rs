//! Roomie Algo - Roommate compatibility matching service
//!
//! This library provides the compatibility scoring used by the Roomio
//! student-housing app: a deterministic additive point budget over a
//! viewer's preferences and a candidate roommate listing, plus a stable
//! ranker over candidate sets.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_compatibility, RankResult, Ranker};
pub use models::{
    Candidate, Preference, RankMatchesRequest, RankMatchesResponse, RankedMatch, ScorePoints,
    ScoreResult,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let result = calculate_compatibility(
            &Preference::default(),
            &Candidate {
                listing_id: "l1".to_string(),
                name: "Test".to_string(),
                gender: None,
                religion: None,
                age: None,
                about_me: models::AboutMe::default(),
                bio: None,
                photo_ids: vec![],
            },
            &ScorePoints::default(),
        );
        assert!(result.score <= 100);
    }
}
