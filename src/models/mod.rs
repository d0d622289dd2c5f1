// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AboutMe, AttributePoints, Candidate, Cleanliness, Gender, GradedPoints, OrdinalPoints,
    Preference, RankedMatch, Religion, ScorePoints, ScoreResult, SmokingPreference, SocialLevel,
    StudyHabits, DEFAULT_CANDIDATE_AGE,
};
pub use requests::{RankMatchesRequest, ScoreCandidateRequest};
pub use responses::{ErrorResponse, HealthResponse, RankMatchesResponse};
