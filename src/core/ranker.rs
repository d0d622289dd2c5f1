use crate::core::scoring::calculate_compatibility;
use crate::models::{Candidate, Preference, RankedMatch, ScorePoints, ScoreResult};

/// Result of ranking a candidate set
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// Scores every candidate against a preference and orders them by score
///
/// Every candidate appears in the output: there is no minimum-score cutoff,
/// by design. The sort is stable and compares score only, so candidates with
/// equal scores keep their original input order.
#[derive(Debug, Clone)]
pub struct Ranker {
    points: ScorePoints,
}

impl Ranker {
    pub fn new(points: ScorePoints) -> Self {
        Self { points }
    }

    pub fn with_default_points() -> Self {
        Self {
            points: ScorePoints::default(),
        }
    }

    /// Score a single candidate against a preference
    pub fn score(&self, preference: &Preference, candidate: &Candidate) -> ScoreResult {
        calculate_compatibility(preference, candidate, &self.points)
    }

    /// Rank candidates descending by compatibility score
    ///
    /// # Arguments
    /// * `preference` - The viewer's roommate preferences
    /// * `candidates` - Candidate listings fetched from the directory
    /// * `limit` - Maximum number of matches to return
    pub fn rank(
        &self,
        preference: &Preference,
        candidates: Vec<Candidate>,
        limit: usize,
    ) -> RankResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<RankedMatch> = candidates
            .into_iter()
            .map(|candidate| {
                let result = self.score(preference, &candidate);
                RankedMatch {
                    listing_id: candidate.listing_id,
                    name: candidate.name,
                    age: candidate.age,
                    gender: candidate.gender,
                    match_score: result.score,
                    rationale: result.rationale,
                    bio: candidate.bio,
                    photo_ids: candidate.photo_ids,
                }
            })
            .collect();

        // Vec::sort_by is stable, so ties preserve input order
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches.truncate(limit);

        RankResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_points()
    }
}
