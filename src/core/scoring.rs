use crate::models::{
    AttributePoints, Candidate, GradedPoints, OrdinalPoints, Preference, ScorePoints, ScoreResult,
    SmokingPreference, SocialLevel, StudyHabits,
};

/// At most this many matched and this many differed reasons make it into the
/// rationale string
const MAX_REASONS_PER_SIDE: usize = 2;

/// Reasons collected while scoring, in fixed attribute order
#[derive(Debug, Default)]
struct Reasons {
    matched: Vec<String>,
    differed: Vec<String>,
}

/// Calculate a compatibility score (0-100) for a candidate against a preference
///
/// Additive budget across seven independent sub-scores, clamped to 100:
///
/// ```text
/// score = gender + religion + study_habits + cleanliness
///       + social_level + smoking + age_window
/// ```
///
/// Each attribute follows the same three-way pattern: no preference awards a
/// neutral credit, agreement awards full credit, disagreement awards a small
/// nonzero credit so no candidate is ever hard-excluded. A candidate attribute
/// that was left blank scores as neutral with a "not specified" reason, except
/// the smoker flag which defaults to non-smoker.
///
/// Pure and deterministic: identical inputs always produce an identical
/// `ScoreResult`. All points are integral, so no rounding ever occurs.
pub fn calculate_compatibility(
    preference: &Preference,
    candidate: &Candidate,
    points: &ScorePoints,
) -> ScoreResult {
    let mut reasons = Reasons::default();

    let total = score_gender(preference, candidate, &points.gender, &mut reasons)
        + score_religion(preference, candidate, &points.religion, &mut reasons)
        + score_study_habits(preference, candidate, &points.study_habits, &mut reasons)
        + score_cleanliness(preference, candidate, &points.cleanliness, &mut reasons)
        + score_social_level(preference, candidate, &points.social_level, &mut reasons)
        + score_smoking(preference, candidate, &points.smoking, &mut reasons)
        + score_age(preference, candidate, points.age_window, &mut reasons);

    ScoreResult {
        score: total.min(100) as u8,
        rationale: build_rationale(&reasons),
    }
}

#[inline]
fn score_gender(
    preference: &Preference,
    candidate: &Candidate,
    points: &AttributePoints,
    reasons: &mut Reasons,
) -> u32 {
    let Some(wanted) = preference.gender else {
        reasons.matched.push("No gender preference".to_string());
        return points.neutral;
    };

    match candidate.gender {
        None => {
            reasons.matched.push("Gender not specified".to_string());
            points.neutral
        }
        Some(actual) if actual == wanted => {
            reasons.matched.push(format!("Same gender ({})", actual));
            points.full
        }
        Some(actual) => {
            reasons.differed.push(format!("Different gender ({})", actual));
            points.mismatch
        }
    }
}

#[inline]
fn score_religion(
    preference: &Preference,
    candidate: &Candidate,
    points: &AttributePoints,
    reasons: &mut Reasons,
) -> u32 {
    let Some(wanted) = preference.religion else {
        reasons.matched.push("No religion preference".to_string());
        return points.neutral;
    };

    match candidate.religion {
        None => {
            reasons.matched.push("Religion not specified".to_string());
            points.neutral
        }
        Some(actual) if actual == wanted => {
            reasons.matched.push(format!("Same religion ({})", actual));
            points.full
        }
        Some(actual) => {
            reasons
                .differed
                .push(format!("Different religion ({})", actual));
            points.mismatch
        }
    }
}

/// Either side stating "Flexible" earns the partial credit instead of the
/// mismatch credit
#[inline]
fn score_study_habits(
    preference: &Preference,
    candidate: &Candidate,
    points: &GradedPoints,
    reasons: &mut Reasons,
) -> u32 {
    let Some(wanted) = preference.study_habits else {
        reasons.matched.push("No study habits preference".to_string());
        return points.neutral;
    };

    match candidate.about_me.study_habits {
        None => {
            reasons.matched.push("Study habits not specified".to_string());
            points.neutral
        }
        Some(actual) if actual == wanted => {
            reasons.matched.push(format!("Same study habits ({})", actual));
            points.full
        }
        Some(actual) if actual == StudyHabits::Flexible || wanted == StudyHabits::Flexible => {
            reasons.matched.push("Flexible study habits".to_string());
            points.flexible
        }
        Some(actual) => {
            reasons
                .differed
                .push(format!("Different study habits ({})", actual));
            points.mismatch
        }
    }
}

/// Graded by ordinal distance on [Relaxed, Moderate, Very Clean]:
/// `max(floor, full - step * levelDiff)`
#[inline]
fn score_cleanliness(
    preference: &Preference,
    candidate: &Candidate,
    points: &OrdinalPoints,
    reasons: &mut Reasons,
) -> u32 {
    let Some(wanted) = preference.cleanliness else {
        reasons.matched.push("No cleanliness preference".to_string());
        return points.neutral;
    };

    match candidate.about_me.cleanliness {
        None => {
            reasons.matched.push("Cleanliness not specified".to_string());
            points.neutral
        }
        Some(actual) => {
            let level_diff = wanted.level().abs_diff(actual.level());
            if level_diff == 0 {
                reasons.matched.push(format!("Same cleanliness ({})", actual));
                points.full
            } else {
                reasons
                    .differed
                    .push(format!("Different cleanliness ({})", actual));
                points
                    .full
                    .saturating_sub(points.step * level_diff)
                    .max(points.floor)
            }
        }
    }
}

/// Either side stating "Balanced" earns the partial credit instead of the
/// mismatch credit
#[inline]
fn score_social_level(
    preference: &Preference,
    candidate: &Candidate,
    points: &GradedPoints,
    reasons: &mut Reasons,
) -> u32 {
    let Some(wanted) = preference.social_level else {
        reasons.matched.push("No social level preference".to_string());
        return points.neutral;
    };

    match candidate.about_me.social_level {
        None => {
            reasons.matched.push("Social level not specified".to_string());
            points.neutral
        }
        Some(actual) if actual == wanted => {
            reasons.matched.push(format!("Same social level ({})", actual));
            points.full
        }
        Some(actual) if actual == SocialLevel::Balanced || wanted == SocialLevel::Balanced => {
            reasons.matched.push("Balanced social level".to_string());
            points.flexible
        }
        Some(actual) => {
            reasons
                .differed
                .push(format!("Different social level ({})", actual));
            points.mismatch
        }
    }
}

/// Unlike the other attributes, an absent smoker flag is not treated as
/// "not specified": the candidate scores as a non-smoker
#[inline]
fn score_smoking(
    preference: &Preference,
    candidate: &Candidate,
    points: &AttributePoints,
    reasons: &mut Reasons,
) -> u32 {
    let Some(wanted) = preference.smoking_preference else {
        reasons.matched.push("No smoking preference".to_string());
        return points.neutral;
    };

    let actual = if candidate.smoker() {
        SmokingPreference::Smoker
    } else {
        SmokingPreference::NonSmoker
    };

    if actual == wanted {
        reasons
            .matched
            .push(format!("Same smoking preference ({})", actual));
        points.full
    } else {
        reasons
            .differed
            .push(format!("Different smoking preference ({})", actual));
        points.mismatch
    }
}

/// Full credit inside the window; outside, credit falls off linearly with the
/// distance to the nearest bound: `max(0, window - distance)`
#[inline]
fn score_age(
    preference: &Preference,
    candidate: &Candidate,
    window_points: u32,
    reasons: &mut Reasons,
) -> u32 {
    let age = candidate.age_or_default();

    if age >= preference.min_age && age <= preference.max_age {
        reasons
            .matched
            .push(format!("Age {} within preferred range", age));
        return window_points;
    }

    let distance = if age < preference.min_age {
        preference.min_age - age
    } else {
        age - preference.max_age
    };

    reasons
        .differed
        .push(format!("Age {} outside preferred range", age));
    window_points.saturating_sub(distance as u32)
}

/// Build the rationale string: up to two matched reasons prefixed with a
/// check mark, up to two differed reasons prefixed with a cross mark, the two
/// halves joined by " | " when both are present
fn build_rationale(reasons: &Reasons) -> String {
    let mut parts = Vec::with_capacity(2);

    if !reasons.matched.is_empty() {
        let matched: Vec<&str> = reasons
            .matched
            .iter()
            .take(MAX_REASONS_PER_SIDE)
            .map(String::as_str)
            .collect();
        parts.push(format!("\u{2713} {}", matched.join(", ")));
    }

    if !reasons.differed.is_empty() {
        let differed: Vec<&str> = reasons
            .differed
            .iter()
            .take(MAX_REASONS_PER_SIDE)
            .map(String::as_str)
            .collect();
        parts.push(format!("\u{2717} {}", differed.join(", ")));
    }

    parts.join(" | ")
}
