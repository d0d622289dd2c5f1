// Unit tests for Roomie Algo

use roomie_algo::models::{
    AboutMe, Candidate, Cleanliness, Gender, Preference, Religion, ScorePoints, SmokingPreference,
    SocialLevel, StudyHabits,
};
use roomie_algo::{calculate_compatibility, Ranker};

fn blank_candidate(id: &str) -> Candidate {
    Candidate {
        listing_id: id.to_string(),
        name: format!("Listing {}", id),
        gender: None,
        religion: None,
        age: None,
        about_me: AboutMe::default(),
        bio: None,
        photo_ids: vec![],
    }
}

fn full_candidate(id: &str) -> Candidate {
    Candidate {
        listing_id: id.to_string(),
        name: format!("Listing {}", id),
        gender: Some(Gender::Female),
        religion: Some(Religion::Christianity),
        age: Some(22),
        about_me: AboutMe {
            study_habits: Some(StudyHabits::MorningPerson),
            cleanliness: Some(Cleanliness::VeryClean),
            social_level: Some(SocialLevel::Balanced),
            smoker: Some(false),
        },
        bio: None,
        photo_ids: vec![],
    }
}

fn matching_preference() -> Preference {
    Preference {
        gender: Some(Gender::Female),
        religion: Some(Religion::Christianity),
        study_habits: Some(StudyHabits::MorningPerson),
        cleanliness: Some(Cleanliness::VeryClean),
        social_level: Some(SocialLevel::Balanced),
        smoking_preference: Some(SmokingPreference::NonSmoker),
        min_age: 18,
        max_age: 30,
    }
}

#[test]
fn test_determinism() {
    let points = ScorePoints::default();
    let preference = matching_preference();

    for candidate in [blank_candidate("a"), full_candidate("b")] {
        let first = calculate_compatibility(&preference, &candidate, &points);
        let second = calculate_compatibility(&preference, &candidate, &points);
        assert_eq!(first, second);
    }
}

#[test]
fn test_score_bounds_over_attribute_sweep() {
    let points = ScorePoints::default();

    let genders = [None, Some(Gender::Male), Some(Gender::Female)];
    let cleanliness = [
        None,
        Some(Cleanliness::VeryClean),
        Some(Cleanliness::Moderate),
        Some(Cleanliness::Relaxed),
    ];
    let smokers = [None, Some(false), Some(true)];
    let ages = [None, Some(18), Some(25), Some(45), Some(90)];

    let preference = matching_preference();

    for &gender in &genders {
        for &clean in &cleanliness {
            for &smoker in &smokers {
                for &age in &ages {
                    let mut candidate = blank_candidate("sweep");
                    candidate.gender = gender;
                    candidate.age = age;
                    candidate.about_me.cleanliness = clean;
                    candidate.about_me.smoker = smoker;

                    let result = calculate_compatibility(&preference, &candidate, &points);
                    assert!(result.score <= 100);
                }
            }
        }
    }
}

#[test]
fn test_full_match_ceiling() {
    let result = calculate_compatibility(
        &matching_preference(),
        &full_candidate("perfect"),
        &ScorePoints::default(),
    );
    assert_eq!(result.score, 100);
}

#[test]
fn test_monotonic_neutrality() {
    // Leaving a preference unset never scores lower than setting it to a
    // value the candidate does not satisfy.
    let points = ScorePoints::default();
    // Every attribute set, none of them Flexible/Balanced, so a contrarian
    // preference is a true mismatch rather than a partial match.
    let mut candidate = full_candidate("c");
    candidate.about_me.social_level = Some(SocialLevel::Extrovert);

    let unset = Preference::default();
    let base = calculate_compatibility(&unset, &candidate, &points).score;

    let contrarian = Preference {
        gender: Some(Gender::Male),
        religion: Some(Religion::Buddhism),
        study_habits: Some(StudyHabits::NightOwl),
        cleanliness: Some(Cleanliness::Relaxed),
        social_level: Some(SocialLevel::Introvert),
        smoking_preference: Some(SmokingPreference::Smoker),
        min_age: 18,
        max_age: 30,
    };

    // Flip one attribute at a time from unset to a mismatching value.
    let single_flips = [
        Preference {
            gender: contrarian.gender,
            ..Preference::default()
        },
        Preference {
            religion: contrarian.religion,
            ..Preference::default()
        },
        Preference {
            study_habits: contrarian.study_habits,
            ..Preference::default()
        },
        Preference {
            cleanliness: contrarian.cleanliness,
            ..Preference::default()
        },
        Preference {
            social_level: contrarian.social_level,
            ..Preference::default()
        },
        Preference {
            smoking_preference: contrarian.smoking_preference,
            ..Preference::default()
        },
    ];

    for flipped in single_flips {
        let score = calculate_compatibility(&flipped, &candidate, &points).score;
        assert!(
            score <= base,
            "unset preference scored lower than a mismatching one"
        );
    }
}

#[test]
fn test_gender_mismatch_is_not_zero() {
    // Preference Male vs candidate Female: the gender sub-score is 5, not 0,
    // so the total sits exactly 10 below the unset-preference baseline.
    let points = ScorePoints::default();
    let mut candidate = blank_candidate("c");
    candidate.gender = Some(Gender::Female);

    let pref = Preference {
        gender: Some(Gender::Male),
        ..Preference::default()
    };
    let base = calculate_compatibility(&Preference::default(), &candidate, &points).score;
    let mismatch = calculate_compatibility(&pref, &candidate, &points).score;

    assert_eq!(base - mismatch, 10);
    assert!(mismatch > 0);
}

#[test]
fn test_empty_preference_empty_candidate_is_64() {
    // Regression anchor: all neutral credits plus the in-window default age.
    let result = calculate_compatibility(
        &Preference::default(),
        &blank_candidate("empty"),
        &ScorePoints::default(),
    );
    assert_eq!(result.score, 64);
}

#[test]
fn test_rationale_reports_no_preference_matches() {
    let result = calculate_compatibility(
        &Preference::default(),
        &blank_candidate("empty"),
        &ScorePoints::default(),
    );
    assert!(!result.rationale.is_empty());
    assert!(result.rationale.starts_with('\u{2713}'));
    assert!(result.rationale.contains("No gender preference"));
}

#[test]
fn test_rationale_non_empty_for_mixed_outcome() {
    let mut candidate = blank_candidate("c");
    candidate.gender = Some(Gender::Female);
    candidate.religion = Some(Religion::Islam);

    let pref = Preference {
        gender: Some(Gender::Female),
        religion: Some(Religion::Other),
        ..Preference::default()
    };

    let result = calculate_compatibility(&pref, &candidate, &ScorePoints::default());
    assert!(result.rationale.contains("Same gender (Female)"));
    assert!(result.rationale.contains("Different religion (Islam)"));
    assert!(result.rationale.contains(" | "));
}

#[test]
fn test_ranking_ties_preserve_input_order() {
    // Scores land as [low, high, high]; the two tied candidates keep their
    // input order.
    let ranker = Ranker::with_default_points();
    let preference = matching_preference();

    let low = {
        let mut c = blank_candidate("low");
        c.gender = Some(Gender::Male);
        c.about_me.smoker = Some(true);
        c
    };
    let high_first = full_candidate("high_first");
    let high_second = full_candidate("high_second");

    let result = ranker.rank(&preference, vec![low, high_first, high_second], 10);

    assert_eq!(result.matches[0].listing_id, "high_first");
    assert_eq!(result.matches[1].listing_id, "high_second");
    assert_eq!(
        result.matches[0].match_score,
        result.matches[1].match_score
    );
    assert_eq!(result.matches[2].listing_id, "low");
}

#[test]
fn test_ranking_is_stable_across_runs() {
    let ranker = Ranker::with_default_points();
    let preference = matching_preference();

    let candidates: Vec<Candidate> = (0..25)
        .map(|i| {
            if i % 2 == 0 {
                full_candidate(&i.to_string())
            } else {
                blank_candidate(&i.to_string())
            }
        })
        .collect();

    let first = ranker.rank(&preference, candidates.clone(), 25);
    let second = ranker.rank(&preference, candidates, 25);

    let first_ids: Vec<&str> = first.matches.iter().map(|m| m.listing_id.as_str()).collect();
    let second_ids: Vec<&str> = second
        .matches
        .iter()
        .map(|m| m.listing_id.as_str())
        .collect();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn test_worked_example_two_attribute_preference() {
    // Preference = Female + Very Clean, ages 18-30; candidate matches both
    // and is 22. Two full credits, four neutral credits, age in window:
    // 25 + 10 + 8 + 15 + 8 + 5 + 10 = 81.
    let pref = Preference {
        gender: Some(Gender::Female),
        cleanliness: Some(Cleanliness::VeryClean),
        ..Preference::default()
    };
    let mut candidate = blank_candidate("c");
    candidate.gender = Some(Gender::Female);
    candidate.age = Some(22);
    candidate.about_me.cleanliness = Some(Cleanliness::VeryClean);

    let result = calculate_compatibility(&pref, &candidate, &ScorePoints::default());
    assert_eq!(result.score, 81);
}
