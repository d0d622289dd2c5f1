use serde::{Deserialize, Serialize};
use std::fmt;

/// Age assumed for a listing that never filled in the age field
pub const DEFAULT_CANDIDATE_AGE: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Religion {
    Islam,
    Christianity,
    Buddhism,
    Hinduism,
    Other,
}

impl fmt::Display for Religion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Religion::Islam => write!(f, "Islam"),
            Religion::Christianity => write!(f, "Christianity"),
            Religion::Buddhism => write!(f, "Buddhism"),
            Religion::Hinduism => write!(f, "Hinduism"),
            Religion::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudyHabits {
    #[serde(rename = "Morning Person")]
    MorningPerson,
    #[serde(rename = "Night Owl")]
    NightOwl,
    Flexible,
}

impl fmt::Display for StudyHabits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudyHabits::MorningPerson => write!(f, "Morning Person"),
            StudyHabits::NightOwl => write!(f, "Night Owl"),
            StudyHabits::Flexible => write!(f, "Flexible"),
        }
    }
}

/// Ordinal cleanliness scale: Relaxed < Moderate < Very Clean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cleanliness {
    #[serde(rename = "Very Clean")]
    VeryClean,
    Moderate,
    Relaxed,
}

impl Cleanliness {
    /// Position on the ordinal scale, used for graded scoring
    pub fn level(&self) -> i32 {
        match self {
            Cleanliness::Relaxed => 0,
            Cleanliness::Moderate => 1,
            Cleanliness::VeryClean => 2,
        }
    }
}

impl fmt::Display for Cleanliness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cleanliness::VeryClean => write!(f, "Very Clean"),
            Cleanliness::Moderate => write!(f, "Moderate"),
            Cleanliness::Relaxed => write!(f, "Relaxed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialLevel {
    Introvert,
    Extrovert,
    Balanced,
}

impl fmt::Display for SocialLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocialLevel::Introvert => write!(f, "Introvert"),
            SocialLevel::Extrovert => write!(f, "Extrovert"),
            SocialLevel::Balanced => write!(f, "Balanced"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingPreference {
    #[serde(rename = "Non-Smoker")]
    NonSmoker,
    Smoker,
}

impl fmt::Display for SmokingPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmokingPreference::NonSmoker => write!(f, "Non-Smoker"),
            SmokingPreference::Smoker => write!(f, "Smoker"),
        }
    }
}

/// The searching user's desired roommate attributes and age window
///
/// Every attribute is optional: `None` means "Any" / no preference. The age
/// window is not validated here; `min_age <= max_age` is the caller's
/// responsibility (the HTTP layer rejects inverted windows before scoring).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preference {
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub religion: Option<Religion>,
    #[serde(rename = "studyHabits", default)]
    pub study_habits: Option<StudyHabits>,
    #[serde(default)]
    pub cleanliness: Option<Cleanliness>,
    #[serde(rename = "socialLevel", default)]
    pub social_level: Option<SocialLevel>,
    #[serde(rename = "smokingPreference", default)]
    pub smoking_preference: Option<SmokingPreference>,
    #[serde(rename = "minAge", default = "default_min_age")]
    pub min_age: u8,
    #[serde(rename = "maxAge", default = "default_max_age")]
    pub max_age: u8,
}

impl Preference {
    /// True when the age window is well-formed (`min_age <= max_age`)
    ///
    /// The scorer performs no validation and produces whatever the
    /// arithmetic yields for an inverted window, so callers check this
    /// first.
    pub fn valid_age_window(&self) -> bool {
        self.min_age <= self.max_age
    }
}

impl Default for Preference {
    fn default() -> Self {
        Self {
            gender: None,
            religion: None,
            study_habits: None,
            cleanliness: None,
            social_level: None,
            smoking_preference: None,
            min_age: default_min_age(),
            max_age: default_max_age(),
        }
    }
}

fn default_min_age() -> u8 {
    18
}

fn default_max_age() -> u8 {
    30
}

/// Lifestyle section of a roommate listing; every field may be left blank
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AboutMe {
    #[serde(rename = "studyHabits", default)]
    pub study_habits: Option<StudyHabits>,
    #[serde(default)]
    pub cleanliness: Option<Cleanliness>,
    #[serde(rename = "socialLevel", default)]
    pub social_level: Option<SocialLevel>,
    #[serde(default)]
    pub smoker: Option<bool>,
}

/// A roommate-seeker profile being evaluated against a Preference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "listingId")]
    pub listing_id: String,
    pub name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub religion: Option<Religion>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(rename = "aboutMe", default)]
    pub about_me: AboutMe,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "photoIds", default)]
    pub photo_ids: Vec<String>,
}

impl Candidate {
    /// Listing age, defaulting to 25 when the field was never filled in
    pub fn age_or_default(&self) -> u8 {
        self.age.unwrap_or(DEFAULT_CANDIDATE_AGE)
    }

    /// Smoker flag, treating an absent flag as non-smoker
    ///
    /// Carried over from the original listing form as a deliberate default:
    /// a profile that never answered the smoking question scores as a
    /// non-smoker rather than as "not specified".
    pub fn smoker(&self) -> bool {
        self.about_me.smoker.unwrap_or(false)
    }
}

/// Compatibility score for one (preference, candidate) pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub rationale: String,
}

/// Ranked match result returned to the app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(rename = "listingId")]
    pub listing_id: String,
    pub name: String,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub rationale: String,
    pub bio: Option<String>,
    #[serde(rename = "photoIds")]
    pub photo_ids: Vec<String>,
}

/// Point budget for a plain three-way attribute
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AttributePoints {
    pub full: u32,
    pub neutral: u32,
    pub mismatch: u32,
}

/// Point budget for an attribute with a middle-ground value
/// (Flexible study habits, Balanced social level)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GradedPoints {
    pub full: u32,
    pub neutral: u32,
    pub flexible: u32,
    pub mismatch: u32,
}

/// Point budget for the ordinal cleanliness scale:
/// `max(floor, full - step * levelDiff)`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OrdinalPoints {
    pub full: u32,
    pub neutral: u32,
    pub step: u32,
    pub floor: u32,
}

/// The full additive point budget used by the compatibility scorer
///
/// Defaults are calibrated so that a candidate matching every stated
/// preference inside the age window reaches 100 after clamping, and so that
/// the neutral credit is never below the mismatch credit for any attribute.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScorePoints {
    #[serde(default = "default_gender_points")]
    pub gender: AttributePoints,
    #[serde(default = "default_religion_points")]
    pub religion: AttributePoints,
    #[serde(rename = "studyHabits", default = "default_study_points")]
    pub study_habits: GradedPoints,
    #[serde(default = "default_cleanliness_points")]
    pub cleanliness: OrdinalPoints,
    #[serde(rename = "socialLevel", default = "default_social_points")]
    pub social_level: GradedPoints,
    #[serde(default = "default_smoking_points")]
    pub smoking: AttributePoints,
    #[serde(rename = "ageWindow", default = "default_age_window_points")]
    pub age_window: u32,
}

impl Default for ScorePoints {
    fn default() -> Self {
        Self {
            gender: default_gender_points(),
            religion: default_religion_points(),
            study_habits: default_study_points(),
            cleanliness: default_cleanliness_points(),
            social_level: default_social_points(),
            smoking: default_smoking_points(),
            age_window: default_age_window_points(),
        }
    }
}

fn default_gender_points() -> AttributePoints {
    AttributePoints {
        full: 25,
        neutral: 15,
        mismatch: 5,
    }
}

fn default_religion_points() -> AttributePoints {
    AttributePoints {
        full: 15,
        neutral: 10,
        mismatch: 3,
    }
}

fn default_study_points() -> GradedPoints {
    GradedPoints {
        full: 15,
        neutral: 8,
        flexible: 10,
        mismatch: 5,
    }
}

fn default_cleanliness_points() -> OrdinalPoints {
    OrdinalPoints {
        full: 15,
        neutral: 8,
        step: 5,
        floor: 3,
    }
}

fn default_social_points() -> GradedPoints {
    GradedPoints {
        full: 15,
        neutral: 8,
        flexible: 10,
        mismatch: 5,
    }
}

fn default_smoking_points() -> AttributePoints {
    AttributePoints {
        full: 10,
        neutral: 5,
        mismatch: 3,
    }
}

fn default_age_window_points() -> u32 {
    10
}
