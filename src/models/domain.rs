use serde::{Deserialize, Serialize};

/// The five lifestyle categories, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitCategory {
    SleepSchedule,
    Cleanliness,
    StudyPreference,
    SocialBehavior,
    NoiseTolerance,
}

impl TraitCategory {
    /// Fixed evaluation order: sleep, cleanliness, study, social, noise.
    pub const ALL: [TraitCategory; 5] = [
        TraitCategory::SleepSchedule,
        TraitCategory::Cleanliness,
        TraitCategory::StudyPreference,
        TraitCategory::SocialBehavior,
        TraitCategory::NoiseTolerance,
    ];

    /// Field key as it appears in questionnaire payloads.
    pub fn key(self) -> &'static str {
        match self {
            TraitCategory::SleepSchedule => "sleepSchedule",
            TraitCategory::Cleanliness => "cleanliness",
            TraitCategory::StudyPreference => "studyPreference",
            TraitCategory::SocialBehavior => "socialBehavior",
            TraitCategory::NoiseTolerance => "noiseTolerance",
        }
    }
}

/// When the user usually sleeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepSchedule {
    Early,
    Flexible,
    Late,
}

impl SleepSchedule {
    /// Ordering position: 0 and 2 are the extremes, 1 is the middle value.
    pub fn position(self) -> u8 {
        match self {
            SleepSchedule::Early => 0,
            SleepSchedule::Flexible => 1,
            SleepSchedule::Late => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SleepSchedule::Early => "Early Riser",
            SleepSchedule::Flexible => "Flexible Sleep",
            SleepSchedule::Late => "Night Owl",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "early" => Some(SleepSchedule::Early),
            "flexible" => Some(SleepSchedule::Flexible),
            "late" => Some(SleepSchedule::Late),
            _ => None,
        }
    }
}

/// How clean the user keeps their space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cleanliness {
    Neat,
    Average,
    Messy,
}

impl Cleanliness {
    pub fn position(self) -> u8 {
        match self {
            Cleanliness::Neat => 0,
            Cleanliness::Average => 1,
            Cleanliness::Messy => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Cleanliness::Neat => "Neat",
            Cleanliness::Average => "Average",
            Cleanliness::Messy => "Messy",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "neat" => Some(Cleanliness::Neat),
            "average" => Some(Cleanliness::Average),
            "messy" => Some(Cleanliness::Messy),
            _ => None,
        }
    }
}

/// How the user prefers to study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyPreference {
    Quiet,
    Flexible,
    Group,
}

impl StudyPreference {
    pub fn position(self) -> u8 {
        match self {
            StudyPreference::Quiet => 0,
            StudyPreference::Flexible => 1,
            StudyPreference::Group => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StudyPreference::Quiet => "Quiet Study",
            StudyPreference::Flexible => "Flexible Study",
            StudyPreference::Group => "Group Study",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "quiet" => Some(StudyPreference::Quiet),
            "flexible" => Some(StudyPreference::Flexible),
            "group" => Some(StudyPreference::Group),
            _ => None,
        }
    }
}

/// How the user describes themselves socially
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialBehavior {
    Introvert,
    Balanced,
    Extrovert,
}

impl SocialBehavior {
    pub fn position(self) -> u8 {
        match self {
            SocialBehavior::Introvert => 0,
            SocialBehavior::Balanced => 1,
            SocialBehavior::Extrovert => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SocialBehavior::Introvert => "Introvert",
            SocialBehavior::Balanced => "Balanced Social",
            SocialBehavior::Extrovert => "Extrovert",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "introvert" => Some(SocialBehavior::Introvert),
            "balanced" => Some(SocialBehavior::Balanced),
            "extrovert" => Some(SocialBehavior::Extrovert),
            _ => None,
        }
    }
}

/// How the user handles noise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseTolerance {
    Sensitive,
    Moderate,
    Tolerant,
}

impl NoiseTolerance {
    pub fn position(self) -> u8 {
        match self {
            NoiseTolerance::Sensitive => 0,
            NoiseTolerance::Moderate => 1,
            NoiseTolerance::Tolerant => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NoiseTolerance::Sensitive => "Noise Sensitive",
            NoiseTolerance::Moderate => "Moderate Noise",
            NoiseTolerance::Tolerant => "High Tolerance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sensitive" => Some(NoiseTolerance::Sensitive),
            "moderate" => Some(NoiseTolerance::Moderate),
            "tolerant" => Some(NoiseTolerance::Tolerant),
            _ => None,
        }
    }
}

/// One user's complete set of lifestyle answers
///
/// Built by validating a raw questionnaire submission, so every field is
/// guaranteed to hold a member of its enumeration. Replaced wholesale when
/// the user re-answers the questionnaire, never partially mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceVector {
    #[serde(rename = "sleepSchedule")]
    pub sleep_schedule: SleepSchedule,
    pub cleanliness: Cleanliness,
    #[serde(rename = "studyPreference")]
    pub study_preference: StudyPreference,
    #[serde(rename = "socialBehavior")]
    pub social_behavior: SocialBehavior,
    #[serde(rename = "noiseTolerance")]
    pub noise_tolerance: NoiseTolerance,
}

impl PreferenceVector {
    /// Ordering position of this vector's value in the given category.
    pub fn position(&self, category: TraitCategory) -> u8 {
        match category {
            TraitCategory::SleepSchedule => self.sleep_schedule.position(),
            TraitCategory::Cleanliness => self.cleanliness.position(),
            TraitCategory::StudyPreference => self.study_preference.position(),
            TraitCategory::SocialBehavior => self.social_behavior.position(),
            TraitCategory::NoiseTolerance => self.noise_tolerance.position(),
        }
    }

    /// Display label of this vector's value in the given category.
    ///
    /// Labels are stable identifiers; mapping them to emoji and copy is the
    /// results UI's concern.
    pub fn label(&self, category: TraitCategory) -> &'static str {
        match category {
            TraitCategory::SleepSchedule => self.sleep_schedule.label(),
            TraitCategory::Cleanliness => self.cleanliness.label(),
            TraitCategory::StudyPreference => self.study_preference.label(),
            TraitCategory::SocialBehavior => self.social_behavior.label(),
            TraitCategory::NoiseTolerance => self.noise_tolerance.label(),
        }
    }
}

/// Candidate pool entry: identity plus one validated preference vector
///
/// Supplied by the user directory as a read-only snapshot; the engine never
/// mutates or stores these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub year: String,
    pub course: String,
    pub preferences: PreferenceVector,
}

/// Scored match result
///
/// Derived per ranking request and discarded after the caller reads the
/// ranked list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub year: String,
    pub course: String,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    #[serde(rename = "sharedTraits")]
    pub shared_traits: Vec<String>,
}

/// Per-category scoring weights
///
/// Equal weights of 20 keep scores on integers with a maximum of exactly
/// 100. The split is adjustable without changing the algorithm shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub sleep_schedule: f64,
    pub cleanliness: f64,
    pub study_preference: f64,
    pub social_behavior: f64,
    pub noise_tolerance: f64,
}

impl ScoringWeights {
    pub fn for_category(&self, category: TraitCategory) -> f64 {
        match category {
            TraitCategory::SleepSchedule => self.sleep_schedule,
            TraitCategory::Cleanliness => self.cleanliness,
            TraitCategory::StudyPreference => self.study_preference,
            TraitCategory::SocialBehavior => self.social_behavior,
            TraitCategory::NoiseTolerance => self.noise_tolerance,
        }
    }

    /// Maximum attainable score under this weighting.
    pub fn total(&self) -> f64 {
        TraitCategory::ALL
            .iter()
            .map(|&category| self.for_category(category))
            .sum()
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            sleep_schedule: 20.0,
            cleanliness: 20.0,
            study_preference: 20.0,
            social_behavior: 20.0,
            noise_tolerance: 20.0,
        }
    }
}
