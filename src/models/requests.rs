use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::Validate;

use crate::models::domain::{
    Cleanliness, NoiseTolerance, PreferenceVector, SleepSchedule, SocialBehavior, StudyPreference,
    TraitCategory,
};

/// One rejected questionnaire field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFault {
    Missing { field: &'static str },
    Unknown { field: &'static str, value: String },
}

impl FieldFault {
    pub fn field(&self) -> &'static str {
        match self {
            FieldFault::Missing { field } => field,
            FieldFault::Unknown { field, .. } => field,
        }
    }
}

impl fmt::Display for FieldFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldFault::Missing { field } => write!(f, "{} is missing", field),
            FieldFault::Unknown { field, value } => {
                write!(f, "{} has unknown value {:?}", field, value)
            }
        }
    }
}

/// Rejected questionnaire submission, naming every missing or unknown field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid questionnaire answers: {}", describe_faults(.0))]
pub struct ValidationError(pub Vec<FieldFault>);

impl ValidationError {
    /// Field keys of all rejected answers, in questionnaire order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(FieldFault::field).collect()
    }
}

fn describe_faults(faults: &[FieldFault]) -> String {
    faults
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw questionnaire submission as produced by the questionnaire UI
///
/// Free-form strings, one per lifestyle question. Callers re-submit the
/// whole mapping when a user re-answers; there is no partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionnaireAnswers {
    #[serde(default, alias = "sleep_schedule", rename = "sleepSchedule")]
    pub sleep_schedule: Option<String>,
    #[serde(default)]
    pub cleanliness: Option<String>,
    #[serde(default, alias = "study_preference", rename = "studyPreference")]
    pub study_preference: Option<String>,
    #[serde(default, alias = "social_behavior", rename = "socialBehavior")]
    pub social_behavior: Option<String>,
    #[serde(default, alias = "noise_tolerance", rename = "noiseTolerance")]
    pub noise_tolerance: Option<String>,
}

impl QuestionnaireAnswers {
    /// Validate the submission into a complete preference vector.
    ///
    /// All five answers are checked in one pass and every missing or
    /// out-of-enumeration field is reported; nothing is scored on failure.
    pub fn to_vector(&self) -> Result<PreferenceVector, ValidationError> {
        let mut faults = Vec::new();

        let sleep_schedule = parse_answer(
            &self.sleep_schedule,
            TraitCategory::SleepSchedule,
            SleepSchedule::parse,
            &mut faults,
        );
        let cleanliness = parse_answer(
            &self.cleanliness,
            TraitCategory::Cleanliness,
            Cleanliness::parse,
            &mut faults,
        );
        let study_preference = parse_answer(
            &self.study_preference,
            TraitCategory::StudyPreference,
            StudyPreference::parse,
            &mut faults,
        );
        let social_behavior = parse_answer(
            &self.social_behavior,
            TraitCategory::SocialBehavior,
            SocialBehavior::parse,
            &mut faults,
        );
        let noise_tolerance = parse_answer(
            &self.noise_tolerance,
            TraitCategory::NoiseTolerance,
            NoiseTolerance::parse,
            &mut faults,
        );

        match (
            sleep_schedule,
            cleanliness,
            study_preference,
            social_behavior,
            noise_tolerance,
        ) {
            (
                Some(sleep_schedule),
                Some(cleanliness),
                Some(study_preference),
                Some(social_behavior),
                Some(noise_tolerance),
            ) => Ok(PreferenceVector {
                sleep_schedule,
                cleanliness,
                study_preference,
                social_behavior,
                noise_tolerance,
            }),
            _ => Err(ValidationError(faults)),
        }
    }
}

fn parse_answer<T>(
    raw: &Option<String>,
    category: TraitCategory,
    parse: fn(&str) -> Option<T>,
    faults: &mut Vec<FieldFault>,
) -> Option<T> {
    match raw.as_deref() {
        None => {
            faults.push(FieldFault::Missing {
                field: category.key(),
            });
            None
        }
        Some(value) => match parse(value) {
            Some(parsed) => Some(parsed),
            None => {
                faults.push(FieldFault::Unknown {
                    field: category.key(),
                    value: value.to_string(),
                });
                None
            }
        },
    }
}

/// Request to find matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    pub answers: QuestionnaireAnswers,
    #[serde(default, alias = "min_score", rename = "minScore")]
    pub min_score: u8,
    #[serde(default, alias = "max_results", rename = "maxResults")]
    pub max_results: Option<usize>,
}
