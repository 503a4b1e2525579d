//! Roomie Algo - compatibility matching engine for the Roomie roommate-finder app
//!
//! This library scores pairs of users on five categorical lifestyle answers
//! and ranks an in-memory candidate pool for one seeker. Scoring is a pure,
//! synchronous computation: an answer pair counts as compatible on an exact
//! match or when either value is its category's middle value. Every
//! compatible category adds its weight (20 points by default) to a 0-100
//! integer score.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::core::{
    calculate_compatibility, CompatibilityRules, ConfigurationError, MatchError, Matcher,
    RankOptions, RankedMatches,
};
pub use crate::models::{
    CandidateProfile, FindMatchesRequest, FindMatchesResponse, PreferenceVector,
    QuestionnaireAnswers, ScoredMatch, ScoringWeights, ValidationError,
};
