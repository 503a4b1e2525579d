// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, Cleanliness, NoiseTolerance, PreferenceVector, ScoredMatch, ScoringWeights,
    SleepSchedule, SocialBehavior, StudyPreference, TraitCategory,
};
pub use requests::{FieldFault, FindMatchesRequest, QuestionnaireAnswers, ValidationError};
pub use responses::FindMatchesResponse;
