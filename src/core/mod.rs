// Core algorithm exports
pub mod matcher;
pub mod rules;
pub mod scoring;

pub use matcher::{MatchError, Matcher, RankOptions, RankedMatches};
pub use rules::{CompatibilityRules, ConfigurationError};
pub use scoring::calculate_compatibility;
