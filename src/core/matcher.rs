use thiserror::Error;

use crate::core::rules::{CompatibilityRules, ConfigurationError};
use crate::core::scoring::calculate_compatibility;
use crate::models::{
    CandidateProfile, PreferenceVector, QuestionnaireAnswers, ScoredMatch, ScoringWeights,
    ValidationError,
};

/// Errors reported by a ranking call
///
/// Every error rejects the individual call only; the matcher stays usable
/// for subsequent calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Ranking options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    /// Minimum score a candidate must reach to be included. 0 keeps all.
    pub min_score: u8,
    /// Cap on the number of results. `None` returns every match.
    pub max_results: Option<usize>,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            min_score: 0,
            max_results: None,
        }
    }
}

/// Result of the ranking process
#[derive(Debug, Clone)]
pub struct RankedMatches {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// # Pipeline stages
/// 1. Seeker answer validation
/// 2. Self-exclusion
/// 3. Scoring against every candidate
/// 4. Minimum-score filtering, ordering, and truncation
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    rules: CompatibilityRules,
}

impl Matcher {
    pub fn new(rules: CompatibilityRules) -> Self {
        Self { rules }
    }

    /// Build a matcher over a custom weight table, rejecting a malformed one.
    pub fn from_weights(weights: ScoringWeights) -> Result<Self, ConfigurationError> {
        Ok(Self::new(CompatibilityRules::new(weights)?))
    }

    pub fn with_default_rules() -> Self {
        Self {
            rules: CompatibilityRules::with_default_weights(),
        }
    }

    pub fn rules(&self) -> &CompatibilityRules {
        &self.rules
    }

    /// Find matches for a raw questionnaire submission.
    ///
    /// Validates the seeker's answers before any scoring; an incomplete or
    /// out-of-enumeration submission fails fast with every offending field
    /// named.
    pub fn find_matches(
        &self,
        seeker_id: &str,
        answers: &QuestionnaireAnswers,
        pool: &[CandidateProfile],
        opts: &RankOptions,
    ) -> Result<RankedMatches, MatchError> {
        let vector = answers.to_vector()?;
        Ok(self.rank(seeker_id, &vector, pool, opts))
    }

    /// Rank a candidate pool against an already validated preference vector.
    ///
    /// Pure over its inputs: the pool snapshot and seeker are read only,
    /// and results are recomputed on every call. An empty pool yields an
    /// empty list.
    pub fn rank(
        &self,
        seeker_id: &str,
        seeker: &PreferenceVector,
        pool: &[CandidateProfile],
        opts: &RankOptions,
    ) -> RankedMatches {
        let total_candidates = pool.len();

        let mut matches: Vec<ScoredMatch> = pool
            .iter()
            // Stage 2: never match the seeker against themselves
            .filter(|candidate| candidate.user_id != seeker_id)
            // Stages 3 & 4: score and threshold
            .filter_map(|candidate| {
                let (score, shared_traits) =
                    calculate_compatibility(seeker, &candidate.preferences, &self.rules);

                if score >= opts.min_score {
                    Some(ScoredMatch {
                        user_id: candidate.user_id.clone(),
                        name: candidate.name.clone(),
                        email: candidate.email.clone(),
                        year: candidate.year.clone(),
                        course: candidate.course.clone(),
                        compatibility_score: score,
                        shared_traits: shared_traits
                            .into_iter()
                            .map(str::to_string)
                            .collect(),
                    })
                } else {
                    None
                }
            })
            .collect();

        // Sort by score (descending), ties by candidate id (ascending) for
        // a deterministic order
        matches.sort_by(|a, b| {
            b.compatibility_score
                .cmp(&a.compatibility_score)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        if let Some(limit) = opts.max_results {
            matches.truncate(limit);
        }

        tracing::debug!(
            "ranked {} of {} candidates for seeker {}",
            matches.len(),
            total_candidates,
            seeker_id
        );

        RankedMatches {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
