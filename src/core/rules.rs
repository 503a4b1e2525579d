use thiserror::Error;

use crate::models::{PreferenceVector, ScoringWeights, TraitCategory};

/// Position of the middle value in every category's ordering table.
const MIDDLE_POSITION: u8 = 1;

/// Errors in the trait compatibility rule table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("negative weight {weight} for {category}")]
    NegativeWeight { category: &'static str, weight: f64 },

    #[error("non-finite weight for {category}")]
    NonFiniteWeight { category: &'static str },
}

/// Per-category compatibility rules and weights
///
/// Every category is ordered with a middle value between two extremes. An
/// exact match is always compatible; the middle value is also compatible
/// with both extremes. The two extremes are never compatible with each
/// other.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityRules {
    weights: ScoringWeights,
}

impl CompatibilityRules {
    /// Build rules over a custom weight table.
    ///
    /// Rejects a malformed table instead of scoring with it; validation
    /// happens once here so scoring stays infallible.
    pub fn new(weights: ScoringWeights) -> Result<Self, ConfigurationError> {
        for category in TraitCategory::ALL {
            let weight = weights.for_category(category);
            if !weight.is_finite() {
                return Err(ConfigurationError::NonFiniteWeight {
                    category: category.key(),
                });
            }
            if weight < 0.0 {
                return Err(ConfigurationError::NegativeWeight {
                    category: category.key(),
                    weight,
                });
            }
        }
        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Whether two vectors are compatible in the given category.
    ///
    /// Checked by position in the category's ordering table: equal
    /// positions, or one position apart (which can only involve the
    /// middle value).
    #[inline]
    pub fn is_compatible(
        &self,
        category: TraitCategory,
        a: &PreferenceVector,
        b: &PreferenceVector,
    ) -> bool {
        let pa = a.position(category);
        let pb = b.position(category);
        pa == pb || (pa.abs_diff(pb) == 1 && (pa == MIDDLE_POSITION || pb == MIDDLE_POSITION))
    }

    /// Points the category contributes when compatible.
    #[inline]
    pub fn weight(&self, category: TraitCategory) -> f64 {
        self.weights.for_category(category)
    }

    /// Maximum attainable score under these rules.
    pub fn max_score(&self) -> f64 {
        self.weights.total()
    }
}

impl Default for CompatibilityRules {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
