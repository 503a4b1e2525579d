use crate::core::rules::CompatibilityRules;
use crate::models::{PreferenceVector, TraitCategory};

/// Compare two complete preference vectors
///
/// Walks the five categories in fixed order (sleep, cleanliness, study,
/// social, noise). Each compatible category adds its weight to the total
/// and contributes one trait label, taken from the seeker's value. On an
/// exact match that is also the shared value.
///
/// The total is rounded to the nearest integer with ties rounding up,
/// then clamped to 0..=100. Under the default equal weights every total
/// is already a multiple of 20, so rounding only matters for custom
/// weight tables.
pub fn calculate_compatibility(
    seeker: &PreferenceVector,
    candidate: &PreferenceVector,
    rules: &CompatibilityRules,
) -> (u8, Vec<&'static str>) {
    let mut total = 0.0_f64;
    let mut shared_traits = Vec::new();

    for category in TraitCategory::ALL {
        if rules.is_compatible(category, seeker, candidate) {
            total += rules.weight(category);
            shared_traits.push(seeker.label(category));
        }
    }

    // f64::round ties away from zero, which is half-up for a non-negative total
    let score = total.round().clamp(0.0, 100.0) as u8;

    (score, shared_traits)
}
