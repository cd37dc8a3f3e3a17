//! Analytic estimate of how far a player gets in one attempt.

/// Expected level reached in a single attempt without memory.
///
/// Sums `i * p^(i-1) * level_weight` for `i` in `1..=level_count`. The weight
/// is a flat per-level failure weight, not `1 - p`.
pub fn closed_form_estimate(
    level_count: u32,
    success_probability: f64,
    level_weight: f64,
) -> f64 {
    (1..=level_count)
        .map(|i| i as f64 * success_probability.powi(i as i32 - 1) * level_weight)
        .sum()
}
