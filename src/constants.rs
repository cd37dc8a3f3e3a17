//! Default estimator parameters.
//!
//! These are the values used when nothing is overridden on the command line.

// =============================================================================
// PLAYER
// =============================================================================

/// Chance that a player clears a hallway they have never seen before.
pub const SUCCESS_PROBABILITY: f64 = 0.75;

/// Chance that a player clears a hallway layout they have already seen.
pub const SUCCESS_PROBABILITY_WITH_MEMORY: f64 = 0.9;

/// Attempts after which a player gives up on the game.
pub const RAGE_QUIT_COUNT: u64 = 1000;

// =============================================================================
// GAME
// =============================================================================

/// Number of distinct hallway layouts shipped with the game.
pub const MAX_HALL_NUMBER: u32 = 15;

/// Consecutive hallways that must be cleared to finish the game.
pub const LEVEL_COUNT: u32 = 5;

// =============================================================================
// ESTIMATION
// =============================================================================

/// Simulated playthroughs per policy.
pub const TEST_ITERATIONS: u32 = 10_000;

/// Per-level weight used by the closed-form reach estimate.
///
/// This is a flat 1/4 and is not derived from `SUCCESS_PROBABILITY`, so the
/// closed-form line and the simulated lines do not model the same player.
pub const CLOSED_FORM_LEVEL_WEIGHT: f64 = 0.25;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probabilities_in_range() {
        assert!((0.0..=1.0).contains(&SUCCESS_PROBABILITY));
        assert!((0.0..=1.0).contains(&SUCCESS_PROBABILITY_WITH_MEMORY));
    }

    #[test]
    fn test_memory_helps() {
        assert!(SUCCESS_PROBABILITY_WITH_MEMORY >= SUCCESS_PROBABILITY);
    }
}
