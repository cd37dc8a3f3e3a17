//! Simulation configuration.

use super::error::ConfigError;
use crate::constants::{
    LEVEL_COUNT, MAX_HALL_NUMBER, RAGE_QUIT_COUNT, SUCCESS_PROBABILITY,
    SUCCESS_PROBABILITY_WITH_MEMORY, TEST_ITERATIONS,
};
use serde::Serialize;

/// Player and game parameters for a single simulated playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HallwayConfig {
    /// Chance to clear an unseen hallway
    pub success_probability: f64,

    /// Chance to clear a hallway layout seen earlier in the same playthrough
    pub success_probability_with_memory: f64,

    /// Consecutive clears needed to finish the game
    pub level_count: u32,

    /// Attempts before the player gives up
    pub rage_quit_count: u64,

    /// Size of the hallway layout pool
    pub max_hall_number: u32,
}

impl Default for HallwayConfig {
    fn default() -> Self {
        Self {
            success_probability: SUCCESS_PROBABILITY,
            success_probability_with_memory: SUCCESS_PROBABILITY_WITH_MEMORY,
            level_count: LEVEL_COUNT,
            rage_quit_count: RAGE_QUIT_COUNT,
            max_hall_number: MAX_HALL_NUMBER,
        }
    }
}

impl HallwayConfig {
    /// Same player, but with the given memory success chance.
    pub fn with_memory_probability(self, success_probability_with_memory: f64) -> Self {
        Self {
            success_probability_with_memory,
            ..self
        }
    }

    /// Reject parameters that cannot describe a playthrough.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("success_probability", self.success_probability)?;
        check_probability(
            "success_probability_with_memory",
            self.success_probability_with_memory,
        )?;
        if self.rage_quit_count == 0 {
            return Err(ConfigError::ZeroRageQuit);
        }
        if self.max_hall_number == 0 {
            return Err(ConfigError::ZeroHalls);
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails `contains`
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}

/// Configuration for a full estimation (all policies).
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Playthrough parameters shared by every policy
    pub hallway: HallwayConfig,

    /// Simulated playthroughs per policy
    pub test_iterations: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            hallway: HallwayConfig::default(),
            test_iterations: TEST_ITERATIONS,
            seed: None,
            verbosity: 1,
        }
    }
}

impl EstimatorConfig {
    /// Quick config for eyeballing parameter changes
    pub fn quick() -> Self {
        Self {
            test_iterations: 1_000,
            ..Default::default()
        }
    }

    /// Memory chance equal to the base chance, so every policy but perfect
    /// memory should agree with the no-memory estimate.
    pub fn memory_parity(test_iterations: u32) -> Self {
        let hallway = HallwayConfig::default();
        Self {
            hallway: hallway.with_memory_probability(hallway.success_probability),
            test_iterations,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.test_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        self.hallway.validate()
    }
}
