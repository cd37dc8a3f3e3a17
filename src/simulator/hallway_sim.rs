//! Single playthrough simulations.
//!
//! A playthrough walks hallways until the player clears `level_count` in a row
//! or gives up after `rage_quit_count` attempts. A failed hallway sends the
//! streak back to zero.

use super::config::HallwayConfig;
use super::dice::HallwayDice;
use serde::Serialize;
use std::collections::HashSet;

/// How a simulated player's skill reacts to hallway layouts they have seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MemoryPolicy {
    /// Every hallway uses the base success chance.
    NoMemory,
    /// Seen layouts are always cleared.
    PerfectMemory,
    /// Seen layouts use the configured memory success chance.
    PartialMemory,
}

impl MemoryPolicy {
    pub const ALL: [MemoryPolicy; 3] = [
        MemoryPolicy::NoMemory,
        MemoryPolicy::PerfectMemory,
        MemoryPolicy::PartialMemory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MemoryPolicy::NoMemory => "No memory",
            MemoryPolicy::PerfectMemory => "Perfect memory",
            MemoryPolicy::PartialMemory => "Partial memory",
        }
    }

    /// Run one playthrough of `config` under this policy.
    pub fn simulate(&self, config: &HallwayConfig, dice: &mut impl HallwayDice) -> RunOutcome {
        match self {
            MemoryPolicy::NoMemory => simulate_without_memory(config, dice),
            MemoryPolicy::PerfectMemory => {
                simulate_with_memory(&config.with_memory_probability(1.0), dice)
            }
            MemoryPolicy::PartialMemory => simulate_with_memory(config, dice),
        }
    }
}

/// Result of one playthrough.
///
/// Both variants carry the number of hallways seen, counted as attempts made
/// plus one, so a cleared run and a rage quit report the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Cleared { hallways: u64 },
    RageQuit { hallways: u64 },
}

impl RunOutcome {
    pub fn hallways_seen(&self) -> u64 {
        match *self {
            RunOutcome::Cleared { hallways } | RunOutcome::RageQuit { hallways } => hallways,
        }
    }

    pub fn cleared(&self) -> bool {
        matches!(self, RunOutcome::Cleared { .. })
    }
}

/// Streak and attempt counters for one playthrough.
#[derive(Debug, Default)]
struct AttemptState {
    current_streak: u32,
    attempts_made: u64,
}

impl AttemptState {
    /// Returns the outcome once the playthrough is over.
    fn finished(&self, config: &HallwayConfig) -> Option<RunOutcome> {
        let hallways = self.attempts_made + 1;
        if self.current_streak >= config.level_count {
            Some(RunOutcome::Cleared { hallways })
        } else if self.attempts_made >= config.rage_quit_count {
            Some(RunOutcome::RageQuit { hallways })
        } else {
            None
        }
    }

    fn record(&mut self, roll: f64, threshold: f64) {
        if roll < threshold {
            self.current_streak += 1;
        } else {
            self.current_streak = 0;
        }
        self.attempts_made += 1;
    }
}

/// Playthrough where every hallway is equally hard.
pub fn simulate_without_memory(
    config: &HallwayConfig,
    dice: &mut impl HallwayDice,
) -> RunOutcome {
    let mut state = AttemptState::default();

    loop {
        if let Some(outcome) = state.finished(config) {
            return outcome;
        }
        let roll = dice.roll();
        state.record(roll, config.success_probability);
    }
}

/// Playthrough where layouts seen before use the memory success chance.
///
/// Each attempt rolls first and then picks the layout.
pub fn simulate_with_memory(
    config: &HallwayConfig,
    dice: &mut impl HallwayDice,
) -> RunOutcome {
    let mut state = AttemptState::default();
    let mut seen_halls: HashSet<u32> = HashSet::new();

    loop {
        if let Some(outcome) = state.finished(config) {
            return outcome;
        }
        let roll = dice.roll();
        let hall = dice.pick_hall(config.max_hall_number);

        let threshold = if seen_halls.contains(&hall) {
            config.success_probability_with_memory
        } else {
            seen_halls.insert(hall);
            config.success_probability
        };
        state.record(roll, threshold);
    }
}
