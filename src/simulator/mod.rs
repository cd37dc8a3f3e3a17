//! Monte Carlo hallway estimator.
//!
//! Simulates thousands of playthroughs to estimate how many hallways a player
//! walks through before clearing `level_count` hallways in a row, comparing:
//! - a player who never remembers layouts
//! - a player who always clears a layout they have seen before
//! - a player whose success chance improves on layouts they have seen
//!
//! A closed-form reach estimate is reported alongside for comparison.

mod closed_form;
mod config;
mod dice;
mod error;
mod hallway_sim;
mod report;
mod runner;

pub use closed_form::closed_form_estimate;
pub use config::{EstimatorConfig, HallwayConfig};
pub use dice::HallwayDice;
pub use error::ConfigError;
pub use hallway_sim::{simulate_with_memory, simulate_without_memory, MemoryPolicy, RunOutcome};
pub use report::{EstimateReport, PolicyReport};
pub use runner::{mean_hallways, run_estimation};
