//! Hallway Estimator Library
//!
//! Estimates how many hallways a player passes through before clearing the
//! game, with and without remembering hallway layouts.

pub mod build_info;
pub mod constants;
pub mod simulator;
