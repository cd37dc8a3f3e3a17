//! Estimation driver.
//!
//! Runs every memory policy `test_iterations` times and averages the number of
//! hallways a player walks through before the game is over.

use super::closed_form::closed_form_estimate;
use super::config::{EstimatorConfig, HallwayConfig};
use super::dice::HallwayDice;
use super::error::ConfigError;
use super::hallway_sim::{MemoryPolicy, RunOutcome};
use super::report::{EstimateReport, PolicyReport};
use crate::constants::CLOSED_FORM_LEVEL_WEIGHT;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Run the full estimation and return a report.
pub fn run_estimation(config: &EstimatorConfig) -> Result<EstimateReport, ConfigError> {
    config.validate()?;

    let hallway = &config.hallway;
    let closed_form = closed_form_estimate(
        hallway.level_count,
        hallway.success_probability,
        CLOSED_FORM_LEVEL_WEIGHT,
    );
    info!(closed_form, "Closed-form reach computed");

    let policies = MemoryPolicy::ALL
        .iter()
        .map(|&policy| run_policy(policy, config))
        .collect();

    Ok(EstimateReport {
        config: *hallway,
        test_iterations: config.test_iterations,
        seed: config.seed,
        closed_form,
        policies,
    })
}

/// Simulate one policy with a fresh RNG per trial.
fn run_policy(policy: MemoryPolicy, config: &EstimatorConfig) -> PolicyReport {
    let mut outcomes = Vec::with_capacity(config.test_iterations as usize);

    for trial in 0..config.test_iterations {
        // Create RNG for this trial
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(trial as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let outcome = policy.simulate(&config.hallway, &mut rng);
        if config.verbosity >= 2 {
            debug!(
                policy = policy.label(),
                trial,
                hallways = outcome.hallways_seen(),
                cleared = outcome.cleared(),
                "Trial finished"
            );
        }
        outcomes.push(outcome);
    }

    let report = PolicyReport::from_outcomes(policy, &outcomes);
    if config.verbosity >= 1 {
        info!(
            policy = policy.label(),
            mean_hallways = report.mean_hallways,
            cleared = report.runs_cleared,
            rage_quit = report.runs_rage_quit,
            "Policy simulated"
        );
    }
    report
}

/// Sample mean of hallways seen over `iterations` playthroughs drawn from one
/// shared random source.
pub fn mean_hallways(
    policy: MemoryPolicy,
    config: &HallwayConfig,
    iterations: u32,
    dice: &mut impl HallwayDice,
) -> Result<f64, ConfigError> {
    if iterations == 0 {
        return Err(ConfigError::ZeroIterations);
    }
    config.validate()?;

    let total: u64 = (0..iterations)
        .map(|_| policy.simulate(config, dice).hallways_seen())
        .sum();
    Ok(total as f64 / iterations as f64)
}

/// Count of cleared runs among `outcomes`.
pub(crate) fn count_cleared(outcomes: &[RunOutcome]) -> u32 {
    outcomes.iter().filter(|o| o.cleared()).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_estimation() {
        let config = EstimatorConfig {
            test_iterations: 200,
            seed: Some(42),
            verbosity: 0,
            ..Default::default()
        };

        let report = run_estimation(&config).expect("valid config");

        assert_eq!(report.policies.len(), 3);
        assert_eq!(report.policies[0].policy, MemoryPolicy::NoMemory);
        for policy in &report.policies {
            assert_eq!(policy.runs, 200);
            assert!(policy.mean_hallways >= (config.hallway.level_count + 1) as f64);
        }
    }

    #[test]
    fn test_seeded_estimation_is_reproducible() {
        let config = EstimatorConfig {
            test_iterations: 100,
            seed: Some(7),
            verbosity: 0,
            ..Default::default()
        };

        let first = run_estimation(&config).unwrap();
        let second = run_estimation(&config).unwrap();
        for (a, b) in first.policies.iter().zip(&second.policies) {
            assert_eq!(a.mean_hallways, b.mean_hallways);
            assert_eq!(a.hallway_distribution, b.hallway_distribution);
        }
    }

    #[test]
    fn test_zero_iterations_fails_fast() {
        let config = EstimatorConfig {
            test_iterations: 0,
            ..Default::default()
        };
        assert_eq!(
            run_estimation(&config).unwrap_err(),
            ConfigError::ZeroIterations
        );

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            mean_hallways(MemoryPolicy::NoMemory, &config.hallway, 0, &mut rng),
            Err(ConfigError::ZeroIterations)
        );
    }

    #[test]
    fn test_bad_probability_fails_fast() {
        let config = EstimatorConfig {
            hallway: HallwayConfig::default().with_memory_probability(2.0),
            ..Default::default()
        };
        assert!(matches!(
            run_estimation(&config),
            Err(ConfigError::ProbabilityOutOfRange { .. })
        ));
    }

    #[test]
    fn test_mean_hallways_deterministic_cases() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let always = HallwayConfig {
            success_probability: 1.0,
            level_count: 5,
            rage_quit_count: 1000,
            ..Default::default()
        };
        assert_eq!(
            mean_hallways(MemoryPolicy::NoMemory, &always, 50, &mut rng),
            Ok(6.0)
        );

        let never = HallwayConfig {
            success_probability: 0.0,
            success_probability_with_memory: 0.0,
            rage_quit_count: 1000,
            ..Default::default()
        };
        assert_eq!(
            mean_hallways(MemoryPolicy::PartialMemory, &never, 50, &mut rng),
            Ok(1001.0)
        );
    }

    #[test]
    fn test_memory_lowers_hallway_count() {
        let config = EstimatorConfig {
            test_iterations: 2_000,
            seed: Some(2024),
            verbosity: 0,
            ..Default::default()
        };
        let report = run_estimation(&config).unwrap();
        let none = report.policy(MemoryPolicy::NoMemory).unwrap().mean_hallways;
        let perfect = report
            .policy(MemoryPolicy::PerfectMemory)
            .unwrap()
            .mean_hallways;
        assert!(perfect < none);
    }

    #[test]
    fn test_count_cleared() {
        let outcomes = [
            RunOutcome::Cleared { hallways: 6 },
            RunOutcome::RageQuit { hallways: 11 },
            RunOutcome::Cleared { hallways: 9 },
        ];
        assert_eq!(count_cleared(&outcomes), 2);
    }
}
