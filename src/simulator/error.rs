//! Configuration errors.

use thiserror::Error;

/// Rejected estimator configuration.
///
/// Raised before any playthrough is simulated so that a bad parameter never
/// turns into a biased or NaN estimate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be within [0.0, 1.0], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("test iterations must be at least 1")]
    ZeroIterations,

    #[error("rage quit count must be at least 1")]
    ZeroRageQuit,

    #[error("max hall number must be at least 1")]
    ZeroHalls,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::ProbabilityOutOfRange {
            name: "success_probability",
            value: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "success_probability must be within [0.0, 1.0], got 1.5"
        );
        assert_eq!(
            ConfigError::ZeroIterations.to_string(),
            "test iterations must be at least 1"
        );
    }
}
