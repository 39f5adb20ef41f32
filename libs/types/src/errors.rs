//! Error types for the simulation engine
//!
//! Comprehensive error taxonomy using thiserror

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level simulation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    #[error("Numeric instability in run {run} at step {step}")]
    NumericInstability { run: u32, step: u32 },

    #[error("Cannot aggregate an empty result set")]
    EmptyResults,
}

/// Rejected input value
///
/// Surfaced before any simulation work begins; no partial computation
/// occurs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("competitiveness {value} outside [0.0, 1.0]")]
    Competitiveness { value: f64 },

    #[error("initial wage {value} must be greater than zero")]
    InitialWage { value: Decimal },

    #[error("run count {value} outside [1, {max}]")]
    Runs { value: u32, max: u32 },

    #[error("model constant {name} out of domain: {value}")]
    ModelConstant { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competitiveness_error_display() {
        let err = ParameterError::Competitiveness { value: 1.5 };
        assert_eq!(err.to_string(), "competitiveness 1.5 outside [0.0, 1.0]");
    }

    #[test]
    fn test_runs_error_display() {
        let err = ParameterError::Runs { value: 11, max: 10 };
        assert!(err.to_string().contains("11"));
        assert!(err.to_string().contains("[1, 10]"));
    }

    #[test]
    fn test_simulation_error_from_parameter_error() {
        let param_err = ParameterError::InitialWage {
            value: Decimal::ZERO,
        };
        let sim_err: SimulationError = param_err.into();
        assert!(matches!(sim_err, SimulationError::InvalidParameter(_)));
    }

    #[test]
    fn test_numeric_instability_display() {
        let err = SimulationError::NumericInstability { run: 2, step: 17 };
        assert_eq!(err.to_string(), "Numeric instability in run 2 at step 17");
    }
}
