//! Validated simulation input parameters
//!
//! The interface layer turns raw form input into a `SimulationParameters`
//! value through the validating constructor; the engine re-checks the domain
//! defensively before any work begins.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ParameterError;

/// Minimum number of trials per request
pub const MIN_RUNS: u32 = 1;

/// Maximum number of trials per request
pub const MAX_RUNS: u32 = 10;

/// Validated input triple for one simulation request.
///
/// Fields are private so a value that exists was either validated at
/// construction or arrived through deserialization; the engine re-validates
/// the latter path before running. The interface layer builds a fresh value
/// per request, and the engine holds no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    competitiveness: f64,
    initial_wage: Decimal,
    runs: u32,
}

impl SimulationParameters {
    /// Construct validated parameters.
    ///
    /// Rejects `competitiveness` outside [0, 1] (or non-finite),
    /// `initial_wage` ≤ 0, and `runs` outside [1, 10].
    pub fn new(
        competitiveness: f64,
        initial_wage: Decimal,
        runs: u32,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            competitiveness,
            initial_wage,
            runs,
        };
        params.validate()?;
        Ok(params)
    }

    /// Re-check the domain of every field.
    ///
    /// Deserialization bypasses the constructor, so the engine calls this
    /// again before any simulation work; an out-of-domain value never
    /// reaches the trajectory process.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.competitiveness.is_finite() || !(0.0..=1.0).contains(&self.competitiveness) {
            return Err(ParameterError::Competitiveness {
                value: self.competitiveness,
            });
        }
        if self.initial_wage <= Decimal::ZERO {
            return Err(ParameterError::InitialWage {
                value: self.initial_wage,
            });
        }
        if !(MIN_RUNS..=MAX_RUNS).contains(&self.runs) {
            return Err(ParameterError::Runs {
                value: self.runs,
                max: MAX_RUNS,
            });
        }
        Ok(())
    }

    /// Market competition intensity in [0, 1].
    pub fn competitiveness(&self) -> f64 {
        self.competitiveness
    }

    /// Wage expectation at step 0, in currency units.
    pub fn initial_wage(&self) -> Decimal {
        self.initial_wage
    }

    /// Number of independent trials, in [1, 10].
    pub fn runs(&self) -> u32 {
        self.runs
    }
}
