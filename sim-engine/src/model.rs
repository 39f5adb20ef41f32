//! Fixed constants of the wage-adjustment process
//!
//! The constants are grouped here so a recalibration never touches the
//! trajectory loop. Defaults carry the canonical calibration: the
//! competitive equilibrium sits at 75% of the opening demand, mirroring a
//! negotiation schedule that concedes up to a quarter of it.

use serde::{Deserialize, Serialize};
use types::errors::ParameterError;

/// Configuration for the wage-adjustment process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Competitive-equilibrium wage as a fraction of the initial wage
    pub equilibrium_ratio: f64,
    /// Fraction of the remaining gap closed per step at full competitiveness
    pub adjustment_rate: f64,
    /// Noise amplitude as a fraction of the initial wage at zero competitiveness
    pub noise_fraction: f64,
    /// Hard step limit per trajectory
    pub max_steps: u32,
    /// Convergence threshold as a fraction of the initial wage
    pub epsilon_ratio: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            equilibrium_ratio: 0.75,
            adjustment_rate: 0.3,
            noise_fraction: 0.05,
            max_steps: 50,
            epsilon_ratio: 0.001,
        }
    }
}

impl ModelConfig {
    /// Reject configs that would feed non-finite or out-of-domain constants
    /// into the trajectory process.
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_ratio("equilibrium_ratio", self.equilibrium_ratio)?;
        check_ratio("adjustment_rate", self.adjustment_rate)?;
        check_ratio("noise_fraction", self.noise_fraction)?;
        check_ratio("epsilon_ratio", self.epsilon_ratio)?;
        if self.max_steps == 0 {
            return Err(ParameterError::ModelConstant {
                name: "max_steps",
                value: 0.0,
            });
        }
        Ok(())
    }
}

fn check_ratio(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ParameterError::ModelConstant { name, value });
    }
    Ok(())
}
