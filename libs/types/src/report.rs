//! Aggregate simulation report
//!
//! The read-only result of one simulation request: terminal-wage statistics
//! over all runs plus the full trajectories for display. Discarded after
//! being returned to the caller; nothing is persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::SimulationId;
use crate::trajectory::WageTrajectory;

/// Aggregate view over all run results of one simulation request.
///
/// Variance is the population variance (divide by run count) since all
/// trials are fully observed. `mean_steps_to_converge` averages integer step
/// counts and is reported as a real number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub simulation_id: SimulationId,
    pub runs: u32,
    pub mean_terminal_wage: Decimal,
    pub variance_terminal_wage: Decimal,
    pub std_dev_terminal_wage: Decimal,
    pub min_terminal_wage: Decimal,
    pub max_terminal_wage: Decimal,
    pub mean_steps_to_converge: Decimal,
    /// Runs that stopped on the convergence criterion rather than the step
    /// limit.
    pub converged_runs: u32,
    pub trajectories: Vec<WageTrajectory>,
}

impl SimulationReport {
    /// Build a one-line summary string for log output.
    pub fn summary(&self) -> String {
        format!(
            "Runs: {} | Mean terminal wage: {} | Variance: {} | Mean steps: {} | Converged: {}/{}",
            self.runs,
            self.mean_terminal_wage.round_dp(2),
            self.variance_terminal_wage.round_dp(2),
            self.mean_steps_to_converge.round_dp(2),
            self.converged_runs,
            self.runs,
        )
    }
}
