//! Terminal-wage statistics and report assembly
//!
//! Pure reduction over run results: same inputs, bit-identical report
//! statistics. All arithmetic stays in Decimal so re-aggregation never
//! drifts.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use types::errors::SimulationError;
use types::ids::SimulationId;
use types::report::SimulationReport;
use types::trajectory::RunResult;

/// Reduce a non-empty set of run results into a report.
///
/// Variance is the population variance (divide by N) since all trials are
/// fully observed. The empty-input guard is defensive; the runner's
/// contract never produces an empty set.
pub fn aggregate(
    simulation_id: SimulationId,
    results: Vec<RunResult>,
) -> Result<SimulationReport, SimulationError> {
    if results.is_empty() {
        return Err(SimulationError::EmptyResults);
    }

    let n = Decimal::from(results.len() as u64);

    let mut sum_wage = Decimal::ZERO;
    let mut sum_steps = Decimal::ZERO;
    let mut min_wage = results[0].terminal_wage;
    let mut max_wage = results[0].terminal_wage;
    let mut converged_runs: u32 = 0;

    for result in &results {
        sum_wage += result.terminal_wage;
        sum_steps += Decimal::from(result.steps);
        min_wage = min_wage.min(result.terminal_wage);
        max_wage = max_wage.max(result.terminal_wage);
        if result.converged {
            converged_runs += 1;
        }
    }

    let mean_wage = sum_wage / n;
    let mean_steps = sum_steps / n;

    let mut sum_sq = Decimal::ZERO;
    for result in &results {
        let dev = result.terminal_wage - mean_wage;
        sum_sq += dev * dev;
    }
    let variance = sum_sq / n;
    let std_dev = variance.sqrt().unwrap_or(Decimal::ZERO);

    let runs = results.len() as u32;
    let trajectories: Vec<_> = results.into_iter().map(|r| r.trajectory).collect();

    Ok(SimulationReport {
        simulation_id,
        runs,
        mean_terminal_wage: mean_wage,
        variance_terminal_wage: variance,
        std_dev_terminal_wage: std_dev,
        min_terminal_wage: min_wage,
        max_terminal_wage: max_wage,
        mean_steps_to_converge: mean_steps,
        converged_runs,
        trajectories,
    })
}
