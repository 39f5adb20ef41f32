//! Single-trial wage trajectory generator
//!
//! Iterates the pull/noise wage-adjustment process for one
//! (competitiveness, initial wage) pair until convergence or the step
//! limit. All wage arithmetic is Decimal; stochastic draws happen in f64
//! and cross into Decimal at one guarded boundary.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;
use types::errors::SimulationError;
use types::ids::RunId;
use types::params::SimulationParameters;
use types::trajectory::{RunResult, WageTrajectory};

use crate::model::ModelConfig;
use crate::rng::TrialRng;

/// Wage precision (4 dp); sub-fraction dust below that is rounded away.
const WAGE_DP: u32 = 4;

/// Consecutive sub-epsilon deltas required to declare convergence, so a
/// single small noise draw cannot end a trajectory early.
const CONVERGENCE_WINDOW: u32 = 2;

/// Run one trial of the wage-adjustment process.
///
/// The wage starts at the initial expectation, is pulled toward the
/// competitive equilibrium in proportion to `competitiveness`, and picks up
/// uniform noise scaled by `1 - competitiveness`. At full competitiveness
/// the noise amplitude is exactly zero, so the trajectory is identical
/// under every seed. Stops once the step delta stays under epsilon for two
/// consecutive steps, or at the step limit.
///
/// Consumes one RNG draw per step taken.
pub fn generate(
    run: u32,
    params: &SimulationParameters,
    config: &ModelConfig,
    rng: &mut TrialRng,
) -> Result<RunResult, SimulationError> {
    let initial_wage = params.initial_wage();
    let competitiveness = params.competitiveness();

    let equilibrium = initial_wage * to_decimal(config.equilibrium_ratio, run, 0)?;
    let pull_rate = to_decimal(config.adjustment_rate * competitiveness, run, 0)?;
    let epsilon = initial_wage * to_decimal(config.epsilon_ratio, run, 0)?;
    let amplitude = config.noise_fraction * (1.0 - competitiveness);

    let mut trajectory = WageTrajectory::new(RunId::new(), initial_wage);
    let mut wage = initial_wage;
    let mut calm_steps: u32 = 0;
    let mut converged = false;

    for step in 1..=config.max_steps {
        let pull = (equilibrium - wage) * pull_rate;
        let noise = initial_wage * to_decimal(rng.noise(amplitude), run, step)?;

        let mut next = (wage + pull + noise).round_dp(WAGE_DP);
        if next < Decimal::ZERO {
            next = Decimal::ZERO;
        }

        trajectory.push(next);

        if (next - wage).abs() < epsilon {
            calm_steps += 1;
        } else {
            calm_steps = 0;
        }
        wage = next;

        if calm_steps >= CONVERGENCE_WINDOW {
            converged = true;
            break;
        }
    }

    debug!(
        run,
        steps = trajectory.steps_taken(),
        terminal = %wage,
        converged,
        "trajectory complete"
    );

    Ok(RunResult::from_trajectory(trajectory, converged))
}

/// Convert an f64 intermediate into wage arithmetic.
///
/// A non-finite intermediate fails the conversion and aborts the whole
/// request (fail-fast, no partial report).
fn to_decimal(value: f64, run: u32, step: u32) -> Result<Decimal, SimulationError> {
    Decimal::from_f64(value).ok_or(SimulationError::NumericInstability { run, step })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(competitiveness: f64, wage: i64, runs: u32) -> SimulationParameters {
        SimulationParameters::new(competitiveness, Decimal::from(wage), runs).unwrap()
    }

    fn run_one(competitiveness: f64, seed: u64) -> RunResult {
        let p = params(competitiveness, 3_000_000, 1);
        let config = ModelConfig::default();
        let mut rng = TrialRng::seeded(seed);
        generate(0, &p, &config, &mut rng).unwrap()
    }

    #[test]
    fn test_trajectory_starts_at_initial_wage() {
        let result = run_one(0.5, 42);
        let first = result.trajectory.points()[0];
        assert_eq!(first.step, 0);
        assert_eq!(first.wage, Decimal::from(3_000_000));
    }

    #[test]
    fn test_trajectory_length_bounded() {
        for seed in 0..20 {
            for &c in &[0.0, 0.25, 0.5, 0.75, 1.0] {
                let result = run_one(c, seed);
                let len = result.trajectory.len();
                assert!(len >= 1 && len <= 51, "length {} out of bounds", len);
            }
        }
    }

    #[test]
    fn test_wages_never_negative() {
        // Maximum noise against a small wage forces the clamp.
        let p = params(0.0, 10, 1);
        let config = ModelConfig {
            noise_fraction: 1.0,
            ..Default::default()
        };
        for seed in 0..50 {
            let mut rng = TrialRng::seeded(seed);
            let result = generate(0, &p, &config, &mut rng).unwrap();
            for point in result.trajectory.points() {
                assert!(point.wage >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_full_competitiveness_converges_early() {
        let result = run_one(1.0, 42);
        assert!(result.converged);
        assert!(result.steps < ModelConfig::default().max_steps);
    }

    #[test]
    fn test_full_competitiveness_identical_across_seeds() {
        let a = run_one(1.0, 1);
        let b = run_one(1.0, 9999);
        assert_eq!(a.trajectory.points(), b.trajectory.points());
    }

    #[test]
    fn test_same_seed_reproduces_trajectory() {
        let a = run_one(0.3, 77);
        let b = run_one(0.3, 77);
        assert_eq!(a.trajectory.points(), b.trajectory.points());
        assert_eq!(a.terminal_wage, b.terminal_wage);
    }

    #[test]
    fn test_result_consistent_with_trajectory() {
        let result = run_one(0.5, 42);
        assert_eq!(result.terminal_wage, result.trajectory.terminal_wage());
        assert_eq!(result.steps, result.trajectory.steps_taken());
    }
}
