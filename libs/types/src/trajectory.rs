//! Wage trajectories and per-run results
//!
//! A trajectory is the full wage path of one trial: step 0 carries the
//! initial wage, the last point carries the terminal wage. Trajectories are
//! append-only while the owning run is in flight and read-only afterward.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::RunId;

/// A single recorded point on a wage trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub step: u32,
    pub wage: Decimal,
}

/// The full wage path of one trial.
///
/// Always contains at least the step-0 point. Owned exclusively by the run
/// that produced it; the engine never shares a trajectory between trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageTrajectory {
    run_id: RunId,
    points: Vec<TrajectoryPoint>,
}

impl WageTrajectory {
    /// Start a trajectory at step 0 with the initial wage.
    pub fn new(run_id: RunId, initial_wage: Decimal) -> Self {
        Self {
            run_id,
            points: vec![TrajectoryPoint {
                step: 0,
                wage: initial_wage,
            }],
        }
    }

    /// Record the wage at the next step.
    pub fn push(&mut self, wage: Decimal) {
        let step = self.points.len() as u32;
        self.points.push(TrajectoryPoint { step, wage });
    }

    /// Identifier of the trial that owns this trajectory.
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// All recorded points in step order.
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Number of recorded points (steps taken + 1).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Wage at step 0.
    pub fn initial_wage(&self) -> Decimal {
        self.points.first().map(|p| p.wage).unwrap_or(Decimal::ZERO)
    }

    /// Wage at the final recorded step.
    pub fn terminal_wage(&self) -> Decimal {
        self.points.last().map(|p| p.wage).unwrap_or(Decimal::ZERO)
    }

    /// Number of adjustment steps taken after step 0.
    pub fn steps_taken(&self) -> u32 {
        (self.points.len() as u32).saturating_sub(1)
    }
}

/// Outcome of one independent trial.
///
/// Created by the runner when a trajectory finishes, consumed by the
/// aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub run_id: RunId,
    pub terminal_wage: Decimal,
    pub steps: u32,
    /// True when the run stopped on the convergence criterion rather than
    /// the step limit.
    pub converged: bool,
    pub min_wage: Decimal,
    pub max_wage: Decimal,
    pub trajectory: WageTrajectory,
}

impl RunResult {
    /// Build a result from a finished trajectory.
    pub fn from_trajectory(trajectory: WageTrajectory, converged: bool) -> Self {
        let mut min_wage = trajectory.initial_wage();
        let mut max_wage = min_wage;
        for point in trajectory.points() {
            min_wage = min_wage.min(point.wage);
            max_wage = max_wage.max(point.wage);
        }
        Self {
            run_id: trajectory.run_id(),
            terminal_wage: trajectory.terminal_wage(),
            steps: trajectory.steps_taken(),
            converged,
            min_wage,
            max_wage,
            trajectory,
        }
    }
}
