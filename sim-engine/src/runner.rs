//! Monte Carlo runner over independent trials
//!
//! Executes the trajectory generator once per requested run, each trial on
//! its own derived RNG stream, then reduces the results into a report. The
//! runner holds no state between calls beyond its master seed and model
//! constants, so the same runner value can serve any number of requests.

use std::thread;

use rand::Rng;
use tracing::{error, info};
use types::errors::SimulationError;
use types::ids::SimulationId;
use types::params::SimulationParameters;
use types::report::SimulationReport;
use types::trajectory::RunResult;

use crate::aggregate;
use crate::generator;
use crate::model::ModelConfig;
use crate::rng::{trial_seed, TrialRng};

/// Monte Carlo runner: `runs` independent trials, one report.
#[derive(Debug, Clone)]
pub struct MonteCarloRunner {
    config: ModelConfig,
    master_seed: u64,
}

impl MonteCarloRunner {
    /// Free-running runner: master seed drawn from OS entropy.
    pub fn new() -> Self {
        Self::seeded(rand::thread_rng().gen(), ModelConfig::default())
    }

    /// Reproducible runner: every trial derives its stream from this seed.
    pub fn with_seed(master_seed: u64) -> Self {
        Self::seeded(master_seed, ModelConfig::default())
    }

    /// Free-running runner with custom model constants.
    pub fn with_config(config: ModelConfig) -> Self {
        Self::seeded(rand::thread_rng().gen(), config)
    }

    /// Fully explicit construction.
    pub fn seeded(master_seed: u64, config: ModelConfig) -> Self {
        Self {
            config,
            master_seed,
        }
    }

    /// The master seed this runner derives per-trial streams from.
    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Run all trials sequentially and aggregate them into a report.
    ///
    /// Fails fast: the first trial error aborts the request and no partial
    /// report is returned.
    pub fn run(
        &self,
        params: &SimulationParameters,
    ) -> Result<SimulationReport, SimulationError> {
        self.check_request(params)?;

        let mut results = Vec::with_capacity(params.runs() as usize);
        for trial in 0..params.runs() {
            match self.run_trial(trial, params) {
                Ok(result) => results.push(result),
                Err(err) => {
                    error!(trial, %err, "trial failed, aborting request");
                    return Err(err);
                }
            }
        }
        self.finish(results)
    }

    /// Run all trials with one scoped thread per trial and aggregate.
    ///
    /// Trials share nothing mutable (each owns its RNG stream and its
    /// trajectory) and results are collected in trial order, so the report
    /// is invariant to scheduling. The parameter domain caps the thread
    /// count at 10. When several trials fail, the error of the
    /// lowest-numbered trial is reported.
    pub fn run_parallel(
        &self,
        params: &SimulationParameters,
    ) -> Result<SimulationReport, SimulationError> {
        self.check_request(params)?;

        let outcomes: Vec<Result<RunResult, SimulationError>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..params.runs())
                .map(|trial| scope.spawn(move || self.run_trial(trial, params)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("trial thread panicked"))
                .collect()
        });

        let mut results = Vec::with_capacity(outcomes.len());
        for (trial, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(result) => results.push(result),
                Err(err) => {
                    error!(trial, %err, "trial failed, aborting request");
                    return Err(err);
                }
            }
        }
        self.finish(results)
    }

    /// Defensive domain check before any simulation work.
    fn check_request(&self, params: &SimulationParameters) -> Result<(), SimulationError> {
        params.validate()?;
        self.config.validate()?;
        Ok(())
    }

    fn run_trial(
        &self,
        trial: u32,
        params: &SimulationParameters,
    ) -> Result<RunResult, SimulationError> {
        let mut rng = TrialRng::seeded(trial_seed(self.master_seed, trial));
        generator::generate(trial, params, &self.config, &mut rng)
    }

    fn finish(&self, results: Vec<RunResult>) -> Result<SimulationReport, SimulationError> {
        let report = aggregate::aggregate(SimulationId::new(), results)?;
        info!("{}", report.summary());
        Ok(report)
    }
}

impl Default for MonteCarloRunner {
    fn default() -> Self {
        Self::new()
    }
}
