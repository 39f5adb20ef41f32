//! Wage-Market Monte Carlo Simulation Engine
//!
//! Models how an initial wage expectation evolves under a labor-market
//! competition parameter, repeated across independent stochastic trials,
//! and reduces the trials into an aggregate report for the embedding layer.
//! The engine is a pure synchronous computation: validated parameters in,
//! structured report out, nothing persisted between calls.
//!
//! # Modules
//! - `model` — Fixed constants of the wage-adjustment process
//! - `rng` — Per-trial deterministic RNG streams
//! - `generator` — Single-trial wage trajectory generator
//! - `runner` — Monte Carlo runner over independent trials
//! - `aggregate` — Terminal-wage statistics and report assembly
//! - `export` — Report JSON export

pub mod model;
pub mod rng;
pub mod generator;
pub mod runner;
pub mod aggregate;
pub mod export;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
