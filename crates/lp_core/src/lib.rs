//! # lp_core - Deterministic Season Projection Engine
//!
//! Turns a point-estimate team strength model into a distribution over
//! final league standings by simulating the remaining fixtures of a season
//! many times over.
//!
//! ## Features
//! - 100% deterministic projection (same seed = same rows)
//! - Round-robin schedules with already-played results injected
//! - Trials run in parallel with per-trial seed streams
//!
//! Model fitting, odds acquisition and persistence live outside this crate;
//! it consumes strengths and advantage intercepts and produces tidy
//! per-trial rows.

pub mod engine;
pub mod error;
pub mod models;

// Re-export the main driver API
pub use engine::driver::{simulate_seasons, ProjectionPlan};
pub use engine::probability::{
    logistic, match_probabilities, sample_outcome, OutcomeProbabilities, PROB_TOLERANCE,
};
pub use engine::schedule::build_schedule;
pub use engine::season::simulate_season_once;
pub use error::{ProjectionError, Result};

// Re-export data types
pub use models::{
    AdvantageParams, Fixture, Outcome, PlayedFixtures, SimulationRow, Strengths, TeamRecord,
};
