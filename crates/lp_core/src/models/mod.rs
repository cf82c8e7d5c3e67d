//! Data types crossing the engine boundary
//!
//! Inputs (strengths, advantage parameters, played fixtures) are read-only
//! for the whole run; accumulators (`TeamRecord`) live for one trial and are
//! flattened into `SimulationRow`s.

pub mod fixtures;
pub mod params;
pub mod standings;

pub use fixtures::{Fixture, Outcome, PlayedFixtures};
pub use params::{AdvantageParams, Strengths};
pub use standings::{SimulationRow, TeamRecord};
