//! Season projection engine
//!
//! Layered bottom-up:
//! - `probability` — stateless outcome model and categorical sampling
//! - `schedule` — round-robin fixture enumeration
//! - `season` — one full pass over a schedule
//! - `driver` — the multi-trial Monte Carlo loop

pub mod driver;
pub mod probability;
pub mod schedule;
pub mod season;
