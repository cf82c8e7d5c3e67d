//! Monte Carlo driver
//!
//! Repeats the season simulation `n_sims` times and flattens the results
//! into one tidy table. Trials are embarrassingly parallel: the schedule,
//! strengths and advantage parameters are shared read-only, and every trial
//! derives its own ChaCha8 stream from the run seed and its 1-based trial
//! id, so output is identical regardless of thread count.
//!
//! All input defects (bad configuration, unknown teams, invalid probability
//! triples) are detected here, before any trial work starts.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

use fxhash::FxHasher;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::probability::match_probabilities;
use super::schedule::build_schedule;
use super::season::simulate_season_once;
use crate::error::{ProjectionError, Result};
use crate::models::{AdvantageParams, PlayedFixtures, SimulationRow, Strengths};

/// Run parameters for one projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionPlan {
    /// Number of independent trials.
    pub n_sims: u32,
    /// Round-robin repeat count (1 = one home-and-away season).
    pub cycles: u32,
    /// Run seed; every trial stream is derived from it.
    pub seed: u64,
}

impl ProjectionPlan {
    pub fn new(n_sims: u32, cycles: u32, seed: u64) -> Self {
        Self {
            n_sims,
            cycles,
            seed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_sims < 1 {
            return Err(ProjectionError::InvalidConfiguration(format!(
                "n_sims must be >= 1, got {}",
                self.n_sims
            )));
        }
        if self.cycles < 1 {
            return Err(ProjectionError::InvalidConfiguration(format!(
                "cycles must be >= 1, got {}",
                self.cycles
            )));
        }
        Ok(())
    }
}

/// Per-trial seed derivation.
///
/// FxHasher rather than `DefaultHasher`: the latter is not stable across
/// Rust versions, which would break replay of a recorded run seed.
fn trial_seed(run_seed: u64, sim_id: u32) -> u64 {
    let mut hasher = FxHasher::default();
    run_seed.hash(&mut hasher);
    sim_id.hash(&mut hasher);
    hasher.finish()
}

/// Simulate the remainder of the season `plan.n_sims` times.
///
/// Returns one `SimulationRow` per (team, trial), trials in order, `sim_id`
/// running 1..=n_sims. `progress`, when supplied, is invoked once per
/// completed trial with the completed-trial count; it is purely
/// observational and has no effect on the returned rows.
pub fn simulate_seasons(
    plan: &ProjectionPlan,
    strengths: &Strengths,
    played: &PlayedFixtures,
    params: AdvantageParams,
    progress: Option<&(dyn Fn(u32) + Sync)>,
) -> Result<Vec<SimulationRow>> {
    plan.validate()?;

    // Played fixtures may only reference teams we have strengths for.
    for team in played.teams() {
        if !strengths.contains_key(team) {
            return Err(ProjectionError::MissingStrength {
                team: team.to_string(),
            });
        }
    }

    let teams: BTreeSet<String> = strengths.keys().cloned().collect();
    let schedule = build_schedule(&teams, plan.cycles, played);

    // Validate every unresolved pairing's triple up front so a modeling
    // defect aborts before thousands of trials are wasted on it.
    for fixture in schedule.iter().filter(|f| !f.is_resolved()) {
        let probs = match_probabilities(
            strengths[&fixture.home],
            strengths[&fixture.away],
            params,
        );
        probs.validate(&fixture.home, &fixture.away)?;
    }

    info!(
        "projecting season: {} teams, {} fixtures ({} already played), {} trials, seed {}",
        teams.len(),
        schedule.len(),
        schedule.iter().filter(|f| f.is_resolved()).count(),
        plan.n_sims,
        plan.seed
    );

    let completed = AtomicUsize::new(0);
    let trials: Result<Vec<Vec<SimulationRow>>> = (1..=plan.n_sims)
        .into_par_iter()
        .map(|sim_id| {
            let mut rng = ChaCha8Rng::seed_from_u64(trial_seed(plan.seed, sim_id));
            let records = simulate_season_once(&schedule, strengths, params, &mut rng)?;

            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(observer) = progress {
                observer(done as u32);
            }

            Ok(records
                .into_iter()
                .map(|(team, record)| SimulationRow {
                    team,
                    points: record.points,
                    win: record.win,
                    draw: record.draw,
                    lose: record.lose,
                    sim_id,
                })
                .collect())
        })
        .collect();

    let rows: Vec<SimulationRow> = trials?.into_iter().flatten().collect();
    debug!("projection finished: {} rows", rows.len());
    Ok(rows)
}
