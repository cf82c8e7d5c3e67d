use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Latent strength per team, keyed by team name.
///
/// A `BTreeMap` so that iteration order (and therefore schedule order) is
/// stable across runs — a requirement for seeded reproducibility.
pub type Strengths = BTreeMap<String, f64>;

/// Home/away advantage intercepts, constant across all fixtures in a run.
///
/// Representative point estimates handed over by the external fitting step
/// (e.g. posterior medians). `home` is added to the strength differential
/// for the home win probability, `away` is subtracted from it for the away
/// win probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvantageParams {
    pub home: f64,
    pub away: f64,
}

impl AdvantageParams {
    pub fn new(home: f64, away: f64) -> Self {
        Self { home, away }
    }
}
