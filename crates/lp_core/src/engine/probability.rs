//! Outcome probability model and game sampling
//!
//! All functions here are pure — they take scalars in and return
//! probabilities, so they unit test without a schedule or a driver.
//!
//! The model: with `d = home_strength - away_strength`,
//!
//! ```text
//! p_home = logistic(home_advantage + d)
//! p_away = logistic(away_advantage - d)
//! p_draw = 1 - (p_home + p_away)
//! ```
//!
//! The triple is a valid distribution whenever `p_home + p_away <= 1`. The
//! model does NOT clamp or renormalize when that precondition is violated by
//! extreme inputs — a negative `p_draw` is reported as a hard
//! `InvalidProbability` error by `OutcomeProbabilities::validate`, never
//! silently repaired, since repairing it would mask a defect in the fitted
//! parameters.

use rand::Rng;

use crate::error::{ProjectionError, Result};
use crate::models::{AdvantageParams, Outcome};

/// Tolerance for probability validation, both for negativity and for the
/// sum-to-one check.
pub const PROB_TOLERANCE: f64 = 1e-9;

/// `1 / (1 + exp(-x))`
#[inline]
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// A (home, draw, away) probability triple for one fixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeProbabilities {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl OutcomeProbabilities {
    /// True when every component is non-negative and the triple sums to 1,
    /// both within `PROB_TOLERANCE`.
    pub fn is_valid(&self) -> bool {
        let non_negative = self.home >= -PROB_TOLERANCE
            && self.draw >= -PROB_TOLERANCE
            && self.away >= -PROB_TOLERANCE;
        let sum = self.home + self.draw + self.away;
        non_negative && (sum - 1.0).abs() <= PROB_TOLERANCE
    }

    /// Validate the triple for the fixture it was computed for, so the error
    /// names the offending pairing.
    pub fn validate(&self, home_team: &str, away_team: &str) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ProjectionError::InvalidProbability {
                home: home_team.to_string(),
                away: away_team.to_string(),
                p_home: self.home,
                p_draw: self.draw,
                p_away: self.away,
            })
        }
    }
}

/// Compute the outcome probability triple for one fixture.
#[inline]
pub fn match_probabilities(
    home_strength: f64,
    away_strength: f64,
    params: AdvantageParams,
) -> OutcomeProbabilities {
    let diff = home_strength - away_strength;
    let home = logistic(params.home + diff);
    let away = logistic(params.away - diff);
    OutcomeProbabilities {
        home,
        draw: 1.0 - (home + away),
        away,
    }
}

/// Draw one game outcome from a probability triple.
///
/// The triple is validated first; an invalid one fails with
/// `InvalidProbability` naming the fixture, and consumes no randomness. A
/// successful draw consumes exactly one `f64` from the generator, so RNG
/// streams stay aligned regardless of which outcome is drawn.
#[inline]
pub fn sample_outcome<R: Rng + ?Sized>(
    probs: &OutcomeProbabilities,
    home_team: &str,
    away_team: &str,
    rng: &mut R,
) -> Result<Outcome> {
    probs.validate(home_team, away_team)?;

    let draw: f64 = rng.gen();
    let outcome = if draw < probs.home {
        Outcome::HomeWin
    } else if draw < probs.home + probs.draw {
        Outcome::Draw
    } else {
        Outcome::AwayWin
    };
    Ok(outcome)
}
