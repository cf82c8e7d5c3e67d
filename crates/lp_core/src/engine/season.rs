//! Single-season resolution
//!
//! Walks one schedule front to back, resolving each fixture either from its
//! recorded result (no randomness consumed) or by sampling the probability
//! model, and accumulates points/win/draw/lose per team.

use std::collections::BTreeMap;

use rand::Rng;

use super::probability::{match_probabilities, sample_outcome};
use crate::error::{ProjectionError, Result};
use crate::models::{AdvantageParams, Fixture, Strengths, TeamRecord};

/// Simulate one complete season over `schedule`.
///
/// Every team in `strengths` gets a record, zeroed at the start; randomness
/// is drawn only for unresolved fixtures, in schedule order, one draw per
/// fixture. Fails with `MissingStrength` if the schedule references a team
/// absent from `strengths`.
pub fn simulate_season_once<R: Rng + ?Sized>(
    schedule: &[Fixture],
    strengths: &Strengths,
    params: AdvantageParams,
    rng: &mut R,
) -> Result<BTreeMap<String, TeamRecord>> {
    let mut records: BTreeMap<String, TeamRecord> = strengths
        .keys()
        .map(|team| (team.clone(), TeamRecord::default()))
        .collect();

    for fixture in schedule {
        let outcome = match fixture.resolved {
            Some(recorded) => recorded,
            None => {
                let home_strength = strength_of(strengths, &fixture.home)?;
                let away_strength = strength_of(strengths, &fixture.away)?;
                let probs = match_probabilities(home_strength, away_strength, params);
                sample_outcome(&probs, &fixture.home, &fixture.away, rng)?
            }
        };

        records
            .get_mut(&fixture.home)
            .ok_or_else(|| missing(&fixture.home))?
            .apply_home(outcome);
        records
            .get_mut(&fixture.away)
            .ok_or_else(|| missing(&fixture.away))?
            .apply_away(outcome);
    }

    Ok(records)
}

fn strength_of(strengths: &Strengths, team: &str) -> Result<f64> {
    strengths.get(team).copied().ok_or_else(|| missing(team))
}

fn missing(team: &str) -> ProjectionError {
    ProjectionError::MissingStrength {
        team: team.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::schedule::build_schedule;
    use crate::models::{Outcome, PlayedFixtures};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeSet;

    fn strengths(entries: &[(&str, f64)]) -> Strengths {
        entries
            .iter()
            .map(|(name, s)| (name.to_string(), *s))
            .collect()
    }

    fn params() -> AdvantageParams {
        AdvantageParams::new(-0.2, -0.4)
    }

    #[test]
    fn games_played_matches_schedule_participation() {
        let strengths = strengths(&[("A", 0.5), ("B", 0.0), ("C", -0.5), ("D", 0.1)]);
        let teams: BTreeSet<String> = strengths.keys().cloned().collect();
        let schedule = build_schedule(&teams, 1, &PlayedFixtures::new());
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let records = simulate_season_once(&schedule, &strengths, params(), &mut rng).unwrap();

        assert_eq!(records.len(), 4);
        for record in records.values() {
            assert_eq!(record.games(), 6);
        }
        // Points conservation: every game hands out 2 (draw) or 3 points.
        let total_points: u32 = records.values().map(|r| r.points).sum();
        assert!((24..=36).contains(&total_points));
    }

    #[test]
    fn fully_played_season_ignores_rng() {
        let strengths = strengths(&[("A", 0.0), ("B", 0.0)]);
        let teams: BTreeSet<String> = strengths.keys().cloned().collect();
        let mut played = PlayedFixtures::new();
        played.insert("A", "B", Outcome::HomeWin);
        played.insert("B", "A", Outcome::Draw);
        let schedule = build_schedule(&teams, 1, &played);

        // Two different RNG states must not change anything.
        let mut rng_a = ChaCha8Rng::seed_from_u64(1);
        let mut rng_b = ChaCha8Rng::seed_from_u64(2);
        let records_a =
            simulate_season_once(&schedule, &strengths, params(), &mut rng_a).unwrap();
        let records_b =
            simulate_season_once(&schedule, &strengths, params(), &mut rng_b).unwrap();

        assert_eq!(records_a, records_b);
        assert_eq!(records_a["A"].points, 4); // home win + away draw
        assert_eq!(records_a["B"].points, 1);
        // The RNG streams were never touched.
        assert_eq!(rng_a.gen::<u64>(), ChaCha8Rng::seed_from_u64(1).gen::<u64>());
    }

    #[test]
    fn schedule_with_unknown_team_fails() {
        let strengths = strengths(&[("A", 0.0)]);
        let schedule = vec![Fixture {
            home: "A".to_string(),
            away: "Ghost".to_string(),
            resolved: None,
        }];
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let err = simulate_season_once(&schedule, &strengths, params(), &mut rng).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::MissingStrength {
                team: "Ghost".to_string()
            }
        );
    }

    #[test]
    fn invalid_triple_aborts_the_season() {
        let strengths = strengths(&[("A", 0.0), ("B", 0.0)]);
        let teams: BTreeSet<String> = strengths.keys().cloned().collect();
        let schedule = build_schedule(&teams, 1, &PlayedFixtures::new());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let bad = AdvantageParams::new(2.0, 2.0);

        let err = simulate_season_once(&schedule, &strengths, bad, &mut rng).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidProbability { .. }));
    }
}
