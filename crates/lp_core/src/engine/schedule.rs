//! Round-robin fixture generation
//!
//! One cycle enumerates every ordered (home, away) pair over the team set,
//! so each team plays every opponent twice per cycle — once hosting, once
//! visiting. With `cycles = 1` that is the usual home-and-away league
//! season; `cycles = 2` doubles every pairing.
//!
//! Enumeration follows sorted team order and is therefore identical for
//! every trial of a run (and across runs with the same inputs).

use std::collections::BTreeSet;

use crate::models::{Fixture, PlayedFixtures};

/// Build the full schedule for one season.
///
/// Fixtures found in `played` are marked resolved and carry the recorded
/// outcome into every trial; the rest are left for the simulator. Self
/// fixtures are never produced.
pub fn build_schedule(
    teams: &BTreeSet<String>,
    cycles: u32,
    played: &PlayedFixtures,
) -> Vec<Fixture> {
    let n = teams.len();
    let mut schedule = Vec::with_capacity(cycles as usize * n.saturating_sub(1) * n);

    for _ in 0..cycles {
        for home in teams {
            for away in teams {
                if home == away {
                    continue;
                }
                schedule.push(Fixture {
                    home: home.clone(),
                    away: away.clone(),
                    resolved: played.get(home, away),
                });
            }
        }
    }

    schedule
}
