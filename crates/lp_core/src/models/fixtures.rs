use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Result of a single game, from the home side's perspective.
///
/// Serialized as `"H"` / `"D"` / `"A"`, the vocabulary used by the played
/// games table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "H")]
    HomeWin,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "A")]
    AwayWin,
}

impl Outcome {
    /// League points awarded as (home, away): 3 for a win, 1 each for a draw.
    pub fn points(self) -> (u32, u32) {
        match self {
            Outcome::HomeWin => (3, 0),
            Outcome::Draw => (1, 1),
            Outcome::AwayWin => (0, 3),
        }
    }
}

/// Recorded results for games already played, keyed by the exact ordered
/// (home, away) pair. A team's away fixture against the same opponent is a
/// distinct key; at most one result per ordered pair is honored (the last
/// one inserted wins).
#[derive(Debug, Clone, Default)]
pub struct PlayedFixtures {
    results: HashMap<(String, String), Outcome>,
}

impl PlayedFixtures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        home: impl Into<String>,
        away: impl Into<String>,
        outcome: Outcome,
    ) {
        self.results.insert((home.into(), away.into()), outcome);
    }

    /// Lookup by exact ordered pair.
    pub fn get(&self, home: &str, away: &str) -> Option<Outcome> {
        self.results
            .get(&(home.to_string(), away.to_string()))
            .copied()
    }

    /// Every team name referenced by a recorded result, with repeats.
    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.results
            .keys()
            .flat_map(|(home, away)| [home.as_str(), away.as_str()])
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// One scheduled game. `resolved` carries the recorded outcome when the
/// fixture was found in the played games table; `None` means the game is
/// still to be simulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub home: String,
    pub away: String,
    pub resolved: Option<Outcome>,
}

impl Fixture {
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_split() {
        assert_eq!(Outcome::HomeWin.points(), (3, 0));
        assert_eq!(Outcome::Draw.points(), (1, 1));
        assert_eq!(Outcome::AwayWin.points(), (0, 3));
    }

    #[test]
    fn ordered_pair_lookup() {
        let mut played = PlayedFixtures::new();
        played.insert("Arsenal", "Chelsea", Outcome::HomeWin);

        assert_eq!(played.get("Arsenal", "Chelsea"), Some(Outcome::HomeWin));
        // Reverse fixture is a distinct key
        assert_eq!(played.get("Chelsea", "Arsenal"), None);
    }

    #[test]
    fn last_insert_wins() {
        let mut played = PlayedFixtures::new();
        played.insert("A", "B", Outcome::HomeWin);
        played.insert("A", "B", Outcome::Draw);

        assert_eq!(played.len(), 1);
        assert_eq!(played.get("A", "B"), Some(Outcome::Draw));
    }

    #[test]
    fn outcome_codes_round_trip() {
        let json = serde_json::to_string(&Outcome::HomeWin).unwrap();
        assert_eq!(json, "\"H\"");
        let back: Outcome = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(back, Outcome::AwayWin);
    }
}
