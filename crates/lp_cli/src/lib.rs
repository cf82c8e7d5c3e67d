//! Projection I/O
//!
//! CSV of played games + JSON of model estimates in, tidy CSV of simulated
//! seasons out. Everything here is a thin shell around `lp_core`; no
//! simulation logic lives in this crate.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use lp_core::{Outcome, PlayedFixtures, SimulationRow, Strengths};

/// Point estimates handed over by the external fitting step.
///
/// ```json
/// {
///   "strengths": { "Arsenal": 0.41, "Chelsea": 0.12 },
///   "home_advantage": -0.18,
///   "away_advantage": -0.65
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEstimates {
    pub strengths: Strengths,
    pub home_advantage: f64,
    pub away_advantage: f64,
}

/// One row of the played games CSV: `home_team,away_team,result` with the
/// result coded H/D/A.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GameRow {
    home_team: String,
    away_team: String,
    result: Outcome,
}

/// Load model estimates from a JSON file.
pub fn load_estimates(path: &Path) -> Result<ModelEstimates> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading estimates file {}", path.display()))?;
    let estimates: ModelEstimates = serde_json::from_str(&raw)
        .with_context(|| format!("parsing estimates file {}", path.display()))?;
    Ok(estimates)
}

/// Load already-played games from a CSV file.
pub fn load_played_games(path: &Path) -> Result<PlayedFixtures> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening games file {}", path.display()))?;

    let mut played = PlayedFixtures::new();
    for record in reader.deserialize() {
        let row: GameRow =
            record.with_context(|| format!("parsing games file {}", path.display()))?;
        played.insert(row.home_team, row.away_team, row.result);
    }
    Ok(played)
}

/// Coarse progress ticker, roughly one report per percent of the run.
///
/// Trial completions arrive out of order when the driver runs trials in
/// parallel; the ticker only ever advances, so a late low count is dropped
/// rather than re-printed over a higher one.
#[derive(Debug)]
pub struct ProgressTicker {
    total: u32,
    step: u32,
    high_water: AtomicU32,
}

impl ProgressTicker {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            step: (total / 100).max(1),
            high_water: AtomicU32::new(0),
        }
    }

    /// Returns the count to display when `done` advances the ticker past a
    /// reporting step, `None` otherwise.
    pub fn advance(&self, done: u32) -> Option<u32> {
        if done % self.step != 0 && done != self.total {
            return None;
        }
        let previous = self.high_water.fetch_max(done, Ordering::Relaxed);
        (done > previous).then_some(done)
    }
}

/// Write the simulated seasons to a CSV file, one row per (team, trial).
pub fn write_rows(path: &Path, rows: &[SimulationRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn estimates_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "strengths": {{ "A": 0.5, "B": -0.5 }},
                "home_advantage": -0.2,
                "away_advantage": -0.4
            }}"#
        )
        .unwrap();

        let estimates = load_estimates(file.path()).unwrap();
        assert_eq!(estimates.strengths.len(), 2);
        assert_eq!(estimates.strengths["A"], 0.5);
        assert_eq!(estimates.home_advantage, -0.2);
    }

    #[test]
    fn games_csv_parses_result_codes() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "home_team,away_team,result").unwrap();
        writeln!(file, "Arsenal,Chelsea,H").unwrap();
        writeln!(file, "Chelsea,Arsenal,D").unwrap();

        let played = load_played_games(file.path()).unwrap();
        assert_eq!(played.len(), 2);
        assert_eq!(played.get("Arsenal", "Chelsea"), Some(Outcome::HomeWin));
        assert_eq!(played.get("Chelsea", "Arsenal"), Some(Outcome::Draw));
    }

    #[test]
    fn rows_csv_has_tidy_header() {
        let file = NamedTempFile::new().unwrap();
        let rows = vec![SimulationRow {
            team: "A".to_string(),
            points: 3,
            win: 1,
            draw: 0,
            lose: 1,
            sim_id: 1,
        }];

        write_rows(file.path(), &rows).unwrap();

        let written = fs::read_to_string(file.path()).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("team,points,win,draw,lose,sim_id"));
        assert_eq!(lines.next(), Some("A,3,1,0,1,1"));
    }

    #[test]
    fn ticker_never_regresses_on_out_of_order_completions() {
        let ticker = ProgressTicker::new(100); // step = 1
        assert_eq!(ticker.advance(5), Some(5));
        // Stragglers from other threads arrive late and are dropped.
        assert_eq!(ticker.advance(3), None);
        assert_eq!(ticker.advance(5), None);
        assert_eq!(ticker.advance(6), Some(6));
    }

    #[test]
    fn ticker_reports_on_steps_and_at_the_end() {
        let ticker = ProgressTicker::new(1000); // step = 10
        assert_eq!(ticker.advance(7), None);
        assert_eq!(ticker.advance(10), Some(10));
        assert_eq!(ticker.advance(15), None);
        assert_eq!(ticker.advance(1000), Some(1000));
    }

    #[test]
    fn missing_estimates_file_names_the_path() {
        let err = load_estimates(Path::new("/nonexistent/estimates.json")).unwrap_err();
        assert!(err.to_string().contains("estimates.json"));
    }
}
