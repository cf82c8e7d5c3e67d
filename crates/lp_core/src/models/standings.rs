use serde::Serialize;

use super::fixtures::Outcome;

/// Per-team accumulator for one simulated season.
///
/// `win + draw + lose` always equals the number of games the team has been
/// credited with so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamRecord {
    pub points: u32,
    pub win: u32,
    pub draw: u32,
    pub lose: u32,
}

impl TeamRecord {
    /// Credit this team with a game it played at home.
    pub fn apply_home(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HomeWin => {
                self.points += 3;
                self.win += 1;
            }
            Outcome::Draw => {
                self.points += 1;
                self.draw += 1;
            }
            Outcome::AwayWin => self.lose += 1,
        }
    }

    /// Credit this team with a game it played away.
    pub fn apply_away(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HomeWin => self.lose += 1,
            Outcome::Draw => {
                self.points += 1;
                self.draw += 1;
            }
            Outcome::AwayWin => {
                self.points += 3;
                self.win += 1;
            }
        }
    }

    pub fn games(&self) -> u32 {
        self.win + self.draw + self.lose
    }
}

/// One (team, trial) observation — the atomic unit of driver output.
///
/// Field order matches the tidy table the CLI writes:
/// `team,points,win,draw,lose,sim_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationRow {
    pub team: String,
    pub points: u32,
    pub win: u32,
    pub draw: u32,
    pub lose: u32,
    pub sim_id: u32,
}
