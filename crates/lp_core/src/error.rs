use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("no strength entry for team: {team}")]
    MissingStrength { team: String },

    #[error(
        "invalid probability triple for {home} vs {away}: \
         H={p_home:.6} D={p_draw:.6} A={p_away:.6}"
    )]
    InvalidProbability {
        home: String,
        away: String,
        p_home: f64,
        p_draw: f64,
        p_away: f64,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
