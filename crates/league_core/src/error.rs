use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// No team was aggregated, so there is nothing to rank.
    #[error("Empty dataset: no matches have been aggregated")]
    EmptyDataset,

    /// An average was requested for a team without a single recorded match.
    #[error("No matches played by team: {team}")]
    NoMatchesPlayed { team: String },
}

pub type Result<T> = std::result::Result<T, StatsError>;
