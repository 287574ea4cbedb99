//! # league_core - Deterministic League Statistics Engine
//!
//! Turns a season of match results into league statistics.
//!
//! ## Features
//! - Team registry resolving names to stable identities
//! - Single-pass per-team aggregation (sequential or parallel, same result)
//! - Leaders by goals, home goals, away goals and goal difference
//! - Averages table and standings table with explicit tie-breaks
//!
//! The crate does no I/O. Parsing input and rendering output are left to
//! the caller (see the `league_cli` crate).

pub mod error;
pub mod models;
pub mod registry;
pub mod report;
pub mod stats;

pub use error::{Result, StatsError};
pub use models::{MatchOutcome, MatchRecord, Team, TeamHandle, TeamId};
pub use registry::{SharedTeamRegistry, TeamRegistry};
pub use report::LeagueReport;
pub use stats::{
    aggregate, aggregate_parallel, best_goal_ratio, most_away_goals, most_goals, most_home_goals,
    standings, team_averages, StandingsRow, TeamAggregate, TeamAggregates, TeamAverageRow,
    TeamMetric,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_is_deterministic() {
        let rows = [
            (1, "Manchester United", "Tottenham Hotspur", 1, 0),
            (1, "Arsenal", "Chelsea", 2, 2),
            (2, "Chelsea", "Manchester United", 0, 1),
            (2, "Tottenham Hotspur", "Arsenal", 3, 1),
        ];

        let run = || {
            let mut registry = TeamRegistry::new();
            let matches: Vec<MatchRecord> = rows
                .iter()
                .map(|&(round, home, away, hg, ag)| {
                    MatchRecord::new(round, registry.resolve(home), registry.resolve(away), hg, ag)
                })
                .collect();
            LeagueReport::build(&aggregate(&matches)).expect("non-empty season")
        };

        let first = run();
        let second = run();
        assert_eq!(first, second, "Same input should produce same report");
        assert_eq!(first.standings[0].team, "Manchester United");
        assert_eq!(first.standings[0].points, 6);
    }
}
