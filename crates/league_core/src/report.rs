//! League report
//!
//! All six derivations of one aggregation pass, bundled for the
//! presentation and export layers.

use crate::error::Result;
use crate::stats::{
    best_goal_ratio, most_away_goals, most_goals, most_home_goals, standings, team_averages,
    StandingsRow, TeamAggregates, TeamAverageRow, TeamMetric,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueReport {
    pub teams: u32,
    pub matches: u32,
    pub most_goals: TeamMetric<u64>,
    pub most_home_goals: TeamMetric<u64>,
    pub most_away_goals: TeamMetric<u64>,
    /// Goal difference of the best team (kept under its historical name).
    pub best_goal_ratio: TeamMetric<i64>,
    pub averages: Vec<TeamAverageRow>,
    pub standings: Vec<StandingsRow>,
}

impl LeagueReport {
    pub fn build(aggregates: &TeamAggregates) -> Result<Self> {
        let report = Self {
            teams: aggregates.len() as u32,
            matches: aggregates.match_count(),
            most_goals: most_goals(aggregates)?,
            most_home_goals: most_home_goals(aggregates)?,
            most_away_goals: most_away_goals(aggregates)?,
            best_goal_ratio: best_goal_ratio(aggregates)?,
            averages: team_averages(aggregates)?,
            standings: standings(aggregates)?,
        };
        info!(teams = report.teams, matches = report.matches, "league report built");
        Ok(report)
    }

    /// Pretty JSON for the export layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn leader(&self) -> Option<&StandingsRow> {
        self.standings.first()
    }
}
