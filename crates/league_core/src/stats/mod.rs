pub mod aggregate;
pub mod ranking;

pub use aggregate::{aggregate, aggregate_parallel, TeamAggregate, TeamAggregates};
pub use ranking::{
    best_goal_ratio, most_away_goals, most_goals, most_home_goals, standings, team_averages,
    StandingsRow, TeamAverageRow, TeamMetric,
};
