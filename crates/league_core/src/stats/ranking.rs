//! Rankings over aggregated team counters
//!
//! Every function here is a pure read of [`TeamAggregates`] and fails with
//! [`StatsError::EmptyDataset`] when nothing was aggregated.
//!
//! Tie-break: when two teams are equal on every ordering key, the team whose
//! name sorts first (byte-wise ascending) is preferred. This holds for the
//! single leaders as well as for both tables.

use super::aggregate::{TeamAggregate, TeamAggregates};
use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::num::NonZeroU32;

/// A single team together with the value it leads on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMetric<T> {
    pub team: String,
    pub value: T,
}

/// Average goals per match for one team.
///
/// Home/away averages are `None` when the team has no home/away match. The
/// overall averages divide the total by all matches played; they are not
/// the mean of the home and away averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAverageRow {
    pub rank: u32,
    pub team: String,
    pub matches: u32,
    pub avg_goals_scored_home: Option<f64>,
    pub avg_goals_conceded_home: Option<f64>,
    pub avg_goals_scored_away: Option<f64>,
    pub avg_goals_conceded_away: Option<f64>,
    pub avg_goals_scored_total: f64,
    pub avg_goals_conceded_total: f64,
}

impl TeamAverageRow {
    /// Build an unranked row (`rank == 0`).
    ///
    /// Fails for an aggregate without matches instead of dividing by zero.
    pub fn from_aggregate(a: &TeamAggregate) -> Result<Self> {
        let played = a
            .played_nonzero()
            .ok_or_else(|| StatsError::NoMatchesPlayed { team: a.name().to_string() })?;

        Ok(Self {
            rank: 0,
            team: a.name().to_string(),
            matches: played.get(),
            avg_goals_scored_home: average(a.home_goals_scored, a.home_played),
            avg_goals_conceded_home: average(a.home_goals_conceded, a.home_played),
            avg_goals_scored_away: average(a.away_goals_scored, a.away_played),
            avg_goals_conceded_away: average(a.away_goals_conceded, a.away_played),
            avg_goals_scored_total: per_match(a.goals_for(), played),
            avg_goals_conceded_total: per_match(a.goals_against(), played),
        })
    }
}

/// One line of the league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub rank: u32,
    pub team: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingsRow {
    fn from_aggregate(a: &TeamAggregate) -> Self {
        Self {
            rank: 0,
            team: a.name().to_string(),
            played: a.played(),
            wins: a.wins,
            draws: a.draws(),
            losses: a.losses,
            goals_for: a.goals_for(),
            goals_against: a.goals_against(),
            goal_difference: a.goal_difference(),
            points: a.points(),
        }
    }
}

fn per_match(total: u64, played: NonZeroU32) -> f64 {
    total as f64 / f64::from(played.get())
}

fn average(total: u64, count: u32) -> Option<f64> {
    NonZeroU32::new(count).map(|n| per_match(total, n))
}

/// Team with the highest `metric`; equal values go to the smaller name.
fn leader_by<T, F>(aggregates: &TeamAggregates, metric: F) -> Result<TeamMetric<T>>
where
    T: Ord,
    F: Fn(&TeamAggregate) -> T,
{
    aggregates
        .iter()
        .max_by(|&a, &b| metric(a).cmp(&metric(b)).then_with(|| b.name().cmp(a.name())))
        .map(|a| TeamMetric { team: a.name().to_string(), value: metric(a) })
        .ok_or(StatsError::EmptyDataset)
}

/// Most goals scored overall (home + away).
pub fn most_goals(aggregates: &TeamAggregates) -> Result<TeamMetric<u64>> {
    leader_by(aggregates, TeamAggregate::goals_for)
}

pub fn most_home_goals(aggregates: &TeamAggregates) -> Result<TeamMetric<u64>> {
    leader_by(aggregates, |a| a.home_goals_scored)
}

pub fn most_away_goals(aggregates: &TeamAggregates) -> Result<TeamMetric<u64>> {
    leader_by(aggregates, |a| a.away_goals_scored)
}

/// Best "goal ratio", which is the goal difference (goals for minus goals
/// against), not a quotient.
pub fn best_goal_ratio(aggregates: &TeamAggregates) -> Result<TeamMetric<i64>> {
    leader_by(aggregates, TeamAggregate::goal_difference)
}

/// Per-team averages, ordered by overall goals scored per match, descending.
pub fn team_averages(aggregates: &TeamAggregates) -> Result<Vec<TeamAverageRow>> {
    if aggregates.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let mut rows = aggregates
        .iter()
        .map(TeamAverageRow::from_aggregate)
        .collect::<Result<Vec<_>>>()?;

    rows.sort_by(|a, b| {
        b.avg_goals_scored_total
            .total_cmp(&a.avg_goals_scored_total)
            .then_with(|| a.team.cmp(&b.team))
    });
    assign_ranks(&mut rows, |row, rank| row.rank = rank);
    Ok(rows)
}

fn standings_order(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| a.team.cmp(&b.team))
}

/// League table: points desc, then goal difference desc.
///
/// Ranks are positions 1..=N. Teams level on points and goal difference
/// still get distinct consecutive ranks (no shared places), ordered by name.
pub fn standings(aggregates: &TeamAggregates) -> Result<Vec<StandingsRow>> {
    if aggregates.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let mut rows: Vec<StandingsRow> = aggregates.iter().map(StandingsRow::from_aggregate).collect();
    rows.sort_by(standings_order);
    assign_ranks(&mut rows, |row, rank| row.rank = rank);
    Ok(rows)
}

fn assign_ranks<R>(rows: &mut [R], mut set: impl FnMut(&mut R, u32)) {
    for (idx, row) in rows.iter_mut().enumerate() {
        set(row, idx as u32 + 1);
    }
}
