//! Per-team aggregation
//!
//! Folds match records into [`TeamAggregate`] counters. Every pass starts
//! from an empty mapping; nothing is updated incrementally across calls.

use crate::models::{MatchOutcome, MatchRecord, TeamHandle, TeamId};
use rayon::prelude::*;
use std::collections::btree_map::{self, BTreeMap};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

/// Counters for one team over all folded matches.
///
/// Draws are not stored; they follow from `played - wins - losses`.
/// Goal sums are `u64`: each match contributes at most `u32::MAX` per side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamAggregate {
    pub team: TeamHandle,
    pub home_played: u32,
    pub away_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub home_goals_scored: u64,
    pub home_goals_conceded: u64,
    pub away_goals_scored: u64,
    pub away_goals_conceded: u64,
}

impl TeamAggregate {
    pub fn new(team: TeamHandle) -> Self {
        Self {
            team,
            home_played: 0,
            away_played: 0,
            wins: 0,
            losses: 0,
            home_goals_scored: 0,
            home_goals_conceded: 0,
            away_goals_scored: 0,
            away_goals_conceded: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.team.name
    }

    pub fn played(&self) -> u32 {
        self.home_played + self.away_played
    }

    /// `played` as a divisor; `None` only for a team with no matches.
    pub fn played_nonzero(&self) -> Option<NonZeroU32> {
        NonZeroU32::new(self.played())
    }

    pub fn draws(&self) -> u32 {
        self.played() - self.wins - self.losses
    }

    pub fn goals_for(&self) -> u64 {
        self.home_goals_scored + self.away_goals_scored
    }

    pub fn goals_against(&self) -> u64 {
        self.home_goals_conceded + self.away_goals_conceded
    }

    pub fn goal_difference(&self) -> i64 {
        // both sums stay below 2^63 for any season that fits in memory
        self.goals_for() as i64 - self.goals_against() as i64
    }

    /// 3 points per win, 1 per draw.
    pub fn points(&self) -> u32 {
        3 * self.wins + self.draws()
    }

    fn record_home(&mut self, m: &MatchRecord) {
        self.home_played += 1;
        self.home_goals_scored += u64::from(m.home_goals);
        self.home_goals_conceded += u64::from(m.away_goals);
        self.record_outcome(m.home_outcome());
    }

    fn record_away(&mut self, m: &MatchRecord) {
        self.away_played += 1;
        self.away_goals_scored += u64::from(m.away_goals);
        self.away_goals_conceded += u64::from(m.home_goals);
        self.record_outcome(m.away_outcome());
    }

    fn record_outcome(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Loss => self.losses += 1,
            MatchOutcome::Draw => {}
        }
    }

    /// Add another partial aggregate of the same team.
    fn absorb(&mut self, other: &TeamAggregate) {
        self.home_played += other.home_played;
        self.away_played += other.away_played;
        self.wins += other.wins;
        self.losses += other.losses;
        self.home_goals_scored += other.home_goals_scored;
        self.home_goals_conceded += other.home_goals_conceded;
        self.away_goals_scored += other.away_goals_scored;
        self.away_goals_conceded += other.away_goals_conceded;
    }
}

/// Mapping team → aggregate, keyed and iterated by team id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamAggregates {
    by_team: BTreeMap<TeamId, TeamAggregate>,
}

impl TeamAggregates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one match into both sides.
    pub fn record(&mut self, m: &MatchRecord) {
        self.entry(&m.home).record_home(m);
        self.entry(&m.away).record_away(m);
    }

    /// Ids are only unique within one registry; all records folded into
    /// one mapping must come from the same registry.
    fn entry(&mut self, team: &TeamHandle) -> &mut TeamAggregate {
        let slot = self
            .by_team
            .entry(team.id)
            .or_insert_with(|| TeamAggregate::new(Arc::clone(team)));
        debug_assert_eq!(slot.name(), team.name, "team id {} resolved to two names", team.id);
        slot
    }

    /// Combine two partial folds. Per-team sums, so order does not matter.
    pub fn merge(mut self, other: TeamAggregates) -> TeamAggregates {
        for (id, partial) in other.by_team {
            match self.by_team.entry(id) {
                btree_map::Entry::Occupied(mut slot) => {
                    debug_assert_eq!(
                        slot.get().name(),
                        partial.name(),
                        "team id {id} resolved to two names"
                    );
                    slot.get_mut().absorb(&partial)
                }
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(partial);
                }
            }
        }
        self
    }

    pub fn get(&self, id: TeamId) -> Option<&TeamAggregate> {
        self.by_team.get(&id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&TeamAggregate> {
        self.by_team.values().find(|a| a.name() == name)
    }

    pub fn len(&self) -> usize {
        self.by_team.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_team.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamAggregate> {
        self.by_team.values()
    }

    /// Number of folded matches (each match has exactly one home side).
    pub fn match_count(&self) -> u32 {
        self.by_team.values().map(|a| a.home_played).sum()
    }
}

/// Fold all matches into per-team aggregates in a single pass.
///
/// Teams that appear in no match are absent from the result.
pub fn aggregate(matches: &[MatchRecord]) -> TeamAggregates {
    let mut aggregates = TeamAggregates::new();
    for m in matches {
        aggregates.record(m);
    }
    debug!(matches = matches.len(), teams = aggregates.len(), "aggregated matches");
    aggregates
}

/// Same result as [`aggregate`], folded in parallel partitions and merged.
pub fn aggregate_parallel(matches: &[MatchRecord]) -> TeamAggregates {
    let aggregates = matches
        .par_iter()
        .fold(TeamAggregates::new, |mut acc, m| {
            acc.record(m);
            acc
        })
        .reduce(TeamAggregates::new, TeamAggregates::merge);
    debug!(matches = matches.len(), teams = aggregates.len(), "aggregated matches in parallel");
    aggregates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TeamRegistry;
    use std::collections::BTreeSet;

    fn season(
        registry: &mut TeamRegistry,
        rows: &[(u32, &str, &str, u32, u32)],
    ) -> Vec<MatchRecord> {
        rows.iter()
            .map(|&(round, home, away, hg, ag)| {
                MatchRecord::new(round, registry.resolve(home), registry.resolve(away), hg, ag)
            })
            .collect()
    }

    #[test]
    fn single_home_win() {
        let mut registry = TeamRegistry::new();
        let matches = season(&mut registry, &[(1, "A", "B", 1, 0)]);
        let aggregates = aggregate(&matches);

        let a = aggregates.get_by_name("A").expect("A aggregated");
        assert_eq!(a.played(), 1);
        assert_eq!(a.wins, 1);
        assert_eq!(a.goals_for(), 1);
        assert_eq!(a.goals_against(), 0);
        assert_eq!(a.points(), 3);

        let b = aggregates.get_by_name("B").expect("B aggregated");
        assert_eq!(b.played(), 1);
        assert_eq!(b.losses, 1);
        assert_eq!(b.goals_for(), 0);
        assert_eq!(b.goals_against(), 1);
        assert_eq!(b.points(), 0);
    }

    #[test]
    fn draw_gives_both_sides_a_point() {
        let mut registry = TeamRegistry::new();
        let matches = season(&mut registry, &[(1, "A", "B", 2, 2)]);
        let aggregates = aggregate(&matches);

        for name in ["A", "B"] {
            let t = aggregates.get_by_name(name).expect("team aggregated");
            assert_eq!(t.draws(), 1);
            assert_eq!(t.points(), 1);
            assert_eq!(t.goal_difference(), 0);
        }
    }

    #[test]
    fn home_and_away_goals_are_split() {
        let mut registry = TeamRegistry::new();
        let matches = season(
            &mut registry,
            &[(1, "A", "B", 3, 1), (2, "B", "A", 2, 0), (3, "A", "C", 1, 1)],
        );
        let aggregates = aggregate(&matches);
        let a = aggregates.get_by_name("A").expect("A aggregated");

        assert_eq!(a.home_played, 2);
        assert_eq!(a.away_played, 1);
        assert_eq!(a.home_goals_scored, 4);
        assert_eq!(a.home_goals_conceded, 2);
        assert_eq!(a.away_goals_scored, 0);
        assert_eq!(a.away_goals_conceded, 2);
        assert_eq!(a.goals_for(), a.home_goals_scored + a.away_goals_scored);
        assert_eq!(a.goals_against(), a.home_goals_conceded + a.away_goals_conceded);
        assert_eq!((a.wins, a.draws(), a.losses), (1, 1, 1));
        assert_eq!(a.played(), a.wins + a.draws() + a.losses);
        assert_eq!(a.goal_difference(), 0);
    }

    #[test]
    fn contains_exactly_the_teams_that_played() {
        let mut registry = TeamRegistry::new();
        registry.resolve("Idle United");
        let matches =
            season(&mut registry, &[(1, "A", "B", 0, 1), (2, "C", "A", 2, 2), (3, "B", "C", 1, 0)]);
        let aggregates = aggregate(&matches);

        let names: BTreeSet<&str> = aggregates.iter().map(|a| a.name()).collect();
        assert_eq!(names, BTreeSet::from(["A", "B", "C"]));
        assert!(aggregates.get_by_name("Idle United").is_none());
    }

    #[test]
    fn empty_input_yields_empty_mapping() {
        assert!(aggregate(&[]).is_empty());
        assert!(aggregate_parallel(&[]).is_empty());
    }

    #[test]
    fn aggregation_is_idempotent() {
        let mut registry = TeamRegistry::new();
        let matches =
            season(&mut registry, &[(1, "A", "B", 4, 2), (1, "C", "D", 0, 0), (2, "D", "A", 1, 3)]);

        assert_eq!(aggregate(&matches), aggregate(&matches));
    }

    #[test]
    fn rounds_need_not_be_ordered() {
        let mut registry = TeamRegistry::new();
        let forward = season(&mut registry, &[(1, "A", "B", 1, 0), (7, "B", "A", 2, 1)]);
        let backward: Vec<MatchRecord> = forward.iter().rev().cloned().collect();

        assert_eq!(aggregate(&forward), aggregate(&backward));
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut registry = TeamRegistry::new();
        let names = ["A", "B", "C", "D", "E", "F"];
        let mut rows = Vec::new();
        for round in 1..=40u32 {
            let home = names[(round as usize) % names.len()];
            let away = names[(round as usize * 5 + 1) % names.len()];
            if home != away {
                rows.push((round, home, away, round % 4, round % 3));
            }
        }
        let matches = season(&mut registry, &rows);

        assert_eq!(aggregate_parallel(&matches), aggregate(&matches));
    }

    #[test]
    fn goal_sums_do_not_wrap_at_u32() {
        let mut registry = TeamRegistry::new();
        let matches = season(
            &mut registry,
            &[(1, "A", "B", u32::MAX, 0), (2, "B", "A", 0, u32::MAX), (3, "A", "B", u32::MAX, 1)],
        );
        let aggregates = aggregate(&matches);
        let a = aggregates.get_by_name("A").expect("A aggregated");

        assert_eq!(a.goals_for(), 3 * u64::from(u32::MAX));
        assert_eq!(a.goals_against(), 1);
        assert_eq!(a.goal_difference(), 3 * i64::from(u32::MAX) - 1);
        assert_eq!(aggregate_parallel(&matches), aggregates);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "resolved to two names")]
    fn records_from_two_registries_are_not_merged_silently() {
        let mut first = TeamRegistry::new();
        let mut second = TeamRegistry::new();
        let mut matches = season(&mut first, &[(1, "A", "B", 1, 0)]);
        matches.extend(season(&mut second, &[(1, "C", "D", 2, 0)]));

        aggregate(&matches);
    }

    #[test]
    fn merge_is_commutative() {
        let mut registry = TeamRegistry::new();
        let first = season(&mut registry, &[(1, "A", "B", 1, 0), (2, "C", "A", 0, 0)]);
        let second = season(&mut registry, &[(3, "B", "C", 2, 5), (4, "A", "C", 1, 1)]);

        let left = aggregate(&first).merge(aggregate(&second));
        let right = aggregate(&second).merge(aggregate(&first));
        let all: Vec<MatchRecord> = first.into_iter().chain(second).collect();

        assert_eq!(left, right);
        assert_eq!(left, aggregate(&all));
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        const NAMES: [&str; 6] = ["Arsenal", "Burnley", "Chelsea", "Everton", "Fulham", "Leeds"];

        fn fixture_strategy() -> impl Strategy<Value = Vec<(u32, usize, usize, u32, u32)>> {
            prop::collection::vec(
                (1u32..=38, 0usize..NAMES.len(), 1usize..NAMES.len(), 0u32..=7, 0u32..=7),
                0..60,
            )
        }

        fn build(rows: &[(u32, usize, usize, u32, u32)]) -> Vec<MatchRecord> {
            let mut registry = TeamRegistry::new();
            rows.iter()
                .map(|&(round, home, offset, hg, ag)| {
                    // offset in 1..len keeps home and away distinct
                    let away = (home + offset) % NAMES.len();
                    MatchRecord::new(
                        round,
                        registry.resolve(NAMES[home]),
                        registry.resolve(NAMES[away]),
                        hg,
                        ag,
                    )
                })
                .collect()
        }

        proptest! {
            /// Property: the mapping holds exactly the teams named in the input
            #[test]
            fn prop_team_set_matches_input(rows in fixture_strategy()) {
                let matches = build(&rows);
                let expected: BTreeSet<&str> = matches
                    .iter()
                    .flat_map(|m| [m.home.name.as_str(), m.away.name.as_str()])
                    .collect();
                let aggregates = aggregate(&matches);
                let actual: BTreeSet<&str> = aggregates.iter().map(|a| a.name()).collect();
                prop_assert_eq!(actual, expected);
            }

            /// Property: played = wins + draws + losses, goals split exactly
            #[test]
            fn prop_counters_are_consistent(rows in fixture_strategy()) {
                let matches = build(&rows);
                for a in aggregate(&matches).iter() {
                    prop_assert_eq!(a.played(), a.wins + a.draws() + a.losses);
                    prop_assert_eq!(a.goals_for(), a.home_goals_scored + a.away_goals_scored);
                    prop_assert_eq!(
                        a.goals_against(),
                        a.home_goals_conceded + a.away_goals_conceded
                    );
                }
            }

            /// Property: parallel fold is identical to the sequential fold
            #[test]
            fn prop_parallel_equals_sequential(rows in fixture_strategy()) {
                let matches = build(&rows);
                prop_assert_eq!(aggregate_parallel(&matches), aggregate(&matches));
            }
        }
    }
}
