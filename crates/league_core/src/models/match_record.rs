use super::team::TeamHandle;

/// Result of a match from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_goals(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

/// One played match. Immutable once built.
///
/// Home and away are expected to be different teams; the importer rejects
/// rows where they are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub round: u32,
    pub home: TeamHandle,
    pub away: TeamHandle,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl MatchRecord {
    pub fn new(
        round: u32,
        home: TeamHandle,
        away: TeamHandle,
        home_goals: u32,
        away_goals: u32,
    ) -> Self {
        Self { round, home, away, home_goals, away_goals }
    }

    pub fn home_outcome(&self) -> MatchOutcome {
        MatchOutcome::from_goals(self.home_goals, self.away_goals)
    }

    pub fn away_outcome(&self) -> MatchOutcome {
        MatchOutcome::from_goals(self.away_goals, self.home_goals)
    }
}
