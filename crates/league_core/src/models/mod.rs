pub mod match_record;
pub mod team;

pub use match_record::{MatchOutcome, MatchRecord};
pub use team::{Team, TeamHandle, TeamId};
