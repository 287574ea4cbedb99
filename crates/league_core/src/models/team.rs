use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Opaque team identity, assigned by the registry on first sight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Shared reference to a registered team. Matches hold handles, never teams.
pub type TeamHandle = Arc<Team>;
