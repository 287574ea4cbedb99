//! Team registry
//!
//! Resolves team names to stable [`TeamHandle`]s. One registry is created per
//! import run and passed to whoever builds match records, so independent runs
//! never share identities.

use crate::models::{Team, TeamHandle, TeamId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Name → handle lookup, growing only.
#[derive(Debug, Default)]
pub struct TeamRegistry {
    by_name: HashMap<String, TeamHandle>,
    /// Handles in id order (ids are assigned sequentially from 1).
    teams: Vec<TeamHandle>,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle registered for `name`, creating it on first sight.
    ///
    /// Names are compared exactly (case-sensitive, no trimming).
    pub fn resolve(&mut self, name: &str) -> TeamHandle {
        if let Some(existing) = self.by_name.get(name) {
            return Arc::clone(existing);
        }

        let id = TeamId(self.teams.len() as u32 + 1);
        let team = Arc::new(Team::new(id, name));
        debug!(team = name, %id, "registered team");

        self.by_name.insert(name.to_string(), Arc::clone(&team));
        self.teams.push(Arc::clone(&team));
        team
    }

    /// Lookup without registering.
    pub fn get(&self, name: &str) -> Option<&TeamHandle> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Registered teams in id order.
    pub fn iter(&self) -> impl Iterator<Item = &TeamHandle> {
        self.teams.iter()
    }
}

/// Registry that can be shared between threads.
///
/// Every resolution takes the lock, so two threads resolving the same name
/// always receive the same identity.
#[derive(Debug, Default)]
pub struct SharedTeamRegistry {
    inner: Mutex<TeamRegistry>,
}

impl SharedTeamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&self, name: &str) -> TeamHandle {
        // resolve never leaves the map half-updated; poisoning is harmless
        let mut registry = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        registry.resolve(name)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hand back the plain registry once concurrent resolution is finished.
    pub fn into_inner(self) -> TeamRegistry {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
