//! Import configuration.
//!
//! Input path resolution order:
//! 1) explicit path (`--csv`)
//! 2) `LEAGUE_CSV_PATH` if set and non-blank
//! 3) `PremierLeague.csv` (relative to the working directory)

use std::env;
use std::path::PathBuf;

/// Env var for overriding the match file path.
pub const LEAGUE_CSV_ENV: &str = "LEAGUE_CSV_PATH";

/// Default relative path used when nothing else is configured.
pub const DEFAULT_CSV_REL_PATH: &str = "PremierLeague.csv";

pub const DEFAULT_DELIMITER: u8 = b';';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    pub path: PathBuf,
    pub delimiter: u8,
    /// Skip the first line as a header row.
    pub has_headers: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CSV_REL_PATH),
            delimiter: DEFAULT_DELIMITER,
            has_headers: false,
        }
    }
}

impl ImportConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), ..Self::default() }
    }

    /// Resolve the input path from an optional flag and the environment.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_with(explicit, env::var(LEAGUE_CSV_ENV).ok())
    }

    fn resolve_with(explicit: Option<PathBuf>, env_value: Option<String>) -> Self {
        if let Some(path) = explicit {
            return Self::new(path);
        }
        if let Some(value) = env_value {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Self::new(trimmed);
            }
        }
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }
}
