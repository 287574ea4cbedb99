//! Match import - delimited text → `MatchRecord`s
//!
//! One match per line, five fields in this order:
//!
//! ```text
//! round;home team;away team;home goals;away goals
//! 1;Manchester United;Tottenham Hotspur;1;0
//! ```
//!
//! Every team name is resolved through a single [`TeamRegistry`] per import,
//! so all rows naming the same team share one handle.

use crate::config::ImportConfig;
use league_core::{MatchRecord, TeamRegistry};
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

const FIELD_COUNT: usize = 5;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}

impl ImportError {
    fn malformed(line: u64, reason: impl Into<String>) -> Self {
        ImportError::MalformedRecord { line, reason: reason.into() }
    }
}

/// Matches of one import together with the registry that resolved them.
#[derive(Debug)]
pub struct ImportedSeason {
    pub registry: TeamRegistry,
    pub matches: Vec<MatchRecord>,
}

impl ImportedSeason {
    pub fn team_count(&self) -> usize {
        self.registry.len()
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

/// Read all matches from the configured file.
pub fn import_file(config: &ImportConfig) -> Result<ImportedSeason, ImportError> {
    let path: &Path = &config.path;
    if !path.exists() {
        return Err(ImportError::FileNotFound { path: path.display().to_string() });
    }

    info!(path = %path.display(), "importing matches");
    let reader = reader_builder(config).from_path(path)?;
    read_records(reader)
}

/// Read all matches from any reader (used for in-memory input).
pub fn import_reader<R: Read>(
    input: R,
    config: &ImportConfig,
) -> Result<ImportedSeason, ImportError> {
    read_records(reader_builder(config).from_reader(input))
}

fn reader_builder(config: &ImportConfig) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All);
    builder
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<ImportedSeason, ImportError> {
    let mut registry = TeamRegistry::new();
    let mut matches = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        matches.push(parse_record(&record, line, &mut registry)?);
    }

    if matches.is_empty() {
        warn!("no matches were imported");
    } else {
        debug!(matches = matches.len(), teams = registry.len(), "import finished");
    }

    Ok(ImportedSeason { registry, matches })
}

fn parse_record(
    record: &csv::StringRecord,
    line: u64,
    registry: &mut TeamRegistry,
) -> Result<MatchRecord, ImportError> {
    if record.len() != FIELD_COUNT {
        return Err(ImportError::malformed(
            line,
            format!("expected {} fields, found {}", FIELD_COUNT, record.len()),
        ));
    }

    let round = parse_count(&record[0], "round", line)?;
    if round == 0 {
        return Err(ImportError::malformed(line, "round must be positive"));
    }

    let home_name = parse_name(&record[1], "home team", line)?;
    let away_name = parse_name(&record[2], "away team", line)?;
    if home_name == away_name {
        return Err(ImportError::malformed(line, format!("{} cannot play itself", home_name)));
    }

    let home_goals = parse_count(&record[3], "home goals", line)?;
    let away_goals = parse_count(&record[4], "away goals", line)?;

    Ok(MatchRecord::new(
        round,
        registry.resolve(home_name),
        registry.resolve(away_name),
        home_goals,
        away_goals,
    ))
}

fn parse_count(field: &str, what: &str, line: u64) -> Result<u32, ImportError> {
    field
        .parse::<u32>()
        .map_err(|_| ImportError::malformed(line, format!("invalid {}: '{}'", what, field)))
}

fn parse_name<'a>(field: &'a str, what: &str, line: u64) -> Result<&'a str, ImportError> {
    if field.is_empty() {
        return Err(ImportError::malformed(line, format!("empty {} name", what)));
    }
    Ok(field)
}
