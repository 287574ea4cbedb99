//! League Stats CLI Library
//!
//! Delimited text → `MatchRecord`s → league report → console / JSON

pub mod config;
pub mod export;
pub mod import;
pub mod render;

pub use config::ImportConfig;
pub use export::{read_report, write_report, ReportDocument};
pub use import::{import_file, import_reader, ImportError, ImportedSeason};

use league_core::{aggregate, aggregate_parallel, LeagueReport, StatsError};

/// Aggregate an imported season and build its report.
pub fn analyze(season: &ImportedSeason, parallel: bool) -> Result<LeagueReport, StatsError> {
    let aggregates = if parallel {
        aggregate_parallel(&season.matches)
    } else {
        aggregate(&season.matches)
    };
    LeagueReport::build(&aggregates)
}
