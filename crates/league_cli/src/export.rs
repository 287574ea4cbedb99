//! JSON report export

use anyhow::{Context, Result};
use league_core::{LeagueReport, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Report plus the metadata needed to tell exports apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub schema_version: u8,
    /// Creation time (RFC3339)
    pub created_at: String,
    /// Input the report was computed from
    pub source: String,
    pub report: LeagueReport,
}

impl ReportDocument {
    pub fn new(source: &Path, report: LeagueReport) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            created_at: chrono::Utc::now().to_rfc3339(),
            source: source.display().to_string(),
            report,
        }
    }
}

/// Write the document as pretty JSON, creating parent directories.
pub fn write_report(path: &Path, document: &ReportDocument) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    let json = serde_json::to_string_pretty(document).context("Failed to serialize report")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    Ok(())
}

pub fn read_report(path: &Path) -> Result<ReportDocument> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read report file: {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse report JSON")
}
