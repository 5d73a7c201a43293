//! Population report output.
//!
//! A single report goes to pretty JSON; per-step logs go to JSON Lines, one
//! report per line.

use crate::error::{IoError, Result};
use colonia_data::PopulationReport;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

pub fn write_report_json<P: AsRef<Path>>(path: P, report: &PopulationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn append_report_jsonl<P: AsRef<Path>>(path: P, report: &PopulationReport) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let line = serde_json::to_string(report)?;
    writeln!(file, "{line}")?;
    Ok(())
}

/// Reads every report of a JSON Lines log, in file order.
pub fn read_reports_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<PopulationReport>> {
    let reader = BufReader::new(File::open(path)?);
    let mut reports = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let report = serde_json::from_str(&line)
            .map_err(|e| IoError::parse(i + 1, format!("invalid report: {e}")))?;
        reports.push(report);
    }
    Ok(reports)
}
