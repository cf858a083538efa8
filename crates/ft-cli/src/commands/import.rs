//! Import command appending entries from a CSV file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use ft_core::{ImportReport, import_csv};
use ft_db::Store;

/// Message shown when the file as a whole cannot be used.
pub const CSV_FORMAT_ERROR: &str = "Error processing CSV file. Please check the format.";

/// Parses `path` and appends the entries. Nothing is saved on a whole-file
/// failure; malformed lines are skipped and reported.
pub fn run<W: Write>(
    writer: &mut W,
    store: &Store,
    path: &Path,
    now: DateTime<Utc>,
) -> Result<ImportReport> {
    let report = read_report(path, now).context(CSV_FORMAT_ERROR)?;

    if !report.entries.is_empty() {
        let mut entries = store.load_entries()?;
        entries.extend(report.entries.iter().cloned());
        store.save_entries(&entries)?;
    }
    tracing::info!(
        path = %path.display(),
        imported = report.entries.len(),
        skipped = report.errors.len(),
        "Imported CSV"
    );

    writeln!(writer, "Imported {} entries.", report.entries.len())?;
    if !report.errors.is_empty() {
        writeln!(writer, "Skipped {} malformed lines:", report.errors.len())?;
        for err in &report.errors {
            writeln!(writer, "  {err}")?;
        }
    }
    if !report.timestamp_fallbacks.is_empty() {
        writeln!(
            writer,
            "{} entries had an unreadable date/time and were stamped with the import time.",
            report.timestamp_fallbacks.len()
        )?;
    }
    Ok(report)
}

fn read_report(path: &Path, now: DateTime<Utc>) -> Result<ImportReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(import_csv(&text, now)?)
}
