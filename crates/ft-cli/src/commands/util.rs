//! Shared utilities for CLI commands.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Parses an entry timestamp as given on the command line.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    ft_core::csv::parse_iso_timestamp(s.trim()).with_context(|| {
        format!("Invalid timestamp: {s}. Use ISO 8601 (e.g., 2025-01-15T10:30:00Z)")
    })
}

/// RFC 3339 with second precision, the form `list --expand` shows.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// One decimal place, or `n/a` for values that are not finite.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}")
    } else {
        "n/a".to_string()
    }
}

/// Writes `contents` to `path`, or to `writer` when no path is given.
pub fn write_output<W: Write>(writer: &mut W, path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = contents.len(), "Wrote output file");
        }
        None => writer.write_all(contents.as_bytes())?,
    }
    Ok(())
}
