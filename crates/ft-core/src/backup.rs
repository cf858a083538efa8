//! Whole-list JSON backups.

use thiserror::Error;

use crate::entry::FlowEntry;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("invalid backup file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Pretty JSON array of entries, in the same shape as the stored list.
pub fn serialize(entries: &[FlowEntry]) -> Result<String, BackupError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Parses a backup. The caller replaces its whole list with the result.
pub fn deserialize(blob: &str) -> Result<Vec<FlowEntry>, BackupError> {
    let entries: Vec<FlowEntry> = serde_json::from_str(blob)?;
    tracing::debug!(count = entries.len(), "Parsed backup");
    Ok(entries)
}
