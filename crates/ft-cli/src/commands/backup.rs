//! Backup and restore commands.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use ft_core::backup;
use ft_db::Store;

use super::util::write_output;

pub fn backup_run<W: Write>(writer: &mut W, store: &Store, output: Option<&Path>) -> Result<usize> {
    let entries = store.load_entries()?;
    let blob = backup::serialize(&entries)?;
    write_output(writer, output, &blob)?;
    Ok(entries.len())
}

/// Replaces the stored entries with a backup. A malformed file leaves the
/// store untouched.
pub fn restore_run<W: Write>(writer: &mut W, store: &Store, path: &Path) -> Result<usize> {
    let blob = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let entries = backup::deserialize(&blob)
        .with_context(|| format!("failed to restore from {}", path.display()))?;
    store.save_entries(&entries)?;
    tracing::info!(path = %path.display(), count = entries.len(), "Restored backup");
    writeln!(writer, "Restored {} entries.", entries.len())?;
    Ok(entries.len())
}
