//! Delete command.

use std::io::Write;

use anyhow::Result;

use ft_db::Store;

use super::util::{format_timestamp, parse_timestamp};

/// Removes every entry whose timestamp equals `timestamp`.
pub fn run<W: Write>(writer: &mut W, store: &Store, timestamp: &str) -> Result<usize> {
    let target = parse_timestamp(timestamp)?;
    let mut entries = store.load_entries()?;
    let before = entries.len();
    entries.retain(|e| e.timestamp != target);
    let removed = before - entries.len();

    if removed == 0 {
        writeln!(writer, "No entry at {}.", format_timestamp(target))?;
        return Ok(0);
    }
    store.save_entries(&entries)?;
    tracing::info!(timestamp = %target, removed, "Deleted entries");
    writeln!(
        writer,
        "Deleted {removed} {} at {}.",
        if removed == 1 { "entry" } else { "entries" },
        format_timestamp(target)
    )?;
    Ok(removed)
}
