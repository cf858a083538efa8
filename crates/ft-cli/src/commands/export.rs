//! Export command writing all entries as CSV.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use ft_core::export_csv;
use ft_db::Store;

use super::util::write_output;

pub fn run<W: Write>(writer: &mut W, store: &Store, output: Option<&Path>) -> Result<usize> {
    let entries = store.load_entries()?;
    let csv = export_csv(&entries);
    write_output(writer, output, &csv)?;
    tracing::debug!(count = entries.len(), "Exported entries");
    Ok(entries.len())
}
