//! Dark mode preference command.

use std::io::Write;

use anyhow::Result;

use ft_db::Store;

/// Prints the preference, or sets it first when `enabled` is given.
pub fn run<W: Write>(writer: &mut W, store: &Store, enabled: Option<bool>) -> Result<bool> {
    if let Some(enabled) = enabled {
        store.set_dark_mode(enabled)?;
    }
    let current = store.dark_mode()?;
    writeln!(writer, "Dark mode: {}", if current { "on" } else { "off" })?;
    Ok(current)
}
