//! List command showing entries grouped by month, newest first.

use std::io::Write;

use anyhow::Result;

use ft_core::stats::group_by_month;
use ft_core::{FlowEntry, MonthlyGroup};
use ft_db::Store;

use super::util::{format_decimal, format_timestamp};

pub fn run<W: Write>(writer: &mut W, store: &Store, expand: bool, json: bool) -> Result<()> {
    let entries = store.load_entries()?;
    let groups = group_by_month(&entries);

    if json {
        serde_json::to_writer_pretty(&mut *writer, &groups)?;
        writeln!(writer)?;
        return Ok(());
    }

    if groups.is_empty() {
        writeln!(writer, "No entries recorded.")?;
        return Ok(());
    }

    for group in &groups {
        write_group(writer, group)?;
        if expand {
            for entry in &group.entries {
                writeln!(writer, "  {}", format_entry(entry))?;
            }
        }
    }
    Ok(())
}

fn write_group<W: Write>(writer: &mut W, group: &MonthlyGroup) -> Result<()> {
    let count = group.entries.len();
    writeln!(
        writer,
        "{} ({count} {}): avg {} mL/s, {} mL, {} s",
        group.label,
        if count == 1 { "entry" } else { "entries" },
        format_decimal(group.average_flow_rate),
        format_decimal(group.average_volume),
        format_decimal(group.average_duration),
    )?;
    Ok(())
}

/// One-line rendering of an entry with its optional tags.
pub fn format_entry(entry: &FlowEntry) -> String {
    let mut line = format!(
        "{}  {} mL / {} s = {} mL/s",
        format_timestamp(entry.timestamp),
        format_decimal(entry.volume),
        format_decimal(entry.duration),
        format_decimal(entry.flow_rate),
    );
    let mut tags: Vec<String> = Vec::new();
    tags.extend(entry.color.clone());
    tags.extend(entry.urgency.clone());
    if let Some(concerns) = entry.concerns.as_ref().filter(|c| !c.is_empty()) {
        tags.push(concerns.join(", "));
    }
    if let Some(fluid) = &entry.fluid_intake {
        tags.push(format!("{} {} {}", fluid.label(), fluid.amount, fluid.unit));
    }
    if !tags.is_empty() {
        line.push_str("  [");
        line.push_str(&tags.join("; "));
        line.push(']');
    }
    if let Some(notes) = &entry.notes {
        line.push_str("  ");
        line.push_str(notes);
    }
    line
}
