//! Stats command for the summary panel.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};

use ft_core::Summary;
use ft_db::Store;

use super::util::format_decimal;

pub fn run<W: Write>(writer: &mut W, store: &Store, json: bool, now: DateTime<Utc>) -> Result<()> {
    let entries = store.load_entries()?;
    let summary = Summary::compute(&entries, now);

    if json {
        serde_json::to_writer_pretty(&mut *writer, &summary)?;
        writeln!(writer)?;
        return Ok(());
    }
    write!(writer, "{}", format_summary(&summary))?;
    Ok(())
}

pub fn format_summary(summary: &Summary) -> String {
    if summary.entry_count == 0 {
        return "No entries recorded.\n".to_string();
    }
    let or_none = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());

    let mut lines = vec![
        format!("Entries:              {}", summary.entry_count),
        format!(
            "Average flow rate:    {} mL/s",
            format_decimal(summary.average_flow_rate)
        ),
        format!(
            "Last 7 days:          {} mL/s",
            format_decimal(summary.recent_average_flow_rate)
        ),
        format!(
            "Average volume:       {} mL",
            format_decimal(summary.average_volume)
        ),
        format!(
            "Average duration:     {} s",
            format_decimal(summary.average_duration)
        ),
        format!("Most common color:    {}", or_none(&summary.most_common_color)),
        format!("Most common urgency:  {}", or_none(&summary.most_common_urgency)),
        format!("Most common concern:  {}", or_none(&summary.most_common_concern)),
    ];
    if summary.fluid_intake_count > 0 {
        lines.push(format!(
            "Fluid intake:         {} mL average over {} entries",
            format_decimal(summary.average_fluid_intake_ml),
            summary.fluid_intake_count
        ));
        lines.push(format!(
            "Most common fluid:    {}",
            or_none(&summary.most_common_fluid_type)
        ));
        lines.push(format!(
            "Fluid intake trend:   {}",
            summary
                .fluid_intake_trend
                .map_or("not enough data", |t| t.as_str())
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
