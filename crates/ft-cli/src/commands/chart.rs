//! Chart command rendering the chart data as plain text.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};

use ft_core::FlowEntry;
use ft_core::chart::{
    HEAT_FULL_SCALE, Heatmap, LineSeries, WEEKDAY_LABELS, age_days, axis_max, axis_ticks,
    heat_intensity, heat_rgb, recency_opacity, x_fraction,
};
use ft_core::stats::{intake_flow_points, linear_regression};
use ft_db::Store;

use super::util::{format_decimal, format_timestamp};
use crate::cli::ChartKind;

const BAR_WIDTH: usize = 40;
const DEFAULT_RATE_MAX: f64 = 30.0;

pub fn run<W: Write>(
    writer: &mut W,
    store: &Store,
    kind: ChartKind,
    now: DateTime<Utc>,
) -> Result<()> {
    let entries = store.load_entries()?;
    if entries.is_empty() {
        writeln!(writer, "No entries recorded.")?;
        return Ok(());
    }
    match kind {
        ChartKind::Line => write_line(writer, &entries),
        ChartKind::Heatmap => write_heatmap(writer, &entries),
        ChartKind::Scatter => write_scatter(writer, &entries, now),
    }
}

// ========== Line ==========

fn write_line<W: Write>(writer: &mut W, entries: &[FlowEntry]) -> Result<()> {
    let series = LineSeries::from_entries(entries);
    let max = axis_max(&series.flow_rates, DEFAULT_RATE_MAX);
    let ticks: Vec<String> = axis_ticks(max, 4).into_iter().map(format_decimal).collect();

    writeln!(writer, "Flow rate over time ({} points)", series.len())?;
    writeln!(writer, "Axis (mL/s): {}", ticks.join(" "))?;
    for (i, ts) in series.timestamps.iter().enumerate() {
        let rate = series.flow_rates[i];
        let mut line = format!(
            "{} x={:.2} {:>6} {}",
            format_timestamp(*ts),
            x_fraction(i, series.len()),
            format_decimal(rate),
            bar(rate / max),
        );
        if let Some(ml) = series.fluid_intakes[i] {
            line.push_str(&format!("  fluid {} mL", format_decimal(ml)));
        }
        writeln!(writer, "{}", line.trim_end())?;
    }
    Ok(())
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar(fraction: f64) -> String {
    if !fraction.is_finite() {
        return String::new();
    }
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled)
}

// ========== Heatmap ==========

fn heat_glyph(avg: Option<f64>) -> char {
    match avg.map(heat_intensity) {
        None => ' ',
        Some(i) if i < 0.25 => '.',
        Some(i) if i < 0.5 => ':',
        Some(i) if i < 0.75 => '*',
        Some(_) => '#',
    }
}

fn write_heatmap<W: Write>(writer: &mut W, entries: &[FlowEntry]) -> Result<()> {
    let map = Heatmap::from_entries(entries);
    writeln!(writer, "Average flow rate by weekday and hour (UTC)")?;
    writeln!(writer, "     0         1         2")?;
    writeln!(writer, "     012345678901234567890123")?;
    for (day, label) in WEEKDAY_LABELS.iter().enumerate() {
        let row: String = (0..24).map(|hour| heat_glyph(map.get(day, hour))).collect();
        writeln!(writer, "{}", format!("{label}  {row}").trim_end())?;
    }
    let (lr, lg, lb) = heat_rgb(0.0);
    let (hr, hg, hb) = heat_rgb(1.0);
    writeln!(
        writer,
        "Scale: . : * # from 0 to {HEAT_FULL_SCALE} mL/s (rgb({lr}, {lg}, {lb}) to rgb({hr}, {hg}, {hb}))"
    )?;
    Ok(())
}

// ========== Scatter ==========

fn write_scatter<W: Write>(writer: &mut W, entries: &[FlowEntry], now: DateTime<Utc>) -> Result<()> {
    let points = intake_flow_points(entries);
    writeln!(writer, "Fluid intake vs flow rate ({} points)", points.len())?;
    if points.is_empty() {
        writeln!(writer, "No entries with fluid intake.")?;
        return Ok(());
    }

    for entry in entries.iter().filter(|e| e.fluid_intake.is_some()) {
        let ml = entry.fluid_intake_ml().unwrap_or(f64::NAN);
        writeln!(
            writer,
            "{:>8} mL  {:>6} mL/s  opacity {:.2}",
            format_decimal(ml),
            format_decimal(entry.flow_rate),
            recency_opacity(age_days(entry.timestamp, now)),
        )?;
    }

    match linear_regression(&points) {
        Some(line) => writeln!(
            writer,
            "Trend: flow rate = {:.4} x intake + {:.2}",
            line.slope, line.intercept
        )?,
        None => writeln!(writer, "Trend: not enough data")?,
    }
    Ok(())
}
