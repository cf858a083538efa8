//! Add command for recording a new entry.
//!
//! Prints the new flow rate next to the today / week / month / overall
//! averages of the entries recorded before it.

use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, NaiveTime, SubsecRound, Utc};
use clap::Args;

use ft_core::stats::{Window, average, windowed_average};
use ft_core::types::COMMON_SIZES;
use ft_core::{Comparison, EntryDraft, FlowEntry, FluidIntake, FluidUnit};
use ft_db::Store;

use super::util::{format_decimal, format_timestamp};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Voided volume in mL.
    #[arg(long)]
    pub volume: f64,

    /// Duration in seconds.
    #[arg(long)]
    pub duration: f64,

    /// Date of the measurement (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Time of the measurement (HH:MM or HH:MM:SS, UTC). Defaults to now.
    #[arg(long)]
    pub time: Option<NaiveTime>,

    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub urgency: Option<String>,

    /// May be repeated.
    #[arg(long)]
    pub concern: Vec<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Drink type, e.g. Water or Other.
    #[arg(long)]
    pub fluid_type: Option<String>,

    /// Name of the drink when `--fluid-type Other`.
    #[arg(long)]
    pub fluid_custom_type: Option<String>,

    /// Amount in `--fluid-unit`.
    #[arg(long, conflicts_with = "fluid_size")]
    pub fluid_amount: Option<f64>,

    /// Index into the common drink sizes (0 = Small 8 oz / 240 mL).
    #[arg(long)]
    pub fluid_size: Option<usize>,

    #[arg(long, default_value = "mL")]
    pub fluid_unit: FluidUnit,
}

impl AddArgs {
    /// Whole seconds only, so the printed timestamp works as a delete key.
    fn timestamp(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let date = self.date.unwrap_or_else(|| now.date_naive());
        let time = self.time.unwrap_or_else(|| now.time());
        date.and_time(time).and_utc().trunc_subsecs(0)
    }

    fn fluid_intake(&self) -> Result<Option<FluidIntake>> {
        let Some(fluid_type) = &self.fluid_type else {
            if self.fluid_amount.is_some() || self.fluid_size.is_some() {
                bail!("--fluid-amount and --fluid-size require --fluid-type");
            }
            return Ok(None);
        };
        let amount = match (self.fluid_amount, self.fluid_size) {
            (Some(amount), _) => amount,
            (None, Some(index)) => COMMON_SIZES
                .get(index)
                .with_context(|| {
                    format!(
                        "unknown drink size {index} (expected 0..{})",
                        COMMON_SIZES.len()
                    )
                })?
                .amount(self.fluid_unit),
            (None, None) => bail!("fluid intake requires --fluid-amount or --fluid-size"),
        };
        Ok(Some(FluidIntake {
            fluid_type: fluid_type.clone(),
            custom_type: self.fluid_custom_type.clone(),
            amount,
            unit: self.fluid_unit,
        }))
    }

    fn into_entry(self, now: DateTime<Utc>) -> Result<FlowEntry> {
        let timestamp = self.timestamp(now);
        let fluid_intake = self.fluid_intake()?;
        let draft = EntryDraft {
            volume: self.volume,
            duration: self.duration,
            color: self.color,
            urgency: self.urgency,
            concerns: self.concern,
            notes: self.notes,
            fluid_intake,
        };
        Ok(draft.build(timestamp)?)
    }
}

pub fn run<W: Write>(writer: &mut W, store: &Store, args: AddArgs, now: DateTime<Utc>) -> Result<()> {
    let mut entries = store.load_entries()?;
    let entry = args.into_entry(now)?;

    writeln!(writer, "Added entry at {}", format_timestamp(entry.timestamp))?;
    writeln!(writer, "Flow rate: {} mL/s", format_decimal(entry.flow_rate))?;
    write_comparisons(writer, &entries, entry.flow_rate, now)?;

    tracing::info!(timestamp = %entry.timestamp, flow_rate = entry.flow_rate, "Added entry");
    entries.push(entry);
    store.save_entries(&entries)?;
    Ok(())
}

fn write_comparisons<W: Write>(
    writer: &mut W,
    previous: &[FlowEntry],
    rate: f64,
    now: DateTime<Utc>,
) -> Result<()> {
    if previous.is_empty() {
        return Ok(());
    }
    let overall: Vec<f64> = previous.iter().map(|e| e.flow_rate).collect();
    let rows = [
        ("Today", Window::Today),
        ("Last 7 days", Window::LastWeek),
        ("Last month", Window::LastMonth),
    ];

    writeln!(writer, "Compared with:")?;
    for (label, window) in rows {
        if previous.iter().any(|e| window.contains(e.timestamp, now)) {
            let avg = windowed_average(previous, window, now);
            write_row(writer, label, rate, avg)?;
        } else {
            writeln!(writer, "  {label:<12} n/a")?;
        }
    }
    write_row(writer, "Overall", rate, average(&overall))?;
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, label: &str, rate: f64, avg: f64) -> Result<()> {
    let comparison = Comparison::of(rate, avg);
    writeln!(
        writer,
        "  {label:<12} {:>6} mL/s  {}",
        format_decimal(avg),
        comparison.as_str()
    )?;
    Ok(())
}
