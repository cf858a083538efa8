//! Synthetic entries for trying the app out.
//!
//! Generated entries are tagged with [`MOCK_NOTES`] so they can be purged
//! again without touching real data.

use chrono::{Days, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::entry::FlowEntry;
use crate::entry::FluidIntake;
use crate::types::FluidUnit;

/// Notes value marking an entry as generated.
pub const MOCK_NOTES: &str = "Mock data to be removed";

/// Hours of the day at which mock entries are placed.
pub const MOCK_HOURS: [u32; 3] = [7, 13, 20];

/// Fluid types drawn for mock entries.
pub const MOCK_FLUID_TYPES: [&str; 5] = ["Water", "Coffee", "Tea", "Juice", "Soda"];

/// Inclusive day range to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MockRange {
    /// Three calendar months back through `today`.
    pub fn default_for(today: NaiveDate) -> Self {
        Self {
            start: today.checked_sub_months(Months::new(3)).unwrap_or(today),
            end: today,
        }
    }

    /// Each day in the range, in order. Empty if `start > end`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        std::iter::successors(Some(self.start), |d| d.checked_add_days(Days::new(1)))
            .take_while(move |d| *d <= end)
    }
}

/// Generates three entries per day over `range`.
pub fn generate<R: Rng + ?Sized>(range: MockRange, rng: &mut R) -> Vec<FlowEntry> {
    let mut entries = Vec::new();
    for day in range.days() {
        for hour in MOCK_HOURS {
            let minute = rng.gen_range(0..60);
            let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) else {
                continue;
            };
            let timestamp = Utc.from_utc_datetime(&day.and_time(time));

            let volume = f64::from(rng.gen_range(200_u32..500));
            let duration = f64::from(rng.gen_range(30_u32..70));
            let fluid_type = MOCK_FLUID_TYPES
                .choose(rng)
                .copied()
                .unwrap_or(MOCK_FLUID_TYPES[0]);
            let amount = f64::from(rng.gen_range(200_u32..500));

            let mut entry = FlowEntry::new(timestamp, volume, duration);
            entry.notes = Some(MOCK_NOTES.to_string());
            entry.fluid_intake = Some(FluidIntake {
                fluid_type: fluid_type.to_string(),
                custom_type: None,
                amount,
                unit: FluidUnit::Ml,
            });
            entries.push(entry);
        }
    }
    tracing::debug!(
        start = %range.start,
        end = %range.end,
        count = entries.len(),
        "Generated mock entries"
    );
    entries
}

pub fn is_mock(entry: &FlowEntry) -> bool {
    entry.notes.as_deref() == Some(MOCK_NOTES)
}

pub fn has_mock_data(entries: &[FlowEntry]) -> bool {
    entries.iter().any(is_mock)
}

/// Keeps every entry that is not mock data. Returns the number removed.
pub fn purge_mock(entries: &mut Vec<FlowEntry>) -> usize {
    let before = entries.len();
    entries.retain(|e| !is_mock(e));
    before - entries.len()
}
