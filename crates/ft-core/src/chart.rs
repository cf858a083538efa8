//! Numeric transforms behind the charts.
//!
//! No drawing happens here; callers render the series however they like.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::entry::FlowEntry;
use crate::stats::average;

/// Flow rate at which a heatmap cell reaches full intensity.
pub const HEAT_FULL_SCALE: f64 = 20.0;

/// Age in days at which scatter points stop fading.
pub const RECENCY_FADE_DAYS: f64 = 30.0;

/// Opacity floor for old scatter points.
pub const RECENCY_MIN_OPACITY: f64 = 0.3;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// ========== Line chart ==========

/// Parallel series for the flow-rate-over-time chart, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSeries {
    pub timestamps: Vec<DateTime<Utc>>,
    pub flow_rates: Vec<f64>,
    /// Fluid intake in mL, `None` where the entry has none.
    pub fluid_intakes: Vec<Option<f64>>,
}

impl LineSeries {
    pub fn from_entries(entries: &[FlowEntry]) -> Self {
        let mut sorted: Vec<&FlowEntry> = entries.iter().collect();
        sorted.sort_by_key(|e| e.timestamp);
        Self {
            timestamps: sorted.iter().map(|e| e.timestamp).collect(),
            flow_rates: sorted.iter().map(|e| e.flow_rate).collect(),
            fluid_intakes: sorted.iter().map(|e| e.fluid_intake_ml()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Horizontal position of point `i` in `[0, 1]`.
#[allow(clippy::cast_precision_loss)]
pub fn x_fraction(i: usize, len: usize) -> f64 {
    if len <= 1 {
        0.0
    } else {
        i as f64 / (len - 1) as f64
    }
}

/// Axis ceiling: 10% headroom above the largest value.
///
/// Falls back when the data gives no finite positive maximum.
pub fn axis_max(values: &[f64], fallback: f64) -> f64 {
    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    let scaled = max * 1.1;
    if scaled.is_finite() && scaled > 0.0 {
        scaled
    } else {
        fallback
    }
}

/// `steps + 1` evenly spaced ticks from 0 to `max`.
#[allow(clippy::cast_precision_loss)]
pub fn axis_ticks(max: f64, steps: usize) -> Vec<f64> {
    if steps == 0 {
        return vec![0.0];
    }
    (0..=steps)
        .map(|i| max * i as f64 / steps as f64)
        .collect()
}

// ========== Heatmap ==========

/// Mean flow rate per weekday and hour.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    /// `cells[weekday][hour]`, weekday 0 = Sunday. `None` for empty cells.
    pub cells: [[Option<f64>; 24]; 7],
}

impl Heatmap {
    pub fn from_entries(entries: &[FlowEntry]) -> Self {
        let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); 7 * 24];
        for entry in entries {
            let day = entry.timestamp.weekday().num_days_from_sunday() as usize;
            let hour = entry.timestamp.hour() as usize;
            buckets[day * 24 + hour].push(entry.flow_rate);
        }

        let mut cells = [[None; 24]; 7];
        for (day, row) in cells.iter_mut().enumerate() {
            for (hour, cell) in row.iter_mut().enumerate() {
                let rates = &buckets[day * 24 + hour];
                if !rates.is_empty() {
                    *cell = Some(average(rates));
                }
            }
        }
        Self { cells }
    }

    pub fn get(&self, weekday: usize, hour: usize) -> Option<f64> {
        self.cells.get(weekday)?.get(hour).copied().flatten()
    }
}

/// Cell intensity in `[0, 1]`.
pub fn heat_intensity(avg: f64) -> f64 {
    (avg / HEAT_FULL_SCALE).min(1.0)
}

/// Blue-to-red color ramp for an intensity.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn heat_rgb(intensity: f64) -> (u8, u8, u8) {
    let channel = |v: f64| v.floor().clamp(0.0, 255.0) as u8;
    (
        channel(255.0 * intensity),
        channel(100.0 * (1.0 - intensity)),
        channel(255.0 * (1.0 - intensity)),
    )
}

// ========== Scatter ==========

/// Point opacity for an entry `days` old.
pub fn recency_opacity(days: f64) -> f64 {
    (1.0 - days / RECENCY_FADE_DAYS).max(RECENCY_MIN_OPACITY)
}

/// Fractional days between `timestamp` and `now`.
#[allow(clippy::cast_precision_loss)]
pub fn age_days(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - timestamp).num_seconds() as f64 / 86_400.0
}
