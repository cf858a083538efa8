//! Aggregate statistics over the entry list.
//!
//! Everything here is a pure function of the entries (plus an explicit `now`
//! where time windows are involved), so callers can recompute on every render.

use chrono::{DateTime, Datelike, Duration, Months, Utc};
use serde::Serialize;

use crate::entry::FlowEntry;
use crate::types::Trend;

/// Minimum number of fluid-intake entries before a trend is reported.
pub const TREND_MIN_ENTRIES: usize = 4;

/// Percent change beyond which fluid intake counts as trending.
pub const TREND_THRESHOLD_PCT: f64 = 5.0;

/// Minimum points for a regression line.
pub const REGRESSION_MIN_POINTS: usize = 3;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Arithmetic mean; `0` for an empty slice.
///
/// NaN inputs propagate into the result.
#[allow(clippy::cast_precision_loss)]
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

// ========== Time windows ==========

/// A trailing time window ending at `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Since midnight UTC today.
    Today,
    /// The last 7 days.
    LastWeek,
    /// Since the same instant one calendar month ago.
    LastMonth,
}

impl Window {
    /// Inclusive start of the window.
    pub fn start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Today => now
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .map_or(now, |midnight| midnight.and_utc()),
            Self::LastWeek => now - Duration::days(7),
            Self::LastMonth => now.checked_sub_months(Months::new(1)).unwrap_or(now),
        }
    }

    /// Whether `timestamp` lies in `[start, now]`.
    pub fn contains(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        timestamp >= self.start(now) && timestamp <= now
    }
}

/// Average flow rate of entries inside `window`.
pub fn windowed_average(entries: &[FlowEntry], window: Window, now: DateTime<Utc>) -> f64 {
    let rates: Vec<f64> = entries
        .iter()
        .filter(|e| window.contains(e.timestamp, now))
        .map(|e| e.flow_rate)
        .collect();
    average(&rates)
}

// ========== Distributions ==========

/// Label counts in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    counts: Vec<(String, usize)>,
}

impl Distribution {
    /// Counts one occurrence of `label`. Empty labels are ignored.
    pub fn add(&mut self, label: &str) {
        if label.is_empty() {
            return;
        }
        if let Some((_, count)) = self.counts.iter_mut().find(|(l, _)| l == label) {
            *count += 1;
        } else {
            self.counts.push((label.to_string(), 1));
        }
    }

    /// Count for `label`, zero if never seen.
    pub fn count(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map_or(0, |(_, c)| *c)
    }

    /// Label with the strictly highest count; ties go to the first seen.
    pub fn most_common(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (label, count) in &self.counts {
            if best.is_none_or(|(_, max)| *count > max) {
                best = Some((label, *count));
            }
        }
        best.map(|(label, _)| label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Distribution {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut dist = Self::default();
        for label in iter {
            dist.add(label);
        }
        dist
    }
}

pub fn color_distribution(entries: &[FlowEntry]) -> Distribution {
    entries.iter().filter_map(|e| e.color.as_deref()).collect()
}

pub fn urgency_distribution(entries: &[FlowEntry]) -> Distribution {
    entries.iter().filter_map(|e| e.urgency.as_deref()).collect()
}

/// Counts every concern on every entry.
pub fn concern_distribution(entries: &[FlowEntry]) -> Distribution {
    entries
        .iter()
        .filter_map(|e| e.concerns.as_ref())
        .flatten()
        .map(String::as_str)
        .collect()
}

/// Counts fluid types, using the custom type for `Other`.
pub fn fluid_type_distribution(entries: &[FlowEntry]) -> Distribution {
    entries
        .iter()
        .filter_map(|e| e.fluid_intake.as_ref())
        .map(|f| f.label())
        .collect()
}

// ========== Fluid intake ==========

/// Mean fluid intake in mL over entries that carry one.
pub fn average_fluid_intake_ml(entries: &[FlowEntry]) -> f64 {
    let amounts: Vec<f64> = entries.iter().filter_map(FlowEntry::fluid_intake_ml).collect();
    average(&amounts)
}

/// Classifies the change from `first` to `second` average.
///
/// A zero or non-finite baseline yields [`Trend::Stable`].
pub fn classify_trend(first: f64, second: f64) -> Trend {
    if first == 0.0 {
        return Trend::Stable;
    }
    let pct = (second - first) / first * 100.0;
    if !pct.is_finite() {
        Trend::Stable
    } else if pct > TREND_THRESHOLD_PCT {
        Trend::Up
    } else if pct < -TREND_THRESHOLD_PCT {
        Trend::Down
    } else {
        Trend::Stable
    }
}

/// Compares the earlier and later halves of fluid intake over time.
///
/// Returns `None` with fewer than [`TREND_MIN_ENTRIES`] fluid-intake entries.
/// The split point is `len / 2`, so with an odd count the later half holds
/// the extra entry.
pub fn fluid_intake_trend(entries: &[FlowEntry]) -> Option<Trend> {
    let mut with_intake: Vec<&FlowEntry> =
        entries.iter().filter(|e| e.fluid_intake.is_some()).collect();
    if with_intake.len() < TREND_MIN_ENTRIES {
        return None;
    }
    with_intake.sort_by_key(|e| e.timestamp);

    let amounts: Vec<f64> = with_intake
        .iter()
        .filter_map(|e| e.fluid_intake_ml())
        .collect();
    let (first, second) = amounts.split_at(amounts.len() / 2);
    Some(classify_trend(average(first), average(second)))
}

// ========== Monthly grouping ==========

/// Entries sharing a calendar month, with precomputed averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyGroup {
    /// `YYYY-MM`.
    pub key: String,
    /// e.g. `January 2024`.
    pub label: String,
    /// Newest first.
    pub entries: Vec<FlowEntry>,
    pub average_flow_rate: f64,
    pub average_volume: f64,
    pub average_duration: f64,
}

/// Buckets entries by month, most recent month first.
pub fn group_by_month(entries: &[FlowEntry]) -> Vec<MonthlyGroup> {
    let mut sorted: Vec<&FlowEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| std::cmp::Reverse(e.timestamp));

    let mut buckets: Vec<(String, Vec<FlowEntry>)> = Vec::new();
    for entry in sorted {
        let key = entry.timestamp.format("%Y-%m").to_string();
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(entry.clone()),
            None => buckets.push((key, vec![entry.clone()])),
        }
    }

    buckets
        .into_iter()
        .map(|(key, entries)| {
            let label = entries.first().map_or_else(String::new, |e| month_label(e.timestamp));
            let field = |f: fn(&FlowEntry) -> f64| average(&entries.iter().map(f).collect::<Vec<_>>());
            MonthlyGroup {
                average_flow_rate: field(|e| e.flow_rate),
                average_volume: field(|e| e.volume),
                average_duration: field(|e| e.duration),
                key,
                label,
                entries,
            }
        })
        .collect()
}

/// Full month name and year, e.g. `March 2025`.
pub fn month_label(timestamp: DateTime<Utc>) -> String {
    format!(
        "{} {}",
        MONTH_NAMES[timestamp.month0() as usize],
        timestamp.year()
    )
}

// ========== Regression ==========

/// A least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn at(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// `(fluid intake mL, flow rate)` pairs for entries with fluid intake.
pub fn intake_flow_points(entries: &[FlowEntry]) -> Vec<(f64, f64)> {
    entries
        .iter()
        .filter_map(|e| e.fluid_intake_ml().map(|ml| (ml, e.flow_rate)))
        .collect()
}

/// Ordinary least squares over `(x, y)` points.
///
/// Returns `None` with fewer than [`REGRESSION_MIN_POINTS`] points or when
/// every x is equal up to rounding, which leaves the slope undefined.
#[allow(clippy::cast_precision_loss)]
pub fn linear_regression(points: &[(f64, f64)]) -> Option<TrendLine> {
    if points.len() < REGRESSION_MIN_POINTS {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|&(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

    let (mut sxx, mut sxy) = (0.0, 0.0);
    for &(x, y) in points {
        let dx = x - mean_x;
        sxx = dx.mul_add(dx, sxx);
        sxy = dx.mul_add(y - mean_y, sxy);
    }

    // Identical x values leave only the rounding error of the mean.
    let rounding = 4.0 * f64::EPSILON * mean_x.abs();
    if !sxx.is_finite() || sxx <= n * rounding * rounding {
        return None;
    }
    let slope = sxy / sxx;
    let intercept = slope.mul_add(-mean_x, mean_y);
    (slope.is_finite() && intercept.is_finite()).then_some(TrendLine { slope, intercept })
}

// ========== Comparison & summary ==========

/// How a new reading compares with an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// More than 10% above.
    Above,
    /// Within 10%.
    Similar,
    /// More than 10% below.
    Below,
}

impl Comparison {
    pub fn of(current: f64, average: f64) -> Self {
        if current > average * 1.1 {
            Self::Above
        } else if current < average * 0.9 {
            Self::Below
        } else {
            Self::Similar
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Similar => "similar",
            Self::Below => "below",
        }
    }
}

/// Everything the statistics panel shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub entry_count: usize,
    pub average_flow_rate: f64,
    pub average_volume: f64,
    pub average_duration: f64,
    pub recent_average_flow_rate: f64,
    pub most_common_color: Option<String>,
    pub most_common_urgency: Option<String>,
    pub most_common_concern: Option<String>,
    pub fluid_intake_count: usize,
    pub average_fluid_intake_ml: f64,
    pub most_common_fluid_type: Option<String>,
    pub fluid_intake_trend: Option<Trend>,
}

impl Summary {
    pub fn compute(entries: &[FlowEntry], now: DateTime<Utc>) -> Self {
        let field = |f: fn(&FlowEntry) -> f64| average(&entries.iter().map(f).collect::<Vec<_>>());
        let top = |d: Distribution| d.most_common().map(str::to_string);
        Self {
            entry_count: entries.len(),
            average_flow_rate: field(|e| e.flow_rate),
            average_volume: field(|e| e.volume),
            average_duration: field(|e| e.duration),
            recent_average_flow_rate: windowed_average(entries, Window::LastWeek, now),
            most_common_color: top(color_distribution(entries)),
            most_common_urgency: top(urgency_distribution(entries)),
            most_common_concern: top(concern_distribution(entries)),
            fluid_intake_count: entries.iter().filter(|e| e.fluid_intake.is_some()).count(),
            average_fluid_intake_ml: average_fluid_intake_ml(entries),
            most_common_fluid_type: top(fluid_type_distribution(entries)),
            fluid_intake_trend: fluid_intake_trend(entries),
        }
    }
}
