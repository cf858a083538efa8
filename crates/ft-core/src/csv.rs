//! CSV export and import.
//!
//! Export always writes the full column set. Import accepts two layouts:
//!
//! - **Date/time layout**: the header mentions both `date` and `time`. Rows
//!   carry a separate date (`MM/DD/YY`, `MM/DD/YYYY` or `YYYY-MM-DD`) and time
//!   (24-hour or `H:MM AM/PM`). Numeric columns are located by header name,
//!   falling back to `Duration, Volume, Rate` at positions 2..=4.
//! - **Timestamp layout**: anything else. Rows are
//!   `timestamp, volume, duration, flowRate` with an ISO-8601 timestamp.
//!
//! Import is line-tolerant: a bad line is logged and skipped, a bad date or
//! time falls back to the import time, and numbers that fail to parse become
//! NaN rather than errors.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;
use thiserror::Error;

use crate::entry::{FlowEntry, FluidIntake};

/// Header written by [`export_csv`].
pub const EXPORT_HEADER: &str = "Date,Time,Volume (mL),Duration (s),Flow Rate (mL/s),Color,Urgency,Concerns,Notes,Fluid Type,Fluid Custom Type,Fluid Amount,Fluid Unit";

static AM_PM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+)\s*([AP]M)").expect("AM/PM regex is valid"));

/// Longest numeric prefix, the way a lenient float parser reads it.
static NUMBER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("number prefix regex is valid")
});

/// Whole-file import failure. Nothing is imported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("CSV input has no header line")]
    MissingHeader,
}

/// A single line that could not be imported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct LineError {
    /// 1-based line number in the input, header included.
    pub line: usize,
    pub kind: LineErrorKind,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineErrorKind {
    #[error("missing {column} column")]
    MissingColumn { column: &'static str },
    #[error("invalid timestamp: {value}")]
    InvalidTimestamp { value: String },
}

/// Result of a tolerant import.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub layout: Layout,
    /// Parsed entries, in file order. Callers append these to their list.
    pub entries: Vec<FlowEntry>,
    /// Lines that were skipped.
    pub errors: Vec<LineError>,
    /// Lines whose date/time failed to parse and were stamped with `now`.
    pub timestamp_fallbacks: Vec<usize>,
}

/// Row layout chosen from the header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    DateTime(ColumnMap),
    Timestamp,
}

/// Column positions for the date/time layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub duration: usize,
    pub volume: usize,
    pub flow_rate: usize,
    pub color: Option<usize>,
    pub urgency: Option<usize>,
    pub concerns: Option<usize>,
    pub notes: Option<usize>,
    pub fluid_type: Option<usize>,
    pub fluid_custom_type: Option<usize>,
    pub fluid_amount: Option<usize>,
    pub fluid_unit: Option<usize>,
}

impl ColumnMap {
    fn from_header(names: &[String]) -> Self {
        let contains = |needle: &str| names.iter().position(|n| n.contains(needle));
        let exact = |name: &str| names.iter().position(|n| n == name);
        Self {
            duration: contains("duration").unwrap_or(2),
            volume: contains("volume").unwrap_or(3),
            flow_rate: contains("rate").unwrap_or(4),
            color: exact("color"),
            urgency: exact("urgency"),
            concerns: exact("concerns"),
            notes: exact("notes"),
            fluid_type: exact("fluid type"),
            fluid_custom_type: exact("fluid custom type"),
            fluid_amount: exact("fluid amount"),
            fluid_unit: exact("fluid unit"),
        }
    }
}

impl Layout {
    /// Picks the layout from a header line, case-insensitively.
    pub fn detect(header: &str) -> Self {
        let lower = header.to_lowercase();
        if lower.contains("date") && lower.contains("time") {
            let names: Vec<String> = split_fields(&lower)
                .into_iter()
                .map(|name| name.trim().to_string())
                .collect();
            Self::DateTime(ColumnMap::from_header(&names))
        } else {
            Self::Timestamp
        }
    }
}

// ========== Export ==========

/// Serializes entries to CSV in list order.
pub fn export_csv(entries: &[FlowEntry]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    for entry in entries {
        out.push('\n');
        out.push_str(&export_row(entry));
    }
    out
}

fn export_row(entry: &FlowEntry) -> String {
    let concerns = entry
        .concerns
        .as_ref()
        .map(|c| c.join("; "))
        .unwrap_or_default();
    let fluid = entry.fluid_intake.as_ref();
    let fields = [
        entry.timestamp.format("%Y-%m-%d").to_string(),
        entry.timestamp.format("%H:%M:%S").to_string(),
        format_number(entry.volume),
        format_number(entry.duration),
        format_number(entry.flow_rate),
        bare(entry.color.as_deref().unwrap_or_default()),
        bare(entry.urgency.as_deref().unwrap_or_default()),
        quoted(&concerns),
        quoted(entry.notes.as_deref().unwrap_or_default()),
        quoted(fluid.map_or("", |f| f.fluid_type.as_str())),
        quoted(fluid.and_then(|f| f.custom_type.as_deref()).unwrap_or_default()),
        quoted(&fluid.map(|f| format_number(f.amount)).unwrap_or_default()),
        quoted(fluid.map_or("", |f| f.unit.as_str())),
    ];
    fields.join(",")
}

/// Formats a number with its shortest round-trip representation.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        format!("{sign}Infinity")
    } else {
        value.to_string()
    }
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Writes a value unquoted unless it would break the row.
fn bare(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        quoted(value)
    } else {
        value.to_string()
    }
}

// ========== Import ==========

/// Splits one CSV line into fields.
///
/// Inside quotes a doubled quote is a literal quote and commas are data. Any
/// other quote toggles the in-quotes state for the rest of the line, so an
/// unmatched quote swallows the remaining separators.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Parses a number leniently: the longest numeric prefix wins, anything else is NaN.
pub fn parse_number(value: &str) -> f64 {
    NUMBER_PREFIX_RE
        .find(value.trim_start())
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(f64::NAN)
}

/// Parses CSV text into new entries.
///
/// `now` stamps rows whose date or time cannot be parsed. Only a missing
/// header fails the whole import; everything else is reported per line.
pub fn import_csv(text: &str, now: DateTime<Utc>) -> Result<ImportReport, ImportError> {
    let mut lines = text.split('\n');
    let header = lines
        .next()
        .filter(|h| !h.trim().is_empty())
        .ok_or(ImportError::MissingHeader)?;
    let layout = Layout::detect(header);
    tracing::debug!(?layout, "detected CSV layout");

    let mut report = ImportReport {
        layout,
        entries: Vec::new(),
        errors: Vec::new(),
        timestamp_fallbacks: Vec::new(),
    };

    for (idx, raw) in lines.enumerate() {
        let line_no = idx + 2;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let fields = split_fields(line);
        let parsed = match &report.layout {
            Layout::DateTime(columns) => {
                parse_date_time_row(&fields, columns, line_no, now, &mut report.timestamp_fallbacks)
            }
            Layout::Timestamp => parse_timestamp_row(&fields),
        };
        match parsed {
            Ok(entry) => report.entries.push(entry),
            Err(kind) => {
                let err = LineError {
                    line: line_no,
                    kind,
                };
                tracing::warn!(error = %err, line, "skipping malformed CSV line");
                report.errors.push(err);
            }
        }
    }

    Ok(report)
}

fn parse_date_time_row(
    fields: &[String],
    columns: &ColumnMap,
    line_no: usize,
    now: DateTime<Utc>,
    fallbacks: &mut Vec<usize>,
) -> Result<FlowEntry, LineErrorKind> {
    let date = fields
        .first()
        .ok_or(LineErrorKind::MissingColumn { column: "date" })?
        .replace('"', "");
    let time = fields
        .get(1)
        .ok_or(LineErrorKind::MissingColumn { column: "time" })?
        .replace('"', "");
    let (date, time) = (date.trim(), time.trim());

    let timestamp = parse_date_time(date, time).unwrap_or_else(|| {
        tracing::warn!(line = line_no, date, time, "unparseable date/time, using current time");
        fallbacks.push(line_no);
        now
    });

    let number = |idx: usize| fields.get(idx).map_or(f64::NAN, |v| parse_number(v));
    let mut entry = FlowEntry::with_rate(
        timestamp,
        number(columns.volume),
        number(columns.duration),
        number(columns.flow_rate),
    );

    let text = |idx: Option<usize>| {
        idx.and_then(|i| fields.get(i))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    entry.color = text(columns.color);
    entry.urgency = text(columns.urgency);
    entry.concerns = text(columns.concerns)
        .map(|c| {
            c.split(';')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|c| !c.is_empty());
    entry.notes = columns
        .notes
        .and_then(|i| fields.get(i))
        .filter(|v| !v.trim().is_empty())
        .cloned();
    entry.fluid_intake = text(columns.fluid_type).map(|fluid_type| FluidIntake {
        fluid_type,
        custom_type: text(columns.fluid_custom_type),
        amount: columns
            .fluid_amount
            .and_then(|i| fields.get(i))
            .map_or(f64::NAN, |v| parse_number(v)),
        unit: text(columns.fluid_unit)
            .and_then(|u| u.parse().ok())
            .unwrap_or_default(),
    });

    Ok(entry)
}

fn parse_timestamp_row(fields: &[String]) -> Result<FlowEntry, LineErrorKind> {
    let raw = fields
        .first()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or(LineErrorKind::MissingColumn {
            column: "timestamp",
        })?;
    let timestamp = parse_iso_timestamp(raw).ok_or_else(|| LineErrorKind::InvalidTimestamp {
        value: raw.to_string(),
    })?;
    let number = |idx: usize| fields.get(idx).map_or(f64::NAN, |v| parse_number(v));
    Ok(FlowEntry::with_rate(timestamp, number(1), number(2), number(3)))
}

/// Combines a CSV date and time into a UTC timestamp.
fn parse_date_time(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = date.split('/').collect();
    let date = if let [month, day, year] = parts.as_slice() {
        let year = if year.trim().len() == 2 {
            format!("20{}", year.trim())
        } else {
            year.trim().to_string()
        };
        NaiveDate::from_ymd_opt(
            year.parse().ok()?,
            month.trim().parse().ok()?,
            day.trim().parse().ok()?,
        )?
    } else {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?
    };
    Some(date.and_time(parse_time(time)?).and_utc())
}

/// Parses a 24-hour time or a `H:MM AM/PM` time.
fn parse_time(time: &str) -> Option<NaiveTime> {
    if time.contains("AM") || time.contains("PM") {
        let caps = AM_PM_RE.captures(time)?;
        let mut hours: u32 = caps[1].parse().ok()?;
        let minutes: u32 = caps[2].parse().ok()?;
        match &caps[3] {
            "PM" if hours < 12 => hours += 12,
            "AM" if hours == 12 => hours = 0,
            _ => {}
        }
        return NaiveTime::from_hms_opt(hours, minutes, 0);
    }
    ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(time, fmt).ok())
}

/// Parses an ISO-8601 timestamp; offset-less values are taken as UTC.
pub fn parse_iso_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    use crate::types::FluidUnit;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    // ========== Splitter ==========

    #[test]
    fn split_handles_quoted_commas_and_escaped_quotes() {
        let fields = split_fields(r#"a,"b,c","He said ""ok""",,"""#);
        assert_eq!(fields, vec!["a", "b,c", r#"He said "ok""#, "", ""]);
    }

    #[test]
    fn split_unmatched_quote_swallows_rest_of_line() {
        let fields = split_fields(r#"a,"b,c,d"#);
        assert_eq!(fields, vec!["a", "b,c,d"]);
    }

    #[test]
    fn split_empty_quoted_fields_are_empty() {
        assert_eq!(split_fields(r#""","",x"#), vec!["", "", "x"]);
    }

    // ========== Numbers ==========

    #[test]
    #[expect(clippy::float_cmp, reason = "parsed literals are exact")]
    fn parse_number_is_lenient() {
        assert_eq!(parse_number("12.5"), 12.5);
        assert_eq!(parse_number("  42ml"), 42.0);
        assert_eq!(parse_number("-3e2x"), -300.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("1e"), 1.0);
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("").is_nan());
        assert!(parse_number("Infinity").is_infinite());
    }

    #[test]
    fn format_number_matches_shortest_representation() {
        assert_eq!(format_number(300.0), "300");
        assert_eq!(format_number(7.5), "7.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    // ========== Export ==========

    #[test]
    fn export_writes_header_and_rows_in_list_order() {
        let mut second = FlowEntry::new(at(2024, 1, 5, 7, 30, 0), 300.0, 20.0);
        second.color = Some("Clear".to_string());
        second.urgency = Some("Normal".to_string());
        second.concerns = Some(vec!["Straining".to_string(), "Pain".to_string()]);
        second.notes = Some(r#"He said "ok""#.to_string());
        second.fluid_intake = Some(FluidIntake {
            fluid_type: "Other".to_string(),
            custom_type: Some("Kombucha".to_string()),
            amount: 12.0,
            unit: FluidUnit::Oz,
        });
        let first = FlowEntry::new(at(2024, 2, 1, 20, 5, 9), 250.0, 40.0);

        let csv = export_csv(&[first, second]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], EXPORT_HEADER);
        assert_eq!(
            lines[1],
            r#"2024-02-01,20:05:09,250,40,6.25,,,"","","","","","""#
        );
        assert_eq!(
            lines[2],
            r#"2024-01-05,07:30:00,300,20,15,Clear,Normal,"Straining; Pain","He said ""ok""","Other","Kombucha","12","oz""#
        );
    }

    #[test]
    fn export_of_empty_list_is_header_only() {
        assert_eq!(export_csv(&[]), EXPORT_HEADER);
    }

    #[test]
    fn export_quotes_tags_containing_commas() {
        let mut entry = FlowEntry::new(at(2024, 1, 5, 7, 30, 0), 300.0, 20.0);
        entry.color = Some("Red, bright".to_string());
        let csv = export_csv(&[entry]);
        assert!(csv.contains(r#",15,"Red, bright","#));
    }

    // ========== Layout detection ==========

    #[test]
    fn detects_date_time_layout() {
        let layout = Layout::detect("Date,Time,Duration (s),Volume (mL),Rate (mL/s)");
        let Layout::DateTime(columns) = layout else {
            panic!("expected date/time layout");
        };
        assert_eq!((columns.duration, columns.volume, columns.flow_rate), (2, 3, 4));
        assert_eq!(columns.notes, None);
    }

    #[test]
    fn detects_timestamp_layout() {
        assert_eq!(
            Layout::detect("timestamp,volume,duration,flowRate"),
            Layout::Timestamp
        );
    }

    #[test]
    fn export_header_maps_columns_by_name() {
        let Layout::DateTime(columns) = Layout::detect(EXPORT_HEADER) else {
            panic!("expected date/time layout");
        };
        assert_eq!((columns.volume, columns.duration, columns.flow_rate), (2, 3, 4));
        assert_eq!(columns.notes, Some(8));
        assert_eq!(columns.fluid_custom_type, Some(10));
        assert_eq!(columns.fluid_unit, Some(12));
    }

    #[test]
    fn headerless_input_is_rejected() {
        assert_eq!(import_csv("", now()).unwrap_err(), ImportError::MissingHeader);
        assert_eq!(
            import_csv("  \n1,2,3", now()).unwrap_err(),
            ImportError::MissingHeader
        );
    }

    // ========== Date/time layout ==========

    #[test]
    fn imports_date_time_layout_with_us_dates_and_am_pm() {
        let text = "Date,Time,Duration (s),Volume (mL),Rate (mL/s)\n\
                    01/05/24,7:30 AM,20,300,15\n\
                    1/6/2024,12:15 AM,25,250,10\n\
                    01/07/24,12:45 PM,30,300,10\n\
                    01/08/24,9:05 PM,30,300,10\n\
                    01/09/24,18:20,30,300,10\n";
        let report = import_csv(text, now()).unwrap();
        assert!(report.errors.is_empty());
        assert!(report.timestamp_fallbacks.is_empty());
        let stamps: Vec<_> = report.entries.iter().map(|e| e.timestamp).collect();
        assert_eq!(
            stamps,
            vec![
                at(2024, 1, 5, 7, 30, 0),
                at(2024, 1, 6, 0, 15, 0),
                at(2024, 1, 7, 12, 45, 0),
                at(2024, 1, 8, 21, 5, 0),
                at(2024, 1, 9, 18, 20, 0),
            ]
        );
        let first = &report.entries[0];
        assert_eq!(
            (first.duration, first.volume, first.flow_rate),
            (20.0, 300.0, 15.0)
        );
    }

    #[test]
    fn unparseable_date_falls_back_to_now_and_keeps_line() {
        let text = "Date,Time,Duration (s),Volume (mL),Rate (mL/s)\n\
                    01/05/24,07:30,20,300,15\n\
                    not-a-date,07:30,25,250,10\n\
                    01/07/24,08:00,30,300,10";
        let report = import_csv(text, now()).unwrap();
        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.entries[1].timestamp, now());
        assert_eq!(report.timestamp_fallbacks, vec![3]);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn bad_numbers_become_nan() {
        let text = "Date,Time,Duration (s),Volume (mL),Rate (mL/s)\n01/05/24,07:30,abc,300";
        let report = import_csv(text, now()).unwrap();
        let entry = &report.entries[0];
        assert!(entry.duration.is_nan());
        assert!(entry.flow_rate.is_nan());
        assert!((entry.volume - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn line_without_time_column_is_skipped() {
        let text = "Date,Time,Duration (s),Volume (mL),Rate (mL/s)\n01/05/24\n01/06/24,08:00,20,300,15";
        let report = import_csv(text, now()).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(
            report.errors,
            vec![LineError {
                line: 2,
                kind: LineErrorKind::MissingColumn { column: "time" },
            }]
        );
    }

    #[test]
    fn blank_lines_and_carriage_returns_are_ignored() {
        let text = "Date,Time,Duration (s),Volume (mL),Rate (mL/s)\r\n\r\n01/05/24,07:30,20,300,15\r\n\n";
        let report = import_csv(text, now()).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert!(report.errors.is_empty());
    }

    // ========== Timestamp layout ==========

    #[test]
    fn imports_timestamp_layout() {
        let text = "timestamp,volume,duration,flowRate\n\
                    2024-01-05T07:30:00.000Z,300,20,15\n\
                    2024-01-06T08:00:00,250,25,10";
        let report = import_csv(text, now()).unwrap();
        assert_eq!(report.layout, Layout::Timestamp);
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].timestamp, at(2024, 1, 5, 7, 30, 0));
        assert_eq!(report.entries[1].timestamp, at(2024, 1, 6, 8, 0, 0));
        assert!((report.entries[1].flow_rate - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_iso_timestamp_skips_only_that_line() {
        let text = "timestamp,volume,duration,flowRate\n\
                    yesterday,300,20,15\n\
                    2024-01-06T08:00:00Z,250,25,10";
        let report = import_csv(text, now()).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].line, 2);
        assert_eq!(
            report.errors[0].to_string(),
            "line 2: invalid timestamp: yesterday"
        );
    }

    // ========== Round trip ==========

    #[test]
    fn export_then_import_preserves_base_fields() {
        let entries = vec![
            FlowEntry::new(at(2024, 1, 5, 7, 30, 0), 300.0, 20.0),
            FlowEntry::new(at(2024, 3, 9, 22, 1, 59), 275.0, 33.0),
            FlowEntry::with_rate(at(2024, 12, 31, 23, 59, 59), 410.0, 41.0, 9.75),
        ];
        let report = import_csv(&export_csv(&entries), now()).unwrap();
        assert!(report.errors.is_empty());
        let tuples = |list: &[FlowEntry]| {
            list.iter()
                .map(|e| (e.timestamp, e.volume, e.duration, e.flow_rate))
                .collect::<Vec<_>>()
        };
        assert_eq!(tuples(&report.entries), tuples(&entries));
    }

    #[test]
    fn export_then_import_preserves_quoted_notes_and_extras() {
        let mut entry = FlowEntry::new(at(2024, 1, 5, 7, 30, 0), 300.0, 20.0);
        entry.notes = Some(r#"He said "ok", then left"#.to_string());
        entry.concerns = Some(vec!["Straining".to_string(), "Pain".to_string()]);
        entry.urgency = Some("Hold < 15 min".to_string());
        entry.fluid_intake = Some(FluidIntake {
            fluid_type: "Tea".to_string(),
            custom_type: None,
            amount: 8.0,
            unit: FluidUnit::Oz,
        });

        let report = import_csv(&export_csv(std::slice::from_ref(&entry)), now()).unwrap();
        assert_eq!(report.entries, vec![entry]);
    }
}
