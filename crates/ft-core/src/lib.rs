//! Core domain logic for the flow tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Entries: the recorded measurement and its validation
//! - CSV: export and the lenient two-layout import
//! - Statistics: averages, distributions, monthly grouping, trends
//! - Charts: numeric series behind the line, heatmap and scatter views
//! - Mock data, custom resources, and JSON backups
//!
//! Functions take the entry list explicitly; nothing here holds state.

pub mod backup;
pub mod chart;
pub mod csv;
mod entry;
pub mod mock;
pub mod resource;
pub mod stats;
pub mod types;

pub use csv::{ImportError, ImportReport, Layout, LineError, LineErrorKind, export_csv, import_csv};
pub use entry::{EntryDraft, FlowEntry, FluidIntake, ML_PER_OZ, NOTES_MAX_CHARS};
pub use resource::{CustomResource, DEFAULT_RESOURCES, ResourceError};
pub use stats::{Comparison, MonthlyGroup, Summary, TrendLine, Window};
pub use types::{FluidUnit, Trend, ValidationError};
