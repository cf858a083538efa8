//! Flow tracker CLI library.
//!
//! This crate provides the CLI interface for the flow tracker.

mod cli;
pub mod commands;
mod config;

pub use cli::{ChartKind, Cli, Commands, MockAction, ResourcesAction, Toggle};
pub use config::Config;
