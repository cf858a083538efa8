//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::add::AddArgs;

/// Fluid flow health tracker.
///
/// Records voiding measurements with optional tags and fluid intake, and
/// summarizes them over time.
#[derive(Debug, Parser)]
#[command(name = "ft", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a new entry.
    Add(AddArgs),

    /// Show entries grouped by month.
    List {
        /// Show every entry instead of only the monthly summaries.
        #[arg(long)]
        expand: bool,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Delete every entry recorded at the given timestamp.
    Delete {
        /// ISO-8601 timestamp, as shown by `ft list --expand`.
        timestamp: String,
    },

    /// Show summary statistics.
    Stats {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Export all entries as CSV.
    Export {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Append entries from a CSV file.
    Import {
        /// CSV file to read.
        file: PathBuf,
    },

    /// Generate or remove mock data.
    Mock {
        #[command(subcommand)]
        action: MockAction,
    },

    /// Write a JSON backup of all entries.
    Backup {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all entries with the contents of a JSON backup.
    Restore {
        /// Backup file to read.
        file: PathBuf,
    },

    /// Manage reference links.
    #[command(subcommand)]
    Resources(ResourcesAction),

    /// Show or set the dark mode preference.
    DarkMode {
        /// New setting. Omit to print the current one.
        state: Option<Toggle>,
    },

    /// Print chart data as text.
    Chart {
        #[arg(value_enum)]
        kind: ChartKind,
    },
}

#[derive(Debug, Subcommand)]
pub enum MockAction {
    /// Add three mock entries per day over a date range.
    Generate {
        /// First day (YYYY-MM-DD). Defaults to three months before today.
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<NaiveDate>,
    },

    /// Remove all mock entries.
    Purge,
}

#[derive(Debug, Subcommand)]
pub enum ResourcesAction {
    /// List default and custom resources.
    List,

    /// Add a custom resource.
    Add {
        #[arg(long)]
        title: String,

        /// Link target. `https://` is added when no scheme is given.
        #[arg(long)]
        url: String,

        #[arg(long)]
        category: String,
    },

    /// Delete a custom resource by id.
    Delete { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Flow rate and fluid intake over time.
    Line,
    /// Average flow rate by weekday and hour.
    Heatmap,
    /// Fluid intake against flow rate, with a trend line.
    Scatter,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_repeated_concerns() {
        let cli = Cli::parse_from([
            "ft",
            "add",
            "--volume",
            "300",
            "--duration",
            "20",
            "--concern",
            "Pain",
            "--concern",
            "Burning",
        ]);
        let Some(Commands::Add(args)) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.concern, vec!["Pain", "Burning"]);
    }

    #[test]
    fn parses_mock_generate_dates() {
        let cli = Cli::parse_from(["ft", "mock", "generate", "--start", "2025-01-01"]);
        let Some(Commands::Mock {
            action: MockAction::Generate { start, end },
        }) = cli.command
        else {
            panic!("expected mock generate");
        };
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(end, None);
    }

    #[test]
    fn parses_dark_mode_toggle() {
        let cli = Cli::parse_from(["ft", "dark-mode", "on"]);
        assert!(matches!(
            cli.command,
            Some(Commands::DarkMode {
                state: Some(Toggle::On)
            })
        ));
    }
}
