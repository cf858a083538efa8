//! CLI subcommand implementations.

pub mod add;
pub mod backup;
pub mod chart;
pub mod dark_mode;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod mock;
pub mod resources;
pub mod stats;
pub mod util;
