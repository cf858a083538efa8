use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ft_cli::commands::{
    add, backup, chart, dark_mode, delete, export, import, list, mock, resources, stats,
};
use ft_cli::{Cli, Commands, Config, MockAction, ResourcesAction, Toggle};
use ft_db::Store;

/// Load config and open the store, ensuring the parent directory exists.
fn open_store(config_path: Option<&Path>) -> Result<Store> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    Store::open(&config.database_path)
        .with_context(|| format!("failed to open {}", config.database_path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // try_init: tests may have installed a subscriber already
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let store = open_store(cli.config.as_deref())?;
    let now = Utc::now();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Add(args) => add::run(&mut out, &store, args, now)?,
        Commands::List { expand, json } => list::run(&mut out, &store, expand, json)?,
        Commands::Delete { timestamp } => {
            delete::run(&mut out, &store, &timestamp)?;
        }
        Commands::Stats { json } => stats::run(&mut out, &store, json, now)?,
        Commands::Export { output } => {
            export::run(&mut out, &store, output.as_deref())?;
        }
        Commands::Import { file } => {
            import::run(&mut out, &store, &file, now)?;
        }
        Commands::Mock { action } => match action {
            MockAction::Generate { start, end } => {
                let mut rng = rand::thread_rng();
                mock::generate_run(&mut out, &store, start, end, now.date_naive(), &mut rng)?;
            }
            MockAction::Purge => {
                mock::purge_run(&mut out, &store)?;
            }
        },
        Commands::Backup { output } => {
            backup::backup_run(&mut out, &store, output.as_deref())?;
        }
        Commands::Restore { file } => {
            backup::restore_run(&mut out, &store, &file)?;
        }
        Commands::Resources(action) => match action {
            ResourcesAction::List => resources::list(&mut out, &store)?,
            ResourcesAction::Add {
                title,
                url,
                category,
            } => {
                resources::add(&mut out, &store, &title, &url, &category)?;
            }
            ResourcesAction::Delete { id } => resources::delete(&mut out, &store, &id)?,
        },
        Commands::DarkMode { state } => {
            dark_mode::run(&mut out, &store, state.map(|s| s == Toggle::On))?;
        }
        Commands::Chart { kind } => chart::run(&mut out, &store, kind, now)?,
    }

    out.flush()?;
    Ok(())
}
