#![forbid(unsafe_code)]

mod args;
mod commands;
mod render;

use anyhow::Context as _;
use args::Cli;
use clap::Parser as _;
use st_storage::SqliteStore;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "SPACETIME_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut store = SqliteStore::open(&cli.storage_dir).with_context(|| {
        format!("failed to open store in {}", cli.storage_dir.display())
    })?;

    let output = commands::run(&mut store, cli.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
