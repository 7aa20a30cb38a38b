//! mem CLI - Entry point
//!
//! Usage: mem --save TEXT [--tags TEXT] | --search TEXT | --delete ID | --wipe

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mem::cli::Cli;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (stderr, so stdout stays clean)
    let default_filter = if cli.verbose { "mem=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    mem::cli::run(cli)
}
