//! Joymap CLI - Portable DCS joystick binding templates
//!
//! This is the main entry point for the joymap command-line interface.

mod cli;
mod commands;
mod output;
mod version;

use anyhow::Result;
use clap::Parser;
use joymap_core::RunOptions;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.debug);

    // Verbosity and dry-run travel with every operation call
    let options = RunOptions::new(cli.debug, cli.noaction);

    // Run command
    match cli.command {
        Commands::Fingerprint(args) => commands::fingerprint::run(args, options),
        Commands::Extract(args) => commands::extract::run(args, options),
        Commands::Restore(args) => commands::restore::run(args, options),
        Commands::Version(args) => commands::version::run(args),
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("trace")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
