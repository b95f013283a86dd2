//! HB CLI - Handbook site configuration.
//!
//! Provides commands for:
//! - `check`: Validate the site configuration
//! - `export`: Write the configuration as JSON for the site generator
//! - `locales`: Summarize declared locales

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, LocalesArgs};
use output::Output;

/// HB - Handbook site configuration.
#[derive(Parser)]
#[command(name = "hb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site configuration.
    Check(CheckArgs),
    /// Export the site configuration as JSON.
    Export(ExportArgs),
    /// List declared locales.
    Locales(LocalesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Check(args) => args.verbose,
        Commands::Export(args) => args.verbose,
        Commands::Locales(_) => false,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Locales(args) => args.execute(),
    };

    if let Err(err) = result {
        output.failure(&err);
        std::process::exit(1);
    }
}
