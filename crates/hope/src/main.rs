//! hope CLI - theme tooling.
//!
//! Provides commands for:
//! - `sidebar`: Generate structure sidebar data for a page manifest
//! - `migrate`: Convert legacy theme options to the current shape

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{MigrateArgs, SidebarArgs};
use output::Output;

/// hope - theme tooling.
#[derive(Parser)]
#[command(name = "hope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate sidebar data from a page manifest.
    Sidebar(SidebarArgs),
    /// Convert legacy theme options.
    Migrate(MigrateArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Sidebar(args) => args.verbose || args.debug,
        Commands::Migrate(args) => args.verbose,
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
        Commands::Sidebar(args) => args.execute(),
        Commands::Migrate(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
