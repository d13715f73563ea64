//! docnav CLI - Markdown navigation tree builder.
//!
//! Provides commands for:
//! - `tree`: Print the navigation tree of a data directory as JSON
//! - `props`: Print the flat URL path index as JSON

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{PropsArgs, TreeArgs};
use output::Output;

/// docnav - Markdown navigation tree builder.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the navigation tree as JSON.
    Tree(TreeArgs),
    /// Print the flat page index as JSON.
    Props(PropsArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Tree(args) => args.source.verbose,
            Self::Props(args) => args.source.verbose,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN.
    // Logs go to stderr so stdout stays valid JSON.
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Tree(args) => args.execute(),
        Commands::Props(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
