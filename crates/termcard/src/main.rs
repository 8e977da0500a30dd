//! termcard CLI - GitHub profile terminal card generator.
//!
//! Provides commands for:
//! - `generate`: Fetch a GitHub profile and write the terminal SVG
//! - `preview`: Render mock data in one or all themes
//! - `snake`: Print an embedded snake fragment

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GenerateArgs, PreviewArgs, SnakeArgs};
use output::Output;

/// termcard - GitHub profile terminal card generator.
#[derive(Parser)]
#[command(name = "termcard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the profile and write the terminal SVG.
    Generate(GenerateArgs),
    /// Render previews from mock data.
    Preview(PreviewArgs),
    /// Print the embedded snake fragment for a snake SVG.
    Snake(SnakeArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Generate(args) => args.verbose,
            Self::Preview(args) => args.verbose,
            Self::Snake(_) => false,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
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
        Commands::Generate(args) => args.execute(),
        Commands::Preview(args) => args.execute(),
        Commands::Snake(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
