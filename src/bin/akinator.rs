//! Akinator CLI - Twenty-questions food guesser
//!
//! This CLI provides:
//! - Interactive games with the entropy or reward strategy
//! - Oracle simulations over the whole catalog
//! - A listing of the question asked for each attribute

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "akinator")]
#[command(version, about = "Twenty-questions guesser over a food catalog", long_about = None)]
struct Cli {
    /// Log debug events to stderr (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(akinator::cli::commands::play::PlayArgs),

    /// Play every catalog item against an oracle player
    Simulate(akinator::cli::commands::simulate::SimulateArgs),

    /// Print the question text for every attribute
    Questions(akinator::cli::commands::questions::QuestionsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    akinator::cli::logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => akinator::cli::commands::play::execute(args),
        Commands::Simulate(args) => akinator::cli::commands::simulate::execute(args),
        Commands::Questions(args) => akinator::cli::commands::questions::execute(args),
    }
}
