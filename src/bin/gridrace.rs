//! gridrace CLI - play the grid race or train the agent headlessly

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gridrace")]
#[command(version, about = "Human-vs-agent grid race with a Q-learning core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively against the learning agent
    Play(gridrace::cli::commands::play::PlayArgs),

    /// Train the agent against a simulated human
    Train(gridrace::cli::commands::train::TrainArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => gridrace::cli::commands::play::execute(args),
        Commands::Train(args) => gridrace::cli::commands::train::execute(args),
    }
}
