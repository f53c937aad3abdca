//! CLI frontend for the Delve text adventure.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "delve",
    about = "Delve — a turn-based text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session in the demo world
    Play,

    /// Search the built-in wiki (no query lists every article)
    Wiki {
        /// Search terms
        query: Vec<String>,
    },

    /// List every game command with its aliases and help text
    Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play => commands::play::run(),
        Commands::Wiki { query } => commands::wiki::run(&query),
        Commands::Commands => commands::list::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
