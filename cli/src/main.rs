use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tracks::process::tracks_fix;

#[derive(Parser)]
#[command(name = "tscn-toolkit")]
#[command(about = "CLI for Godot scene (.tscn) repair", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animation track operations (Fix)
    #[command(subcommand)]
    Tracks(TracksCommands),
}

#[derive(Subcommand)]
enum TracksCommands {
    /// Insert missing track type properties into a scene file, in place
    Fix {
        /// Input .tscn scene file
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Tracks(cmd) => match cmd {
            TracksCommands::Fix { input } => tracks_fix(input)?,
        },
    }

    Ok(())
}
