//! Mentor Control - terminal front end for the hint pipeline.
//!
//! Stands in for the original popup: reads a problem statement from a file
//! or stdin, renders the difficulty/topic badge and the three hints.

mod commands;
mod display;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mentorctl")]
#[command(about = "Progressive AI hints for competitive programming problems", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate three progressive hints for a problem statement
    Hints {
        /// Read the problem statement from a file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Reveal only the first N hints (1-3)
        #[arg(long, default_value_t = 3)]
        reveal: usize,

        /// Emit the analysis and hints as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify difficulty and topics without calling the hint provider
    Analyze {
        /// Read the problem statement from a file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Emit the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show provider configuration status
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Hints { file, reveal, json } => commands::hints(file, reveal, json).await,
        Commands::Analyze { file, json } => commands::analyze(file, json),
        Commands::Config => commands::config(),
    }
}
