//! numhunt - terminal front end for the ten-cell target game.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use rust_numhunt::{FileStore, GameConfig, GameEngine, Scoreboard};
use std::path::PathBuf;
use std::process::ExitCode;

/// numhunt - pick three cells, hit the target
#[derive(Parser, Debug)]
#[command(name = "numhunt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Round length in seconds
    #[arg(short = 't', long, default_value = "180")]
    seconds: u32,

    /// Directory holding the saved scoreboard
    #[arg(long, default_value = ".numhunt")]
    data_dir: PathBuf,

    /// Write debug logs to this file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    if let Some(path) = &args.log {
        cli::init_logging(path)?;
    }

    // Generate seed if not provided
    let seed = args.seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let config = GameConfig::default()
        .with_seed(seed)
        .with_round_seconds(args.seconds);

    let scoreboard = Scoreboard::load(FileStore::new(&args.data_dir))
        .with_context(|| format!("failed to load scoreboard from {}", args.data_dir.display()))?;

    cli::run(GameEngine::new(config), scoreboard)
}
