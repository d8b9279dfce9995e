//! # Flip Terminal Memory Game
//!
//! Entry point for the game binary. Parses command line arguments, points
//! logging at a file (the TUI owns the terminal), builds the board, and runs
//! the event loop.
//!
//! ## Usage
//! Run with `cargo run --release`. Pass `--seed` to replay an exact deal,
//! `--grid-size` to start bigger or smaller than the default 4x4.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flip::{App, Board, DealRng};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Cards per grid side, 2 to 8. Out-of-range values fall back to 4.
    #[clap(short, long, default_value_t = flip::DEFAULT_SIZE)]
    grid_size: usize,

    /// Shuffle seed for reproducible deals.
    #[clap(short, long)]
    seed: Option<u64>,

    /// How long a mismatched pair stays revealed, in milliseconds.
    #[clap(long, default_value_t = 1000)]
    mismatch_delay_ms: u64,

    /// Where log output goes. Filter with RUST_LOG (default: info).
    #[clap(long, default_value = "flip.log")]
    log_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(&args.log_file)?;

    let rng = match args.seed {
        Some(seed) => DealRng::seeded(seed),
        None => DealRng::from_entropy(),
    };
    let board = Board::new(
        args.grid_size,
        Duration::from_millis(args.mismatch_delay_ms),
        rng,
    );

    let mut app = App::new(board);
    flip::tui::run(&mut app).context("terminal event loop failed")?;

    Ok(())
}

/// Sends tracing output to the log file, filtered by RUST_LOG.
fn init_tracing(path: &PathBuf) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
