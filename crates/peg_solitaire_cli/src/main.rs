//! Peg solitaire - terminal game

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use peg_solitaire::Board;
use peg_solitaire_cli::cli::{Cli, Command};
use peg_solitaire_cli::{
    game_log, prompt, session, GameConfig, GameLog, LogStats, ManualSelector, Mode, MoveSelector,
    Painter, RandomSelector,
};
use std::io::{self, BufRead, Write};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config)?
        .with_log_file(cli.log_file.clone())
        .with_size(cli.play.size)
        .with_mode(cli.play.mode)
        .with_seed(cli.play.seed)
        .with_no_color(cli.play.no_color);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Stats => run_stats(&config),
    }
}

/// Plays one game and logs its outcome
#[instrument(skip_all)]
fn run_play(config: &GameConfig) -> Result<()> {
    let mut log = GameLog::open(config.log_file()).context("Cannot record game outcomes")?;
    info!(path = %log.path().display(), "Logging outcomes");

    let painter = Painter::new(*config.color());
    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    let size = resolve_size(*config.size(), &mut input, &mut output)?;
    let mode = match config.mode() {
        Some(mode) => *mode,
        None => prompt::mode(&mut input, &mut output)?,
    };
    info!(size, %mode, "Starting game");

    let mut board = Board::new(size)?;
    let mut selector: Box<dyn MoveSelector> = match mode {
        Mode::Manual => Box::new(ManualSelector::new(input, io::stdout(), painter)),
        Mode::Random => Box::new(RandomSelector::new(*config.seed())),
    };

    log.scoped(&mut board, |board| {
        session::play(board, selector.as_mut(), &mut output, painter)
    })?;
    Ok(())
}

/// Uses the configured size if it is valid, otherwise asks
fn resolve_size<R: BufRead, W: Write>(
    configured: Option<usize>,
    input: &mut R,
    output: &mut W,
) -> Result<usize> {
    if let Some(size) = configured {
        match peg_solitaire::validate_size(size) {
            Ok(()) => return Ok(size),
            Err(e) => {
                warn!(size, error = %e, "Configured size rejected");
                writeln!(output, "{}", e)?;
            }
        }
    }
    prompt::board_size(input, output)
}

/// Prints totals from the outcome log
#[instrument(skip_all)]
fn run_stats(config: &GameConfig) -> Result<()> {
    let results = game_log::read_results(config.log_file())?;
    println!("{}", LogStats::from_results(results));
    Ok(())
}
