//! Command-line interface for peg_solitaire.

use crate::config::{Mode, DEFAULT_CONFIG_FILE};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Peg solitaire in the terminal
#[derive(Parser, Debug)]
#[command(name = "peg_solitaire")]
#[command(about = "Peg solitaire in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Outcome log file (overrides the config file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Game options
    #[command(flatten)]
    pub play: PlayArgs,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play one game
    Play,

    /// Summarize the outcome log
    Stats,
}

/// Options for a game. Anything left out comes from the config file or a prompt.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayArgs {
    /// Board side length (odd, 3-25)
    #[arg(short, long, global = true)]
    pub size: Option<usize>,

    /// How moves are chosen
    #[arg(short, long, global = true, value_enum)]
    pub mode: Option<Mode>,

    /// Seed for random mode
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}
