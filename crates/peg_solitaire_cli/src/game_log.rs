//! Append-only text log of game outcomes.
//!
//! One line per session, in the [`GameResult`] display format:
//! `VICTORY | Moves made: 31 | Remaining pegs: 1`.

use derive_more::{Display, Error};
use peg_solitaire::{Board, GameResult, ParseResultError};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "game_log.txt";

/// Outcome log opened in append mode.
#[derive(Debug)]
pub struct GameLog {
    path: PathBuf,
    file: File,
}

impl GameLog {
    /// Opens (creating if needed) the log at `path` for appending.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::new(format!("Failed to open {}: {}", path.display(), e)))?;
        debug!("Log opened");
        Ok(Self { path, file })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one result line.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn append(&mut self, result: &GameResult) -> Result<(), LogError> {
        writeln!(self.file, "{}", result)
            .and_then(|()| self.file.flush())
            .map_err(|e| LogError::new(format!("Failed to write {}: {}", self.path.display(), e)))?;
        info!(%result, "Outcome logged");
        Ok(())
    }

    /// Runs `play` on `board` and logs exactly one line for it, whichever
    /// way it returns.
    ///
    /// When `play` fails the line summarizes the board as it was left. The
    /// error from `play` takes precedence over a write error.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn scoped<F>(&mut self, board: &mut Board, play: F) -> anyhow::Result<GameResult>
    where
        F: FnOnce(&mut Board) -> anyhow::Result<GameResult>,
    {
        let outcome = play(board);
        let result = match &outcome {
            Ok(result) => *result,
            Err(e) => {
                warn!(error = %e, "Game ended early");
                GameResult::from_board(board)
            }
        };

        match (outcome, self.append(&result)) {
            (Ok(result), Ok(())) => Ok(result),
            (Ok(_), Err(log_err)) => Err(log_err.into()),
            (Err(e), write) => {
                if let Err(log_err) = write {
                    error!(error = %log_err, "Outcome not logged");
                }
                Err(e)
            }
        }
    }
}

/// Reads every line of the log at `path`.
///
/// A missing file reads as empty. Each line parses independently so one bad
/// line does not hide the rest.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_results(
    path: impl AsRef<Path>,
) -> Result<Vec<Result<GameResult, ParseResultError>>, LogError> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No log file yet");
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| LogError::new(format!("Failed to open {}: {}", path.display(), e)))?;
    BufReader::new(file)
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .map(|line| {
            line.map(|l| l.parse::<GameResult>())
                .map_err(|e| LogError::new(format!("Failed to read {}: {}", path.display(), e)))
        })
        .collect()
}

/// Log file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Log error: {} at {}:{}", message, file, line)]
pub struct LogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LogError {
    /// Creates a new log error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
