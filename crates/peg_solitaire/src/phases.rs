//! Game phases and the terminal summary.

use super::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Macro-state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// At least one legal move remains.
    Playing,
    /// No legal moves and a single peg sits in the centre.
    Won,
    /// No legal moves and the board is not won.
    Lost,
}

impl Phase {
    /// Returns true once no legal moves remain.
    pub fn is_terminal(self) -> bool {
        self != Phase::Playing
    }
}

/// Outcome recorded for a finished game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Outcome {
    /// One peg left, in the centre.
    Victory,
    /// Anything else.
    Defeat,
}

/// Summary of a finished game.
///
/// Displays as the log line
/// `VICTORY | Moves made: 31 | Remaining pegs: 1` and parses back from it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_new::new,
)]
pub struct GameResult {
    /// Victory or defeat.
    outcome: Outcome,
    /// Moves applied during the game.
    moves_made: usize,
    /// Pegs left on the board.
    remaining_pegs: usize,
}

impl GameResult {
    /// Summarizes a board regardless of its phase.
    ///
    /// The outcome is [`Outcome::Victory`] only if the board is won.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn from_board(board: &Board) -> Self {
        let outcome = if board.is_won() {
            Outcome::Victory
        } else {
            Outcome::Defeat
        };
        Self {
            outcome,
            moves_made: board.moves_made(),
            remaining_pegs: board.count_pegs(),
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | Moves made: {} | Remaining pegs: {}",
            self.outcome, self.moves_made, self.remaining_pegs
        )
    }
}

/// Error parsing a [`GameResult`] log line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Malformed result line: {:?}", line)]
pub struct ParseResultError {
    /// The offending line.
    pub line: String,
}

impl std::error::Error for ParseResultError {}

impl FromStr for GameResult {
    type Err = ParseResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseResultError {
            line: s.to_string(),
        };
        let mut parts = s.trim_end().split(" | ");
        let (Some(outcome), Some(moves), Some(pegs), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let outcome = Outcome::from_str(outcome).map_err(|_| malformed())?;
        let moves_made = moves
            .strip_prefix("Moves made: ")
            .and_then(|n| n.parse().ok())
            .ok_or_else(malformed)?;
        let remaining_pegs = pegs
            .strip_prefix("Remaining pegs: ")
            .and_then(|n| n.parse().ok())
            .ok_or_else(malformed)?;

        Ok(Self {
            outcome,
            moves_made,
            remaining_pegs,
        })
    }
}
