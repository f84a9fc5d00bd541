//! Interactive selector reading move numbers from the terminal.

use super::{MoveSelector, Selection};
use crate::prompt::ask;
use crate::render::Painter;
use anyhow::{bail, Result};
use peg_solitaire::{Board, Move};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Rejected menu input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SelectionError {
    /// Input was neither a number nor a quit command.
    #[display("Invalid selection: {:?} is not a move number", _0)]
    NotANumber(String),

    /// Number outside `1..=len`.
    #[display("Invalid selection: {} is not between 1 and {}", index, len)]
    OutOfRange {
        /// The number entered.
        index: usize,
        /// Number of offered moves.
        len: usize,
    },
}

impl std::error::Error for SelectionError {}

/// Parses a 1-based move number, or `q`/`quit` to forfeit.
#[instrument]
pub fn parse_selection(input: &str, len: usize) -> Result<Selection, SelectionError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Ok(Selection::Forfeit);
    }
    let index: usize = input
        .parse()
        .map_err(|_| SelectionError::NotANumber(input.to_string()))?;
    if (1..=len).contains(&index) {
        Ok(Selection::Move(index - 1))
    } else {
        Err(SelectionError::OutOfRange { index, len })
    }
}

/// Shows the numbered move list and reads the player's choice.
pub struct ManualSelector<R, W> {
    input: R,
    output: W,
    painter: Painter,
}

impl<R: BufRead, W: Write> ManualSelector<R, W> {
    /// Creates a selector over the given terminal handles.
    pub fn new(input: R, output: W, painter: Painter) -> Self {
        Self {
            input,
            output,
            painter,
        }
    }

    /// Consumes the selector, returning its handles.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> MoveSelector for ManualSelector<R, W> {
    fn select(&mut self, _board: &Board, moves: &[Move]) -> Result<Selection> {
        write!(self.output, "{}", self.painter.moves(moves))?;
        let question = format!("Select a move (1-{}, q to quit): ", moves.len());
        loop {
            let Some(answer) = ask(&mut self.input, &mut self.output, &question)? else {
                bail!("Input closed");
            };
            match parse_selection(&answer, moves.len()) {
                Ok(selection) => return Ok(selection),
                Err(e) => {
                    debug!(error = %e, "Selection rejected");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        "manual"
    }
}
