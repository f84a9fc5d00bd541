//! Move selectors: where each move of a game comes from.

mod manual;
mod random;

pub use manual::{parse_selection, ManualSelector, SelectionError};
pub use random::RandomSelector;

use anyhow::Result;
use peg_solitaire::{Board, Move};

/// What a selector decided for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Play the move at this zero-based index of the offered list.
    Move(usize),
    /// Stop the game here.
    Forfeit,
}

/// Trait for anything that can choose moves.
pub trait MoveSelector {
    /// Chooses one of `moves`, which is never empty.
    fn select(&mut self, board: &Board, moves: &[Move]) -> Result<Selection>;

    /// Returns the selector's display name.
    fn name(&self) -> &str;
}
