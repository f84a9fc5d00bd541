//! Pure peg solitaire game logic.
//!
//! The [`Board`] owns the grid and move counter. Legal moves are enumerated
//! lazily in a fixed order, applied in place through [`Board::apply`], and
//! checked against precondition and postcondition contracts. Once no legal
//! move remains the board yields a [`GameResult`].
//!
//! # Example
//!
//! ```
//! use peg_solitaire::{Board, Phase};
//!
//! let mut board = Board::new(7)?;
//! assert_eq!(board.count_pegs(), 32);
//!
//! let first = board.moves()[0];
//! board.apply(&first)?;
//! assert_eq!(board.count_pegs(), 31);
//! assert_eq!(board.phase(), Phase::Playing);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod contracts;
pub mod invariants;
mod phases;
mod types;

pub use action::{Move, MoveError};
pub use board::{validate_size, Board, ConfigurationError, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
pub use phases::{GameResult, Outcome, ParseResultError, Phase};
pub use types::{row_label, Cell, Direction, Position};
