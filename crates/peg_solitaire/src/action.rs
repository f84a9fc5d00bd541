//! First-class move type for peg solitaire.
//!
//! A move is built from an origin and a direction, so the jumped and
//! destination cells always line up with the origin. Whether the move is
//! legal depends on the board and is checked when it is applied.

use super::{Direction, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A jump: the peg at `from` jumps over `over` and lands on `to`.
///
/// Deserialized moves are rebuilt with [`Move::jump`], so a record whose
/// cells do not line up is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(try_from = "MoveRecord")]
pub struct Move {
    /// Cell the jumping peg starts on.
    from: Position,
    /// Cell whose peg is removed.
    over: Position,
    /// Cell the jumping peg lands on.
    to: Position,
    /// Direction of the jump.
    direction: Direction,
}

impl Move {
    /// Builds the jump from `from` in `direction`.
    ///
    /// Returns `None` when the destination would fall above or left of the
    /// grid. Other bounds are checked against a board.
    #[instrument(level = "trace")]
    pub fn jump(from: Position, direction: Direction) -> Option<Self> {
        Some(Self {
            from,
            over: from.step(direction, 1)?,
            to: from.step(direction, 2)?,
            direction,
        })
    }

    /// True when `over` and `to` are one and two steps from `from` in
    /// `direction`.
    pub fn is_straight_jump(&self) -> bool {
        Move::jump(self.from, self.direction) == Some(*self)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        from: Position,
        over: Position,
        to: Position,
        direction: Direction,
    ) -> Self {
        Self {
            from,
            over,
            to,
            direction,
        }
    }
}

#[derive(Deserialize)]
struct MoveRecord {
    from: Position,
    over: Position,
    to: Position,
    direction: Direction,
}

impl TryFrom<MoveRecord> for Move {
    type Error = MoveError;

    fn try_from(record: MoveRecord) -> Result<Self, Self::Error> {
        let mov = Self {
            from: record.from,
            over: record.over,
            to: record.to,
            direction: record.direction,
        };
        if mov.is_straight_jump() {
            Ok(mov)
        } else {
            Err(MoveError::NotAJump(mov))
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} (jumps {} {})",
            self.from, self.to, self.direction, self.over
        )
    }
}

/// Error raised when a move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The jumped and destination cells do not follow the direction.
    #[display("Invalid move: {} is not a straight two-cell jump", _0)]
    NotAJump(Move),

    /// A cell of the move lies outside the grid.
    #[display("Invalid move: {} is off the board", _0)]
    OffBoard(Position),

    /// A cell of the move lies outside the playable region.
    #[display("Invalid move: {} is not a playable cell", _0)]
    NotPlayable(Position),

    /// The origin cell holds no peg.
    #[display("Invalid move: no peg at {}", _0)]
    NoPegAtOrigin(Position),

    /// The jumped cell holds no peg.
    #[display("Invalid move: no peg to jump at {}", _0)]
    NoPegToJump(Position),

    /// The destination cell is not empty.
    #[display("Invalid move: destination {} is occupied", _0)]
    DestinationOccupied(Position),

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_geometry() {
        let mov = Move::jump(Position::new(3, 1), Direction::Right).unwrap();
        assert_eq!(*mov.over(), Position::new(3, 2));
        assert_eq!(*mov.to(), Position::new(3, 3));
    }

    #[test]
    fn test_jump_off_top_edge() {
        assert!(Move::jump(Position::new(1, 3), Direction::Up).is_none());
        assert!(Move::jump(Position::new(2, 3), Direction::Up).is_some());
    }

    #[test]
    fn test_display() {
        let mov = Move::jump(Position::new(1, 3), Direction::Down).unwrap();
        assert_eq!(mov.to_string(), "B4 -> D4 (jumps down C4)");
    }

    #[test]
    fn test_scattered_cells_are_not_a_jump() {
        let mov = Move::from_parts(
            Position::new(1, 3),
            Position::new(6, 2),
            Position::new(3, 3),
            Direction::Down,
        );
        assert!(!mov.is_straight_jump());
        assert!(Move::jump(Position::new(1, 3), Direction::Down)
            .unwrap()
            .is_straight_jump());
    }
}
