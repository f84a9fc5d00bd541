//! Core domain types for peg solitaire.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Row labels, one letter per row.
pub(crate) const ROW_LABELS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXY";

/// Letter labelling zero-based `row`, or `None` past the last label.
pub fn row_label(row: usize) -> Option<char> {
    ROW_LABELS.get(row).map(|&letter| letter as char)
}

/// State of a single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Cell {
    /// Cell holds a peg.
    Peg,
    /// Playable cell without a peg.
    Empty,
    /// Outside the cross-shaped playable region.
    Invalid,
}

impl Cell {
    /// Returns true for cells inside the playable region.
    pub fn is_playable(self) -> bool {
        self != Cell::Invalid
    }

    /// Layout character used by [`Board`](crate::Board) parsing and plain rendering.
    pub fn symbol(self) -> char {
        match self {
            Cell::Peg => 'o',
            Cell::Empty => '.',
            Cell::Invalid => ' ',
        }
    }

    /// Parses a layout character. `#` and space both mean [`Cell::Invalid`].
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'o' | 'O' => Some(Cell::Peg),
            '.' => Some(Cell::Empty),
            '#' | ' ' => Some(Cell::Invalid),
            _ => None,
        }
    }
}

/// A cell coordinate, zero-based.
///
/// Displayed as a row letter followed by a one-based column, so `(3, 3)`
/// prints as `D4`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Position {
    /// Row index from the top.
    pub row: usize,
    /// Column index from the left.
    pub col: usize,
}

impl Position {
    /// Steps `distance` cells in `direction`, or `None` if that leaves the
    /// non-negative quadrant.
    #[instrument(level = "trace")]
    pub fn step(self, direction: Direction, distance: usize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = offset(self.row, dr, distance)?;
        let col = offset(self.col, dc, distance)?;
        Some(Self { row, col })
    }
}

fn offset(base: usize, delta: isize, distance: usize) -> Option<usize> {
    let shift = delta.checked_mul(isize::try_from(distance).ok()?)?;
    base.checked_add_signed(shift)
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match row_label(self.row) {
            Some(letter) => write!(f, "{}{}", letter, self.col + 1),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// One of the four jump directions.
///
/// Declaration order is the enumeration order used for legal moves.
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
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Towards higher column numbers.
    Right,
    /// Towards lower column numbers.
    Left,
    /// Towards the top row.
    Up,
    /// Towards the bottom row.
    Down,
}

impl Direction {
    /// All directions in enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// `(row, col)` delta of a single step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(0, 0).to_string(), "A1");
        assert_eq!(Position::new(3, 3).to_string(), "D4");
        assert_eq!(Position::new(6, 2).to_string(), "G3");
    }

    #[test]
    fn test_row_labels() {
        assert_eq!(row_label(0), Some('A'));
        assert_eq!(row_label(24), Some('Y'));
        assert_eq!(row_label(25), None);
        assert_eq!(Position::new(25, 0).to_string(), "(25, 0)");
    }

    #[test]
    fn test_step_underflow() {
        assert_eq!(Position::new(1, 0).step(Direction::Left, 1), None);
        assert_eq!(Position::new(1, 4).step(Direction::Up, 2), None);
        assert_eq!(
            Position::new(1, 4).step(Direction::Left, 2),
            Some(Position::new(1, 2))
        );
    }

    #[test]
    fn test_direction_order_matches_iteration() {
        let iterated: Vec<_> = Direction::iter().collect();
        assert_eq!(iterated, Direction::ALL.to_vec());
    }

    #[test]
    fn test_symbol_round_trip() {
        for cell in [Cell::Peg, Cell::Empty] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        assert_eq!(Cell::from_symbol('#'), Some(Cell::Invalid));
        assert_eq!(Cell::from_symbol('x'), None);
    }
}
