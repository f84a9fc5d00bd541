//! The peg solitaire board engine.

use super::action::{Move, MoveError};
use super::contracts::{Contract, LegalMove, MoveContract};
use super::phases::{GameResult, Phase};
use super::types::ROW_LABELS;
use super::{Cell, Direction, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Smallest accepted board side.
pub const MIN_SIZE: usize = 3;

/// Largest accepted board side (one row label letter per row).
pub const MAX_SIZE: usize = ROW_LABELS.len();

/// Default board side, the classic English board.
pub const DEFAULT_SIZE: usize = 7;

/// Rejected board configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigurationError {
    /// Board side is even, so there is no centre cell.
    #[display("Invalid configuration: board size {} is even", _0)]
    EvenSize(usize),

    /// Board side is below [`MIN_SIZE`].
    #[display("Invalid configuration: board size {} is smaller than {}", _0, MIN_SIZE)]
    TooSmall(usize),

    /// Board side is above [`MAX_SIZE`].
    #[display("Invalid configuration: board size {} is larger than {}", _0, MAX_SIZE)]
    TooLarge(usize),

    /// A layout row is longer than the number of rows.
    #[display("Invalid configuration: row {} has {} cells, expected at most {}", row, len, size)]
    RowTooLong {
        /// Zero-based row index.
        row: usize,
        /// Cells found in the row.
        len: usize,
        /// Board side.
        size: usize,
    },

    /// The stored cells do not fill a `size` by `size` grid.
    #[display("Invalid configuration: expected {} cells, found {}", expected, found)]
    CellCount {
        /// Cells a grid of this side holds.
        expected: usize,
        /// Cells supplied.
        found: usize,
    },

    /// A layout contains a character that is not a cell symbol.
    #[display("Invalid configuration: unknown cell symbol {:?}", _0)]
    UnknownSymbol(char),
}

impl std::error::Error for ConfigurationError {}

/// Checks that `size` is an odd side within bounds.
#[instrument]
pub fn validate_size(size: usize) -> Result<(), ConfigurationError> {
    if size < MIN_SIZE {
        Err(ConfigurationError::TooSmall(size))
    } else if size % 2 == 0 {
        Err(ConfigurationError::EvenSize(size))
    } else if size > MAX_SIZE {
        Err(ConfigurationError::TooLarge(size))
    } else {
        Ok(())
    }
}

/// Square peg solitaire board with a move counter.
///
/// Cells are stored in row-major order. Deserialized boards must have a
/// valid side and exactly `size * size` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    moves_made: usize,
}

#[derive(Deserialize)]
struct BoardRecord {
    size: usize,
    cells: Vec<Cell>,
    moves_made: usize,
}

impl TryFrom<BoardRecord> for Board {
    type Error = ConfigurationError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        validate_size(record.size)?;
        let expected = record.size * record.size;
        if record.cells.len() != expected {
            return Err(ConfigurationError::CellCount {
                expected,
                found: record.cells.len(),
            });
        }
        Ok(Self {
            size: record.size,
            cells: record.cells,
            moves_made: record.moves_made,
        })
    }
}

impl Board {
    /// Builds the starting cross-shaped board of side `size`.
    ///
    /// Corner blocks of side `size / 3` are cut out; every remaining cell
    /// holds a peg except the centre.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigurationError> {
        validate_size(size)?;

        let corner = size / 3;
        let in_corner = |i: usize| i < corner || i >= size - corner;
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(if in_corner(row) && in_corner(col) {
                    Cell::Invalid
                } else {
                    Cell::Peg
                });
            }
        }

        let mut board = Self {
            size,
            cells,
            moves_made: 0,
        };
        board.set(board.center(), Cell::Empty);

        debug!(pegs = board.count_pegs(), "Board initialized");
        Ok(board)
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Moves applied so far.
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// The centre cell.
    pub fn center(&self) -> Position {
        Position::new(self.size / 2, self.size / 2)
    }

    /// Gets the cell at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).and_then(|i| self.cells.get(i).copied())
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(slot) = self.index(pos).and_then(|i| self.cells.get_mut(i)) {
            *slot = cell;
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.size && pos.col < self.size).then(|| pos.row * self.size + pos.col)
    }

    /// Number of pegs on the board.
    pub fn count_pegs(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Peg).count()
    }

    /// True iff exactly one peg remains and it sits in the centre.
    #[instrument(level = "debug", skip(self))]
    pub fn is_won(&self) -> bool {
        self.count_pegs() == 1 && self.get(self.center()) == Some(Cell::Peg)
    }

    /// Lazily enumerates legal moves.
    ///
    /// Origins are visited in row-major order and directions in
    /// [`Direction::ALL`] order, so the sequence is deterministic. Call
    /// again to restart.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        let size = self.size;
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
            .filter(move |&pos| self.get(pos) == Some(Cell::Peg))
            .flat_map(|from| {
                Direction::ALL
                    .into_iter()
                    .filter_map(move |direction| Move::jump(from, direction))
            })
            .filter(move |mov| LegalMove::check(mov, self).is_ok())
    }

    /// Collects [`Board::legal_moves`] for numbered display.
    #[instrument(level = "debug", skip(self))]
    pub fn moves(&self) -> Vec<Move> {
        self.legal_moves().collect()
    }

    /// True while at least one legal move remains.
    pub fn has_moves(&self) -> bool {
        self.legal_moves().next().is_some()
    }

    /// Current macro-state.
    #[instrument(level = "debug", skip(self))]
    pub fn phase(&self) -> Phase {
        if self.has_moves() {
            Phase::Playing
        } else if self.is_won() {
            Phase::Won
        } else {
            Phase::Lost
        }
    }

    /// The game summary, once no legal moves remain.
    pub fn result(&self) -> Option<GameResult> {
        self.phase()
            .is_terminal()
            .then(|| GameResult::from_board(self))
    }

    /// Applies a legal move in place.
    ///
    /// Rejected moves leave the board unchanged. Postconditions are verified
    /// in debug builds.
    #[instrument(skip(self, mov), fields(mov = %mov, moves_made = self.moves_made))]
    pub fn apply(&mut self, mov: &Move) -> Result<(), MoveError> {
        if let Err(e) = MoveContract::pre(self, mov) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.set(*mov.from(), Cell::Empty);
        self.set(*mov.over(), Cell::Empty);
        self.set(*mov.to(), Cell::Peg);
        self.moves_made += 1;

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            warn!(error = %e, "Postcondition failed, restoring board");
            *self = before;
            return Err(e);
        }

        debug!(pegs = self.count_pegs(), "Move applied");
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let symbol = match cell {
                    Cell::Invalid => '#',
                    other => other.symbol(),
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ConfigurationError;

    /// Parses a layout with one line per row: `o` peg, `.` empty, `#` or
    /// space invalid. Short rows are padded with invalid cells and blank
    /// lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();
        let size = lines.len();
        validate_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in lines.iter().enumerate() {
            let parsed = line
                .chars()
                .map(|c| Cell::from_symbol(c).ok_or(ConfigurationError::UnknownSymbol(c)))
                .collect::<Result<Vec<_>, _>>()?;
            if parsed.len() > size {
                return Err(ConfigurationError::RowTooLong {
                    row,
                    len: parsed.len(),
                    size,
                });
            }
            let padding = size - parsed.len();
            cells.extend(parsed);
            cells.extend(std::iter::repeat_n(Cell::Invalid, padding));
        }

        Ok(Self {
            size,
            cells,
            moves_made: 0,
        })
    }
}
