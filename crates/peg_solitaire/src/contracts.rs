//! Contract-based validation for peg solitaire moves.
//!
//! A jump is checked in two halves. Preconditions look at the move and the
//! board it is about to change and decide legality; they run on every
//! [`Board::apply`]. Postconditions compare the board before and after the
//! jump against the [`MoveInvariants`].

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, MoveInvariants, Transition};
use super::{Board, Cell, Position};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: `pre(state, action)` must hold before the action is applied.
/// - Postcondition: `post(before, after)` must hold once it has been applied.
///
/// A failed precondition means the action is rejected and the state is left
/// alone. A failed postcondition means the transition itself is broken.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained the board invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

fn playable(board: &Board, pos: Position) -> Result<(), MoveError> {
    match board.get(pos) {
        None => Err(MoveError::OffBoard(pos)),
        Some(cell) if cell.is_playable() => Ok(()),
        Some(_) => Err(MoveError::NotPlayable(pos)),
    }
}

/// Precondition: the jumped and destination cells follow the direction.
pub struct JumpGeometry;

impl JumpGeometry {
    /// Rebuilds the jump from its origin and direction and compares.
    pub fn check(mov: &Move, _board: &Board) -> Result<(), MoveError> {
        if mov.is_straight_jump() {
            Ok(())
        } else {
            Err(MoveError::NotAJump(*mov))
        }
    }
}

/// Precondition: all three cells are on the board and playable.
pub struct CellsPlayable;

impl CellsPlayable {
    /// Checks the origin, jumped and destination cells in that order.
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        for pos in [*mov.from(), *mov.over(), *mov.to()] {
            playable(board, pos)?;
        }
        Ok(())
    }
}

/// Precondition: the origin holds a peg.
pub struct OriginHasPeg;

impl OriginHasPeg {
    /// Checks the origin cell.
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        match board.get(*mov.from()) {
            Some(Cell::Peg) => Ok(()),
            _ => Err(MoveError::NoPegAtOrigin(*mov.from())),
        }
    }
}

/// Precondition: the jumped cell holds a peg.
pub struct JumpedHasPeg;

impl JumpedHasPeg {
    /// Checks the jumped cell.
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        match board.get(*mov.over()) {
            Some(Cell::Peg) => Ok(()),
            _ => Err(MoveError::NoPegToJump(*mov.over())),
        }
    }
}

/// Precondition: the destination is empty.
pub struct DestinationEmpty;

impl DestinationEmpty {
    /// Checks the destination cell.
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        match board.get(*mov.to()) {
            Some(Cell::Empty) => Ok(()),
            _ => Err(MoveError::DestinationOccupied(*mov.to())),
        }
    }
}

/// Composite precondition: a move is legal when every rule passes.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "trace", skip(board, mov), fields(mov = %mov))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        JumpGeometry::check(mov, board)?;
        CellsPlayable::check(mov, board)?;
        OriginHasPeg::check(mov, board)?;
        JumpedHasPeg::check(mov, board)?;
        DestinationEmpty::check(mov, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for jump moves.
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        MoveInvariants::check_all(&Transition::new(before, after)).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
