//! First-class invariants for peg solitaire.
//!
//! Every jump obeys the same conservation rules: one peg leaves the board,
//! one move is counted, and only the three cells of the jump change. These
//! are expressed over a [`Transition`] so they can be checked after each
//! move and tested independently.

use super::{Board, Cell};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A composable set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        warn!(invariant = $inv::description(), "Invariant violated");
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// The board before and after a single move.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// Board before the move.
    pub before: &'a Board,
    /// Board after the move.
    pub after: &'a Board,
}

impl<'a> Transition<'a> {
    /// Pairs two boards.
    pub fn new(before: &'a Board, after: &'a Board) -> Self {
        Self { before, after }
    }

    fn cells(&self) -> impl Iterator<Item = (Cell, Cell)> + 'a {
        self.before
            .cells()
            .iter()
            .copied()
            .zip(self.after.cells().iter().copied())
    }
}

/// Invariant: exactly one peg is removed per move.
pub struct OnePegRemoved;

impl<'a> Invariant<Transition<'a>> for OnePegRemoved {
    fn holds(t: &Transition<'a>) -> bool {
        t.before.count_pegs() == t.after.count_pegs() + 1
    }

    fn description() -> &'static str {
        "Each move removes exactly one peg"
    }
}

/// Invariant: the move counter advances by exactly one.
pub struct OneMoveCounted;

impl<'a> Invariant<Transition<'a>> for OneMoveCounted {
    fn holds(t: &Transition<'a>) -> bool {
        t.after.moves_made() == t.before.moves_made() + 1
    }

    fn description() -> &'static str {
        "Each move increments the move counter by one"
    }
}

/// Invariant: only the three cells of the jump change.
pub struct ThreeCellsChanged;

impl<'a> Invariant<Transition<'a>> for ThreeCellsChanged {
    fn holds(t: &Transition<'a>) -> bool {
        t.before.size() == t.after.size() && t.cells().filter(|(a, b)| a != b).count() == 3
    }

    fn description() -> &'static str {
        "A move changes exactly three cells"
    }
}

/// Invariant: the playable region never changes shape.
pub struct RegionUnchanged;

impl<'a> Invariant<Transition<'a>> for RegionUnchanged {
    fn holds(t: &Transition<'a>) -> bool {
        t.cells()
            .all(|(a, b)| (a == Cell::Invalid) == (b == Cell::Invalid))
    }

    fn description() -> &'static str {
        "Invalid cells stay invalid and playable cells stay playable"
    }
}

/// All move invariants as a composable set.
pub type MoveInvariants = (
    OnePegRemoved,
    OneMoveCounted,
    ThreeCellsChanged,
    RegionUnchanged,
);
