//! Selector that plays uniformly random legal moves.

use super::{MoveSelector, Selection};
use anyhow::Result;
use peg_solitaire::{Board, Move};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Picks uniformly among the offered moves.
///
/// The same seed always plays the same game.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: ChaCha8Rng,
}

impl RandomSelector {
    /// Creates a selector from `seed`, or from OS entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                info!(seed, "Seeding random selector");
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, board: &Board, moves: &[Move]) -> Result<Selection> {
        let index = self.rng.gen_range(0..moves.len());
        debug!(index, moves_made = board.moves_made(), "Random move chosen");
        Ok(Selection::Move(index))
    }

    fn name(&self) -> &str {
        "random"
    }
}
