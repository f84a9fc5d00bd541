//! The game loop.

use crate::players::{MoveSelector, Selection, SelectionError};
use crate::render::Painter;
use anyhow::Result;
use peg_solitaire::{Board, GameResult};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Plays `board` until no legal move remains or the selector forfeits.
///
/// The board is shown before every turn and the summary after the last.
#[instrument(skip_all, fields(size = board.size(), selector = selector.name()))]
pub fn play<W: Write>(
    board: &mut Board,
    selector: &mut dyn MoveSelector,
    output: &mut W,
    painter: Painter,
) -> Result<GameResult> {
    loop {
        writeln!(output, "{}", painter.board(board))?;

        let moves = board.moves();
        if moves.is_empty() {
            debug!("No legal moves left");
            break;
        }

        match selector.select(board, &moves)? {
            Selection::Move(index) => {
                let mov = moves.get(index).ok_or(SelectionError::OutOfRange {
                    index: index + 1,
                    len: moves.len(),
                })?;
                board.apply(mov)?;
                writeln!(output, "Played {}", mov)?;
            }
            Selection::Forfeit => {
                info!(moves_made = board.moves_made(), "Game forfeited");
                writeln!(output, "Game abandoned.")?;
                break;
            }
        }
    }

    let result = GameResult::from_board(board);
    writeln!(output, "{}", painter.result(&result))?;
    info!(%result, "Game over");
    Ok(result)
}
