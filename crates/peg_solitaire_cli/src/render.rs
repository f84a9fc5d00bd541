//! Console rendering of boards, move lists and results.

use crossterm::style::{style, Color, Stylize};
use peg_solitaire::{row_label, Board, Cell, GameResult, Move, Outcome};

const PEG_COLOR: Color = Color::Green;
const EMPTY_COLOR: Color = Color::Red;
const LABEL_COLOR: Color = Color::Blue;

/// Stateless text formatter, optionally coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    color: bool,
}

impl Painter {
    /// Creates a painter; `color = false` produces plain text.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Display text for a cell, padded to `width`.
    pub fn cell(self, cell: Cell, width: usize) -> String {
        let text = format!("{:>width$}", cell.symbol());
        match cell {
            Cell::Peg => self.paint(&text, PEG_COLOR),
            Cell::Empty => self.paint(&text, EMPTY_COLOR),
            Cell::Invalid => text,
        }
    }

    /// Display text for coordinate labels and other chrome.
    pub fn label(self, text: &str) -> String {
        self.paint(text, LABEL_COLOR)
    }

    /// Renders the grid with column numbers on top and row letters on the left.
    pub fn board(self, board: &Board) -> String {
        let width = board.size().to_string().len();
        let mut out = String::from("  ");

        let header = (1..=board.size())
            .map(|c| format!("{:>width$}", c))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&self.label(&header));
        out.push('\n');

        for (row, cells) in board.rows().enumerate() {
            let letter = row_label(row).map_or_else(|| row.to_string(), String::from);
            let cells = cells
                .iter()
                .map(|&cell| self.cell(cell, width))
                .collect::<Vec<_>>()
                .join("|");
            out.push_str(&format!("{}|{}|\n", self.label(&letter), cells));
        }
        out
    }

    /// Renders a numbered (1-based) list of moves.
    pub fn moves(self, moves: &[Move]) -> String {
        let width = moves.len().to_string().len();
        let mut out = String::new();
        for (i, mov) in moves.iter().enumerate() {
            let number = format!("{:>width$}.", i + 1);
            out.push_str(&format!("{} {}\n", self.label(&number), mov));
        }
        out
    }

    /// Renders the final summary line.
    pub fn result(self, result: &GameResult) -> String {
        let color = match result.outcome() {
            Outcome::Victory => PEG_COLOR,
            Outcome::Defeat => EMPTY_COLOR,
        };
        self.paint(&result.to_string(), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_board() {
        let board = Board::new(5).unwrap();
        let text = Painter::new(false).board(&board);
        assert_eq!(
            text,
            "  1 2 3 4 5\n\
             A| |o|o|o| |\n\
             B|o|o|o|o|o|\n\
             C|o|o|.|o|o|\n\
             D|o|o|o|o|o|\n\
             E| |o|o|o| |\n"
        );
    }

    #[test]
    fn test_wide_board_alignment() {
        let board = Board::new(11).unwrap();
        let text = Painter::new(false).board(&board);
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("   1  2  3"));
        assert_eq!(lines.next().unwrap().len(), 2 + 11 * 3);
    }

    #[test]
    fn test_coloured_output_has_escapes() {
        // crossterm honours NO_COLOR
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        let board = Board::new(5).unwrap();
        let text = Painter::new(true).board(&board);
        assert!(text.contains("\u{1b}["));
    }

    #[test]
    fn test_numbered_moves() {
        let board = Board::new(7).unwrap();
        let text = Painter::new(false).moves(&board.moves());
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("1. B4 -> D4 (jumps down C4)"));
    }
}
