//! Property tests for the board engine.

use peg_solitaire::{Board, Cell, MoveError, Position};
use proptest::prelude::*;
use proptest::sample::Index;

fn odd_size() -> impl Strategy<Value = usize> {
    (1usize..=12).prop_map(|k| 2 * k + 1)
}

fn in_corner(size: usize, pos: Position) -> bool {
    let corner = size / 3;
    let edge = |i: usize| i < corner || i >= size - corner;
    edge(pos.row) && edge(pos.col)
}

proptest! {
    #[test]
    fn initial_board_has_single_centre_hole(size in odd_size()) {
        let board = Board::new(size).unwrap();
        let corner = size / 3;

        let empties: Vec<_> = (0..size)
            .flat_map(|r| (0..size).map(move |c| Position::new(r, c)))
            .filter(|&p| board.get(p) == Some(Cell::Empty))
            .collect();
        prop_assert_eq!(empties, vec![board.center()]);
        prop_assert_eq!(board.count_pegs(), size * size - 4 * corner * corner - 1);
        prop_assert_eq!(board.moves_made(), 0);

        for r in 0..size {
            for c in 0..size {
                let pos = Position::new(r, c);
                let cell = board.get(pos).unwrap();
                prop_assert_eq!(cell == Cell::Invalid, in_corner(size, pos));
            }
        }
    }

    #[test]
    fn even_sizes_are_rejected(k in 0usize..20) {
        prop_assert!(Board::new(2 * k).is_err());
    }

    #[test]
    fn random_play_preserves_move_rules(
        size in prop::sample::select(vec![5usize, 7, 9]),
        picks in prop::collection::vec(any::<Index>(), 0..60),
    ) {
        let mut board = Board::new(size).unwrap();
        let initial_pegs = board.count_pegs();

        for pick in picks {
            let moves = board.moves();
            if moves.is_empty() {
                break;
            }
            for mov in &moves {
                prop_assert_eq!(board.get(*mov.from()), Some(Cell::Peg));
                prop_assert_eq!(board.get(*mov.over()), Some(Cell::Peg));
                prop_assert_eq!(board.get(*mov.to()), Some(Cell::Empty));
            }

            let mov = moves[pick.index(moves.len())];
            let pegs = board.count_pegs();
            let made = board.moves_made();
            board.apply(&mov).unwrap();

            prop_assert_eq!(board.count_pegs(), pegs - 1);
            prop_assert_eq!(board.moves_made(), made + 1);
            prop_assert_eq!(board.count_pegs() + board.moves_made(), initial_pegs);
            prop_assert_eq!(board.apply(&mov), Err(MoveError::NoPegAtOrigin(*mov.from())));
        }
    }

    #[test]
    fn single_peg_wins_only_in_centre(
        size in prop::sample::select(vec![3usize, 5, 7, 9]),
        row in 0usize..9,
        col in 0usize..9,
    ) {
        let peg = Position::new(row % size, col % size);
        prop_assume!(!in_corner(size, peg));

        let board: Board = single_peg_layout(size, peg).parse().unwrap();
        prop_assert_eq!(board.count_pegs(), 1);
        prop_assert!(!board.has_moves());
        prop_assert_eq!(board.is_won(), peg == board.center());
    }

    #[test]
    fn opening_boards_are_never_won(size in odd_size()) {
        let board = Board::new(size).unwrap();
        prop_assert!(!board.is_won());
    }
}

fn single_peg_layout(size: usize, peg: Position) -> String {
    (0..size)
        .map(|r| {
            (0..size)
                .map(|c| {
                    let pos = Position::new(r, c);
                    if in_corner(size, pos) {
                        '#'
                    } else if pos == peg {
                        'o'
                    } else {
                        '.'
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
