//! End-to-end tests for complete games on the board engine.

use peg_solitaire::{Board, ConfigurationError, Direction, GameResult, Outcome, Phase, Position};

#[test]
fn test_even_size_is_invalid_configuration() {
    assert_eq!(Board::new(4), Err(ConfigurationError::EvenSize(4)));
}

#[test]
fn test_three_by_three_has_no_first_move() {
    let board = Board::new(3).unwrap();
    assert_eq!(board.to_string(), "#o#\no.o\n#o#");
    assert!(board.moves().is_empty());
    assert_eq!(board.phase(), Phase::Lost);
    assert_eq!(board.result(), Some(GameResult::new(Outcome::Defeat, 0, 4)));
}

#[test]
fn test_two_move_win() {
    let mut board: Board = "#o..#\n.o...\no....\n.....\n#...#".parse().unwrap();
    assert_eq!(board.count_pegs(), 3);

    let moves = board.moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(*moves[0].from(), Position::new(0, 1));
    assert_eq!(*moves[0].direction(), Direction::Down);
    board.apply(&moves[0]).unwrap();
    assert_eq!(board.phase(), Phase::Playing);
    assert_eq!(board.result(), None);

    let moves = board.moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(*moves[0].to(), board.center());
    board.apply(&moves[0]).unwrap();

    assert!(board.is_won());
    assert_eq!(board.phase(), Phase::Won);
    assert_eq!(board.result(), Some(GameResult::new(Outcome::Victory, 2, 1)));
}

#[test]
fn test_single_peg_off_centre_is_lost() {
    let board: Board = "#...#\n.....\n...o.\n.....\n#...#".parse().unwrap();
    assert!(!board.is_won());
    assert_eq!(board.phase(), Phase::Lost);
}

#[test]
fn test_first_move_game_terminates() {
    let mut board = Board::new(7).unwrap();
    loop {
        let Some(mov) = board.legal_moves().next() else {
            break;
        };
        board.apply(&mov).unwrap();
    }

    let result = board.result().expect("terminal board has a result");
    assert_eq!(*result.moves_made() + *result.remaining_pegs(), 32);
    assert_eq!(result.outcome() == &Outcome::Victory, board.is_won());
}

#[test]
fn test_legal_moves_is_restartable() {
    let board = Board::new(7).unwrap();
    let first: Vec<_> = board.legal_moves().collect();
    let second: Vec<_> = board.legal_moves().collect();
    assert_eq!(first, second);
}
