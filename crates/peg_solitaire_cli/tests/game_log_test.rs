//! Tests for the outcome log and its scoped wrapper.

use anyhow::bail;
use peg_solitaire::{Board, GameResult, Outcome};
use peg_solitaire_cli::game_log::{read_results, GameLog};
use peg_solitaire_cli::{session, LogStats, Painter, RandomSelector};
use tempfile::TempDir;

fn log_lines(dir: &TempDir) -> Vec<String> {
    std::fs::read_to_string(dir.path().join("game_log.txt"))
        .expect("Failed to read log")
        .lines()
        .map(str::to_string)
        .collect()
}

fn assert_well_formed(line: &str) {
    let parts: Vec<_> = line.split(" | ").collect();
    assert_eq!(parts.len(), 3, "line: {line}");
    assert!(parts[0] == "VICTORY" || parts[0] == "DEFEAT", "line: {line}");
    let moves = parts[1].strip_prefix("Moves made: ").expect("moves field");
    let pegs = parts[2].strip_prefix("Remaining pegs: ").expect("pegs field");
    assert!(moves.parse::<usize>().is_ok(), "line: {line}");
    assert!(pegs.parse::<usize>().is_ok(), "line: {line}");
}

#[test]
fn test_completed_game_appends_one_line() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut log = GameLog::open(dir.path().join("game_log.txt")).expect("Open failed");

    let mut board = Board::new(7).unwrap();
    let mut selector = RandomSelector::new(Some(5));
    let mut output = Vec::new();
    let result = log
        .scoped(&mut board, |board| {
            session::play(board, &mut selector, &mut output, Painter::new(false))
        })
        .expect("Game failed");

    let lines = log_lines(&dir);
    assert_eq!(lines.len(), 1);
    assert_well_formed(&lines[0]);
    assert_eq!(lines[0], result.to_string());
    assert_eq!(lines[0].parse::<GameResult>().unwrap(), result);
}

#[test]
fn test_failed_game_still_logged() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut log = GameLog::open(dir.path().join("game_log.txt")).expect("Open failed");

    let mut board = Board::new(7).unwrap();
    let err = log
        .scoped(&mut board, |board| {
            let mov = board.moves()[0];
            board.apply(&mov)?;
            bail!("Input closed")
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "Input closed");

    let lines = log_lines(&dir);
    assert_eq!(lines, vec!["DEFEAT | Moves made: 1 | Remaining pegs: 31".to_string()]);
}

#[test]
fn test_appends_across_sessions() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("game_log.txt");

    for seed in 0..3 {
        let mut log = GameLog::open(&path).expect("Open failed");
        let mut board = Board::new(5).unwrap();
        let mut selector = RandomSelector::new(Some(seed));
        let mut output = Vec::new();
        log.scoped(&mut board, |board| {
            session::play(board, &mut selector, &mut output, Painter::new(false))
        })
        .expect("Game failed");
    }

    let results = read_results(&path).expect("Read failed");
    assert_eq!(results.len(), 3);
    let stats = LogStats::from_results(results);
    assert_eq!(stats.games, 3);
    assert_eq!(stats.victories + stats.defeats, 3);
    assert_eq!(stats.skipped, 0);
}

#[test]
fn test_open_fails_for_directory() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = GameLog::open(dir.path()).unwrap_err();
    assert!(err.message.contains("Failed to open"));
}

#[test]
fn test_read_missing_log_is_empty() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let results = read_results(dir.path().join("none.txt")).expect("Read failed");
    assert!(results.is_empty());
}

#[test]
fn test_read_skips_blank_and_flags_bad_lines() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("game_log.txt");
    std::fs::write(
        &path,
        "VICTORY | Moves made: 31 | Remaining pegs: 1\n\nnot a result\n",
    )
    .unwrap();

    let results = read_results(&path).expect("Read failed");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().outcome(), &Outcome::Victory);
    assert!(results[1].is_err());
}
