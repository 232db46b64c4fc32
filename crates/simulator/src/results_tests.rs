use super::*;
use crate::match_runner::GameRecord;
use king_core::{Coord, Move};

fn sample_report() -> SimulationReport {
    let game = GameRecord {
        rows: 4,
        cols: 4,
        red_start: Coord::new(0, 0),
        black_start: Coord::new(1, 1),
        players: ["AlphaBeta v1.0".to_string(), "Random v1.0".to_string()],
        moves: vec![Move::new(Side::Red, Coord::new(1, 1))],
        outcome: GameOutcome::Won {
            winner: Side::Red,
            reason: WinReason::Capture,
        },
    };
    let result = MatchResult {
        wins: 1,
        losses: 0,
        unfinished: 0,
        games: vec![game],
    };
    SimulationReport::new(
        "smoke",
        vec!["AlphaBeta v1.0".to_string(), "Random v1.0".to_string()],
        MatchConfig {
            num_games: 1,
            seed: Some(5),
            ..Default::default()
        },
        result,
    )
}

#[test]
fn test_save_and_load() {
    let report = sample_report();
    let path = std::env::temp_dir().join(format!("king_catch_report_{}.json", std::process::id()));

    report.save(&path).unwrap();
    let loaded = SimulationReport::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.name, "smoke");
    assert_eq!(loaded.config.seed, Some(5));
    assert_eq!(loaded.result.games, report.result.games);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("king_catch_no_such_report.json");

    let err = SimulationReport::load(&path).unwrap_err();

    assert!(matches!(err, KingError::Io(_)));
}

#[test]
fn test_report_lists_games_and_score() {
    let text = sample_report().generate_report();

    assert!(text.contains("=== Simulation: smoke ==="));
    assert!(text.contains("1 games, 8x8 board, depth 8"));
    assert!(text.contains("red wins by capture"));
    assert!(text.contains("1-0-0 (W-L-U), score 100.0%"));
}
