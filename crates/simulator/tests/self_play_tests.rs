//! Whole matches through the public API.

use alphabeta_engine::AlphaBetaAgent;
use king_core::{GameConfig, Side};
use random_engine::RandomAgent;
use simulator::{GameOutcome, MatchConfig, MatchRunner, SimulationReport};

fn config_from_toml(num_games: u32, seed: u64) -> MatchConfig {
    let game = GameConfig::from_toml_str(
        r#"
        rows = 5
        cols = 5

        [search]
        depth = 3
        "#,
    )
    .unwrap();
    MatchConfig {
        num_games,
        game,
        max_moves: 100,
        alternate_sides: true,
        seed: Some(seed),
        verbose: false,
    }
}

#[test]
fn alphabeta_self_play_finishes_every_game() {
    let config = config_from_toml(4, 17);
    let mut a = AlphaBetaAgent::new(config.game.search);
    let mut b = AlphaBetaAgent::new(config.game.search);

    let result = MatchRunner::new(config).unwrap().run_match(&mut a, &mut b).unwrap();

    assert_eq!(result.wins + result.losses, 4);
    for game in &result.games {
        assert!(game.moves.len() <= 25);
        let end = game.replay().unwrap();
        assert_eq!(end.traces.len(), game.moves.len());
        // Moves alternate starting with red
        for (n, mv) in game.moves.iter().enumerate() {
            let expected = if n % 2 == 0 { Side::Red } else { Side::Black };
            assert_eq!(mv.side, expected);
        }
    }
}

#[test]
fn same_seed_same_match() {
    let run = || {
        let config = config_from_toml(3, 5);
        let mut a = AlphaBetaAgent::new(config.game.search);
        let mut b = RandomAgent::with_seed(8);
        MatchRunner::new(config).unwrap().run_match(&mut a, &mut b).unwrap()
    };

    let first = run();
    let second = run();

    assert_eq!(first.games, second.games);
    assert_eq!(first.wins, second.wins);
}

#[test]
fn report_survives_a_trip_through_disk() {
    let config = config_from_toml(2, 23);
    let mut a = AlphaBetaAgent::new(config.game.search);
    let mut b = RandomAgent::with_seed(1);
    let result = MatchRunner::new(config.clone())
        .unwrap()
        .run_match(&mut a, &mut b)
        .unwrap();

    let report = SimulationReport::new(
        "disk",
        vec!["AlphaBeta v1.0".into(), "Random v1.0".into()],
        config,
        result,
    );
    let path = std::env::temp_dir().join(format!("king_catch_disk_{}.json", std::process::id()));
    report.save(&path).unwrap();
    let loaded = SimulationReport::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.result.games, report.result.games);
    assert_eq!(loaded.config.game, report.config.game);
    assert!(loaded
        .result
        .games
        .iter()
        .all(|g| g.outcome != GameOutcome::Unfinished));
}
