use tetracoin_core::{
    is_solvable, level_by_id, solve, validate, BlockSpec, CoinSpec, Color, LevelConfig, Position,
    Session, ShapeId, SolverLimits, LEVEL_CATALOG,
};

fn replay(config: &LevelConfig, solution: &tetracoin_core::Solution) -> Session {
    let mut session = Session::new(config);
    for step in &solution.moves {
        let anchor = session
            .state()
            .block(step.block)
            .expect("solution block alive")
            .anchor;
        let (dx, dy) = step.direction.delta();
        assert!(session.attempt_move(step.block, anchor.offset(dx, dy)));
    }
    session
}

#[test]
fn tutorial_level_solves_in_three_steps() {
    let config = level_by_id(1).expect("catalog level 1").config();
    let solution = solve(&config, SolverLimits::default()).expect("solution");
    assert_eq!(solution.len(), 3);

    let session = replay(&config, &solution);
    assert!(session.victory_report().is_some());
}

#[test]
fn single_step_level_solves_in_one_move() {
    let config = level_by_id(2).expect("catalog level 2").config();
    let solution = solve(&config, SolverLimits::default()).expect("solution");
    assert_eq!(solution.len(), 1);
}

#[test]
fn every_catalog_level_is_solvable() {
    for entry in LEVEL_CATALOG {
        let config = entry.config();
        validate(&config).unwrap();
        let solution = solve(&config, SolverLimits::default());
        assert!(solution.is_some(), "{} has no solution", entry.name);
        let session = replay(&config, &solution.unwrap());
        assert!(session.victory_report().is_some(), "{}", entry.name);
    }
}

#[test]
fn unreachable_coin_means_unsolvable() {
    let config = LevelConfig {
        id: 50,
        name: "walled off".to_string(),
        grid_width: 5,
        grid_height: 5,
        time_limit: 60,
        max_moves_three_stars: 2,
        max_moves_two_stars: 4,
        blocks: vec![BlockSpec {
            shape: ShapeId::I3,
            color: Color::Red,
            anchor: Position::new(1, 1),
            counter: 1,
        }],
        coins: vec![CoinSpec {
            color: Color::Red,
            position: Position::new(4, 4),
        }],
        queues: Vec::new(),
        walls: vec![Position::new(3, 4), Position::new(3, 3), Position::new(4, 3)],
    };
    validate(&config).unwrap();
    assert!(!is_solvable(&config, SolverLimits::default()));
}

#[test]
fn depth_limit_cuts_the_search_short() {
    let config = level_by_id(1).expect("catalog level 1").config();
    let limits = SolverLimits {
        max_moves: 1,
        max_states: 10_000,
    };
    assert!(solve(&config, limits).is_none());
}
