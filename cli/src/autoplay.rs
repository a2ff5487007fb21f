use rand::prelude::*;

use tetracoin_core::game::Session;
use tetracoin_core::grid::ALL_DIRECTIONS;
use tetracoin_core::level::LevelConfig;
use tetracoin_core::solver::{solve, SolverLimits};
use tetracoin_core::state::GameResult;

const DEFAULT_SEED: u64 = 0x7E7A_C014;
const RANDOM_MOVE_BUDGET: u32 = 500;

/// Drive one session to an outcome: replay the solver's line when one
/// exists, otherwise wander with seeded random legal moves. The clock is
/// ticked down between moves like an external countdown would.
pub fn run(
    config: &LevelConfig,
    limits: SolverLimits,
    seed: Option<u64>,
    ticks_per_move: u32,
) -> Session {
    let mut session = Session::new(config);

    match solve(config, limits) {
        Some(solution) => {
            println!("plan: {} solver moves", solution.len());
            for step in &solution.moves {
                let Some(block) = session.state().block(step.block) else {
                    break;
                };
                let (dx, dy) = step.direction.delta();
                let target = block.anchor.offset(dx, dy);
                if !session.attempt_move(step.block, target) {
                    eprintln!("move rejected: block {} {}", step.block, step.direction.name());
                    break;
                }
                if !tick_down(&mut session, ticks_per_move) {
                    break;
                }
            }
        }
        None => {
            println!("plan: no solution found, playing randomly");
            let mut rng = StdRng::seed_from_u64(seed.unwrap_or(DEFAULT_SEED));
            let mut budget = RANDOM_MOVE_BUDGET;
            while session.state().result == GameResult::None && budget > 0 {
                budget -= 1;
                let state = session.state();
                if state.blocks.is_empty() {
                    break;
                }
                let block = &state.blocks[rng.gen_range(0..state.blocks.len())];
                let direction = ALL_DIRECTIONS[rng.gen_range(0..ALL_DIRECTIONS.len())];
                let (dx, dy) = direction.delta();
                let (id, target) = (block.id, block.anchor.offset(dx, dy));
                session.attempt_move(id, target);
                if !tick_down(&mut session, ticks_per_move) {
                    break;
                }
            }
        }
    }

    report(&session);
    session
}

fn tick_down(session: &mut Session, ticks_per_move: u32) -> bool {
    let remaining = session.state().time_remaining as i64 - ticks_per_move as i64;
    session.tick(remaining);
    session.state().result == GameResult::None
}

fn report(session: &Session) {
    let state = session.state();
    match state.result {
        GameResult::Victory => {
            println!("result: victory");
            if let Some(report) = session.victory_report() {
                println!("moves: {}", report.moves);
                println!("stars: {}", report.stars);
                println!("gold: {}", report.gold);
                println!("time left: {}s", report.time_remaining);
            }
        }
        GameResult::Defeat => {
            println!("result: defeat (time expired)");
            println!("moves: {}", state.moves);
        }
        GameResult::None => {
            if session.is_deadlocked() {
                println!("result: stuck (no legal single-step move)");
            } else {
                println!("result: unfinished");
            }
            println!("moves: {}", state.moves);
            for objective in session.objectives() {
                println!(
                    "objective {}: {}/{}",
                    objective.color.name(),
                    objective.collected,
                    objective.required,
                );
            }
        }
    }
}
