use std::collections::{HashSet, VecDeque};

use crate::game::{apply_move, Session};
use crate::grid::{Direction, Position, ALL_DIRECTIONS};
use crate::level::LevelConfig;
use crate::state::{BlockId, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverLimits {
    pub max_moves: u32,
    pub max_states: usize,
}

impl Default for SolverLimits {
    fn default() -> Self {
        Self {
            max_moves: 100,
            max_states: 10_000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverMove {
    pub block: BlockId,
    pub direction: Direction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<SolverMove>,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

type StateKey = (
    Vec<(BlockId, i32, i32, u32)>,
    Vec<(i32, i32, u8)>,
    Vec<usize>,
);

fn state_key(state: &GameState) -> StateKey {
    let mut blocks: Vec<_> = state
        .blocks
        .iter()
        .map(|block| (block.id, block.anchor.x, block.anchor.y, block.counter))
        .collect();
    blocks.sort_unstable();
    let mut coins: Vec<_> = state
        .coins
        .iter()
        .map(|coin| (coin.position.x, coin.position.y, coin.color.index() as u8))
        .collect();
    coins.sort_unstable();
    let queues = state
        .queues
        .iter()
        .map(|queue| queue.pending.len())
        .collect();
    (blocks, coins, queues)
}

/// Breadth-first search over single-step block moves. Returns the shortest
/// winning move list found within the limits, or `None` when the depth or
/// state budget runs out first.
pub fn solve(config: &LevelConfig, limits: SolverLimits) -> Option<Solution> {
    let start = Session::new(config).state().clone();
    if start.is_cleared() {
        return Some(Solution { moves: Vec::new() });
    }

    let mut visited: HashSet<StateKey> = HashSet::new();
    visited.insert(state_key(&start));
    let mut frontier: VecDeque<(GameState, Vec<SolverMove>)> = VecDeque::new();
    frontier.push_back((start, Vec::new()));
    let mut explored = 0usize;

    while let Some((state, path)) = frontier.pop_front() {
        explored += 1;
        if explored > limits.max_states {
            break;
        }
        if path.len() as u32 >= limits.max_moves {
            continue;
        }
        let anchors: Vec<(BlockId, Position)> = state
            .blocks
            .iter()
            .map(|block| (block.id, block.anchor))
            .collect();
        for (block_id, anchor) in anchors {
            for direction in ALL_DIRECTIONS {
                let (dx, dy) = direction.delta();
                let mut next = state.clone();
                if !apply_move(&mut next, block_id, anchor.offset(dx, dy)) {
                    continue;
                }
                if !visited.insert(state_key(&next)) {
                    continue;
                }
                let mut next_path = path.clone();
                next_path.push(SolverMove {
                    block: block_id,
                    direction,
                });
                if next.is_cleared() {
                    return Some(Solution { moves: next_path });
                }
                frontier.push_back((next, next_path));
            }
        }
    }
    None
}

pub fn is_solvable(config: &LevelConfig, limits: SolverLimits) -> bool {
    solve(config, limits).is_some()
}
