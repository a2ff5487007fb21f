use crate::catalog::COLOR_COUNT;
use crate::grid::{is_valid_placement, Position, ALL_DIRECTIONS};
use crate::ledger::{self, collectable_coins, Objective};
use crate::level::LevelConfig;
use crate::score::{gold_for_stars, stars_for_moves};
use crate::state::{Block, BlockId, Coin, CoinQueue, GameResult, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VictoryReport {
    pub level_id: u32,
    pub stars: u8,
    pub moves: u32,
    pub time_remaining: u32,
    pub gold: u32,
}

/// One running level. Owns the live state plus the snapshot taken right
/// after initialization, which `reset` restores verbatim.
#[derive(Clone, Debug)]
pub struct Session {
    pub(crate) level_id: u32,
    pub(crate) three_star_ceiling: u32,
    pub(crate) two_star_ceiling: u32,
    pub(crate) required: [u32; COLOR_COUNT],
    pub(crate) state: GameState,
    pub(crate) initial: GameState,
}

impl Session {
    /// Assumes a config already accepted by `level::validate`.
    pub fn new(config: &LevelConfig) -> Self {
        let blocks: Vec<Block> = config
            .blocks
            .iter()
            .enumerate()
            .map(|(index, spec)| Block {
                id: index as BlockId,
                shape: spec.shape,
                color: spec.color,
                anchor: spec.anchor,
                counter: spec.counter,
            })
            .collect();
        let coins: Vec<Coin> = config
            .coins
            .iter()
            .enumerate()
            .map(|(index, spec)| Coin {
                id: index as u32,
                color: spec.color,
                position: spec.position,
            })
            .collect();
        let queues: Vec<CoinQueue> = config
            .queues
            .iter()
            .map(|spec| CoinQueue {
                position: spec.position,
                pending: spec.items.clone(),
            })
            .collect();

        // The objective baseline comes from the initial counters, before any
        // queue head gets collected on the spot.
        let required = ledger::coins_required_by_color(&blocks);

        let next_coin_id = coins.len() as u32;
        let mut state = GameState {
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            blocks,
            coins,
            walls: config.walls.clone(),
            queues,
            next_coin_id,
            moves: 0,
            time_limit: config.time_limit,
            time_remaining: config.time_limit,
            is_playing: true,
            is_paused: false,
            result: GameResult::None,
        };
        process_queue_spawns(&mut state);
        let initial = state.clone();

        Session {
            level_id: config.id,
            three_star_ceiling: config.max_moves_three_stars,
            two_star_ceiling: config.max_moves_two_stars,
            required,
            state,
            initial,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn level_id(&self) -> u32 {
        self.level_id
    }

    /// Relocate a block to an absolute anchor. Returns whether the move was
    /// accepted; a rejected move leaves the state untouched.
    pub fn attempt_move(&mut self, block_id: BlockId, target: Position) -> bool {
        if !self.accepts_input() {
            return false;
        }
        apply_move(&mut self.state, block_id, target)
    }

    /// Feed the externally driven countdown. Values below zero clamp to zero
    /// and zero means defeat.
    pub fn tick(&mut self, time_remaining: i64) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let clamped = time_remaining.max(0) as u32;
        self.state.time_remaining = clamped;
        if clamped == 0 {
            self.state.result = GameResult::Defeat;
            self.state.is_playing = false;
        }
        true
    }

    pub fn pause(&mut self) {
        if self.state.result == GameResult::None {
            self.state.is_paused = true;
        }
    }

    pub fn resume(&mut self) {
        if self.state.result == GameResult::None {
            self.state.is_paused = false;
        }
    }

    /// Restore the initialization snapshot, discarding every intervening
    /// mutation.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
    }

    pub fn objectives(&self) -> Vec<Objective> {
        let mut remaining = ledger::coins_remaining_by_color(&self.state.coins);
        let queued = ledger::queued_by_color(&self.state.queues);
        for (slot, extra) in remaining.iter_mut().zip(queued) {
            *slot += extra;
        }
        ledger::objectives(&self.required, &remaining)
    }

    pub fn victory_report(&self) -> Option<VictoryReport> {
        if self.state.result != GameResult::Victory {
            return None;
        }
        let stars = stars_for_moves(
            self.state.moves,
            self.three_star_ceiling,
            self.two_star_ceiling,
        );
        Some(VictoryReport {
            level_id: self.level_id,
            stars,
            moves: self.state.moves,
            time_remaining: self.state.time_remaining,
            gold: gold_for_stars(stars),
        })
    }

    pub fn is_deadlocked(&self) -> bool {
        is_deadlocked(&self.state)
    }

    fn accepts_input(&self) -> bool {
        self.state.is_playing && !self.state.is_paused && self.state.result == GameResult::None
    }
}

/// Guard-free move transition shared by the session and the solver: validate,
/// collect, deplete, spawn from queues, then evaluate victory.
pub fn apply_move(state: &mut GameState, block_id: BlockId, target: Position) -> bool {
    let Some(index) = state.blocks.iter().position(|block| block.id == block_id) else {
        return false;
    };
    let mut candidate = state.blocks[index].clone();
    candidate.anchor = target;
    if !is_valid_placement(
        &candidate,
        state.grid_width,
        state.grid_height,
        &state.blocks,
        &state.walls,
    ) {
        return false;
    }

    let collected = collectable_coins(&candidate, &state.coins);
    state.coins.retain(|coin| !collected.contains(&coin.id));
    let collected_count = collected.len() as u32;

    state.moves += 1;
    if collected_count >= candidate.counter {
        state.blocks.remove(index);
    } else {
        candidate.counter -= collected_count;
        state.blocks[index] = candidate;
    }

    process_queue_spawns(state);

    if state.is_cleared() {
        state.result = GameResult::Victory;
        state.is_playing = false;
    }
    true
}

/// Surface pending queue heads. A matching block parked on the cell collects
/// the head instantly and the queue keeps draining; a mismatched block keeps
/// the queue waiting; an empty cell receives the head as a live coin.
pub(crate) fn process_queue_spawns(state: &mut GameState) {
    for queue_index in 0..state.queues.len() {
        loop {
            let Some(&head) = state.queues[queue_index].pending.first() else {
                break;
            };
            let position = state.queues[queue_index].position;
            if state.coins.iter().any(|coin| coin.position == position) {
                break;
            }
            match state.blocks.iter().position(|block| block.occupies(position)) {
                Some(block_index) => {
                    if state.blocks[block_index].color != head {
                        break;
                    }
                    state.queues[queue_index].pending.remove(0);
                    if state.blocks[block_index].counter <= 1 {
                        state.blocks.remove(block_index);
                    } else {
                        state.blocks[block_index].counter -= 1;
                    }
                }
                None => {
                    state.queues[queue_index].pending.remove(0);
                    let id = state.next_coin_id;
                    state.next_coin_id += 1;
                    state.coins.push(Coin {
                        id,
                        color: head,
                        position,
                    });
                }
            }
        }
    }
}

pub fn has_valid_moves(state: &GameState) -> bool {
    for block in &state.blocks {
        for direction in ALL_DIRECTIONS {
            let (dx, dy) = direction.delta();
            let mut candidate = block.clone();
            candidate.anchor = block.anchor.offset(dx, dy);
            if is_valid_placement(
                &candidate,
                state.grid_width,
                state.grid_height,
                &state.blocks,
                &state.walls,
            ) {
                return true;
            }
        }
    }
    false
}

/// Blocks remain but none can take a single step. Advisory only; the level
/// is still lost through the clock, not through this flag.
pub fn is_deadlocked(state: &GameState) -> bool {
    state.result == GameResult::None && !state.blocks.is_empty() && !has_valid_moves(state)
}
