use rkyv::{Archive, Deserialize, Serialize};

use crate::catalog::{Color, ShapeId};
use crate::grid::{absolute_cells, Position};

pub type BlockId = u32;
pub type CoinId = u32;

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub shape: ShapeId,
    pub color: Color,
    pub anchor: Position,
    pub counter: u32,
}

impl Block {
    pub fn cells(&self) -> Vec<Position> {
        absolute_cells(self.shape, self.anchor)
    }

    pub fn occupies(&self, position: Position) -> bool {
        self.shape
            .cells()
            .iter()
            .any(|cell| self.anchor.offset(cell.x, cell.y) == position)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub id: CoinId,
    pub color: Color,
    pub position: Position,
}

/// Feed of coins that surface one at a time at a fixed cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CoinQueue {
    pub position: Position,
    pub pending: Vec<Color>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[repr(u8)]
pub enum GameResult {
    None,
    Victory,
    Defeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerPhase {
    Normal,
    Warning,
    Critical,
}

pub const TIMER_WARNING_NUM: u32 = 1;
pub const TIMER_WARNING_DEN: u32 = 2;
pub const TIMER_CRITICAL_NUM: u32 = 1;
pub const TIMER_CRITICAL_DEN: u32 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub grid_width: i32,
    pub grid_height: i32,
    pub blocks: Vec<Block>,
    pub coins: Vec<Coin>,
    pub walls: Vec<Position>,
    pub queues: Vec<CoinQueue>,
    pub next_coin_id: CoinId,
    pub moves: u32,
    pub time_limit: u32,
    pub time_remaining: u32,
    pub is_playing: bool,
    pub is_paused: bool,
    pub result: GameResult,
}

impl GameState {
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn block_at(&self, position: Position) -> Option<&Block> {
        self.blocks.iter().find(|block| block.occupies(position))
    }

    pub fn coin_at(&self, position: Position) -> Option<&Coin> {
        self.coins.iter().find(|coin| coin.position == position)
    }

    pub fn queues_drained(&self) -> bool {
        self.queues.iter().all(|queue| queue.pending.is_empty())
    }

    pub fn is_cleared(&self) -> bool {
        self.blocks.is_empty() && self.coins.is_empty() && self.queues_drained()
    }

    pub fn timer_phase(&self) -> TimerPhase {
        if self.time_remaining * TIMER_CRITICAL_DEN <= self.time_limit * TIMER_CRITICAL_NUM {
            TimerPhase::Critical
        } else if self.time_remaining * TIMER_WARNING_DEN <= self.time_limit * TIMER_WARNING_NUM {
            TimerPhase::Warning
        } else {
            TimerPhase::Normal
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn state_with_time(limit: u32, remaining: u32) -> GameState {
        GameState {
            grid_width: 6,
            grid_height: 6,
            blocks: Vec::new(),
            coins: Vec::new(),
            walls: Vec::new(),
            queues: Vec::new(),
            next_coin_id: 0,
            moves: 0,
            time_limit: limit,
            time_remaining: remaining,
            is_playing: true,
            is_paused: false,
            result: GameResult::None,
        }
    }

    #[test]
    fn timer_phase_thresholds() {
        assert_eq!(state_with_time(100, 100).timer_phase(), TimerPhase::Normal);
        assert_eq!(state_with_time(100, 51).timer_phase(), TimerPhase::Normal);
        assert_eq!(state_with_time(100, 50).timer_phase(), TimerPhase::Warning);
        assert_eq!(state_with_time(100, 21).timer_phase(), TimerPhase::Warning);
        assert_eq!(state_with_time(100, 20).timer_phase(), TimerPhase::Critical);
        assert_eq!(state_with_time(100, 0).timer_phase(), TimerPhase::Critical);
    }
}
