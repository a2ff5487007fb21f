use rkyv::{Archive, Deserialize, Serialize};

use crate::catalog::{Color, ShapeId, COLOR_COUNT};
use crate::game::Session;
use crate::grid::Position;
use crate::state::{Block, Coin, CoinQueue, GameResult, GameState};

pub const GAME_SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct BlockRecord {
    pub id: u32,
    pub shape: ShapeId,
    pub color: Color,
    pub anchor: Position,
    pub counter: u32,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct CoinRecord {
    pub id: u32,
    pub color: Color,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct QueueRecord {
    pub position: Position,
    pub pending: Vec<Color>,
}

/// Read-only projection of a running session for external consumers. Also
/// enough to rebuild a session, which then treats the restored state as its
/// reset baseline.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u32,
    pub level_id: u32,
    pub grid_width: i32,
    pub grid_height: i32,
    pub moves: u32,
    pub time_limit: u32,
    pub time_remaining: u32,
    pub is_playing: bool,
    pub is_paused: bool,
    pub result: GameResult,
    pub blocks: Vec<BlockRecord>,
    pub coins: Vec<CoinRecord>,
    pub walls: Vec<Position>,
    pub queues: Vec<QueueRecord>,
    pub next_coin_id: u32,
    pub required: Vec<u32>,
    pub three_star_ceiling: u32,
    pub two_star_ceiling: u32,
}

impl Session {
    pub fn snapshot(&self) -> GameSnapshot {
        let state = self.state();
        GameSnapshot {
            version: GAME_SNAPSHOT_VERSION,
            level_id: self.level_id,
            grid_width: state.grid_width,
            grid_height: state.grid_height,
            moves: state.moves,
            time_limit: state.time_limit,
            time_remaining: state.time_remaining,
            is_playing: state.is_playing,
            is_paused: state.is_paused,
            result: state.result,
            blocks: state
                .blocks
                .iter()
                .map(|block| BlockRecord {
                    id: block.id,
                    shape: block.shape,
                    color: block.color,
                    anchor: block.anchor,
                    counter: block.counter,
                })
                .collect(),
            coins: state
                .coins
                .iter()
                .map(|coin| CoinRecord {
                    id: coin.id,
                    color: coin.color,
                    position: coin.position,
                })
                .collect(),
            walls: state.walls.clone(),
            queues: state
                .queues
                .iter()
                .map(|queue| QueueRecord {
                    position: queue.position,
                    pending: queue.pending.clone(),
                })
                .collect(),
            next_coin_id: state.next_coin_id,
            required: self.required.to_vec(),
            three_star_ceiling: self.three_star_ceiling,
            two_star_ceiling: self.two_star_ceiling,
        }
    }

    pub fn from_snapshot(snapshot: &GameSnapshot) -> Option<Session> {
        if snapshot.version != GAME_SNAPSHOT_VERSION {
            return None;
        }
        if snapshot.required.len() != COLOR_COUNT {
            return None;
        }
        let mut required = [0u32; COLOR_COUNT];
        required.copy_from_slice(&snapshot.required);

        let state = GameState {
            grid_width: snapshot.grid_width,
            grid_height: snapshot.grid_height,
            blocks: snapshot
                .blocks
                .iter()
                .map(|record| Block {
                    id: record.id,
                    shape: record.shape,
                    color: record.color,
                    anchor: record.anchor,
                    counter: record.counter,
                })
                .collect(),
            coins: snapshot
                .coins
                .iter()
                .map(|record| Coin {
                    id: record.id,
                    color: record.color,
                    position: record.position,
                })
                .collect(),
            walls: snapshot.walls.clone(),
            queues: snapshot
                .queues
                .iter()
                .map(|record| CoinQueue {
                    position: record.position,
                    pending: record.pending.clone(),
                })
                .collect(),
            next_coin_id: snapshot.next_coin_id,
            moves: snapshot.moves,
            time_limit: snapshot.time_limit,
            time_remaining: snapshot.time_remaining,
            is_playing: snapshot.is_playing,
            is_paused: snapshot.is_paused,
            result: snapshot.result,
        };
        Some(Session {
            level_id: snapshot.level_id,
            three_star_ceiling: snapshot.three_star_ceiling,
            two_star_ceiling: snapshot.two_star_ceiling,
            required,
            initial: state.clone(),
            state,
        })
    }
}
