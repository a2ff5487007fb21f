pub mod catalog;
pub mod codec;
pub mod game;
pub mod grid;
pub mod ledger;
pub mod level;
pub mod levels;
pub mod score;
pub mod snapshot;
pub mod solver;
pub mod state;

pub use catalog::{
    color_by_name, shape_by_name, Color, ShapeId, ALL_COLORS, COLOR_COUNT, SHAPE_CATALOG,
};
pub use codec::{decode, encode};
pub use game::{apply_move, has_valid_moves, is_deadlocked, Session, VictoryReport};
pub use grid::{
    absolute_cells, in_bounds, is_valid_placement, Direction, Position, ALL_DIRECTIONS,
};
pub use ledger::{
    collectable_coins, coins_remaining_by_color, coins_required_by_color, Objective,
};
pub use level::{validate, BlockSpec, CoinQueueSpec, CoinSpec, LevelConfig, LevelError};
pub use levels::{level_by_id, level_by_name, LevelCatalogEntry, LEVEL_CATALOG};
pub use score::{gold_for_stars, stars_for_moves};
pub use snapshot::{
    BlockRecord, CoinRecord, GameSnapshot, QueueRecord, GAME_SNAPSHOT_VERSION,
};
pub use solver::{is_solvable, solve, Solution, SolverLimits, SolverMove};
pub use state::{
    Block, BlockId, Coin, CoinId, CoinQueue, GameResult, GameState, TimerPhase,
};
