use std::fmt;

use crate::catalog::{Color, ShapeId, COLOR_COUNT};
use crate::grid::{absolute_cells, in_bounds, Position};

#[derive(Clone, Debug, PartialEq)]
pub struct BlockSpec {
    pub shape: ShapeId,
    pub color: Color,
    pub anchor: Position,
    pub counter: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CoinSpec {
    pub color: Color,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CoinQueueSpec {
    pub position: Position,
    pub items: Vec<Color>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelConfig {
    pub id: u32,
    pub name: String,
    pub grid_width: i32,
    pub grid_height: i32,
    pub time_limit: u32,
    pub max_moves_three_stars: u32,
    pub max_moves_two_stars: u32,
    pub blocks: Vec<BlockSpec>,
    pub coins: Vec<CoinSpec>,
    pub queues: Vec<CoinQueueSpec>,
    pub walls: Vec<Position>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelError {
    GridDimensions { width: i32, height: i32 },
    TimeLimit,
    StarThresholds { three_star: u32, two_star: u32 },
    NoBlocks,
    BlockCounter { block: usize },
    BlockOutOfBounds { block: usize, cell: Position },
    BlockOnWall { block: usize, cell: Position },
    BlocksOverlap { first: usize, second: usize, cell: Position },
    CoinOutOfBounds { coin: usize, position: Position },
    CoinOnWall { coin: usize, position: Position },
    DuplicateCoin { position: Position },
    QueueOutOfBounds { queue: usize, position: Position },
    QueueOnWall { queue: usize, position: Position },
    QueueEmpty { queue: usize },
    CoinSupply { color: Color, required: u32, available: u32 },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::GridDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            LevelError::TimeLimit => write!(f, "time limit must be positive"),
            LevelError::StarThresholds {
                three_star,
                two_star,
            } => write!(
                f,
                "three-star ceiling {three_star} exceeds two-star ceiling {two_star}"
            ),
            LevelError::NoBlocks => write!(f, "level has no blocks"),
            LevelError::BlockCounter { block } => {
                write!(f, "block {block} has a zero counter")
            }
            LevelError::BlockOutOfBounds { block, cell } => {
                write!(f, "block {block} cell ({}, {}) is out of bounds", cell.x, cell.y)
            }
            LevelError::BlockOnWall { block, cell } => {
                write!(f, "block {block} cell ({}, {}) sits on a wall", cell.x, cell.y)
            }
            LevelError::BlocksOverlap {
                first,
                second,
                cell,
            } => write!(
                f,
                "blocks {first} and {second} overlap at ({}, {})",
                cell.x, cell.y
            ),
            LevelError::CoinOutOfBounds { coin, position } => {
                write!(f, "coin {coin} at ({}, {}) is out of bounds", position.x, position.y)
            }
            LevelError::CoinOnWall { coin, position } => {
                write!(f, "coin {coin} at ({}, {}) sits on a wall", position.x, position.y)
            }
            LevelError::DuplicateCoin { position } => {
                write!(f, "more than one coin at ({}, {})", position.x, position.y)
            }
            LevelError::QueueOutOfBounds { queue, position } => {
                write!(f, "queue {queue} at ({}, {}) is out of bounds", position.x, position.y)
            }
            LevelError::QueueOnWall { queue, position } => {
                write!(f, "queue {queue} at ({}, {}) sits on a wall", position.x, position.y)
            }
            LevelError::QueueEmpty { queue } => write!(f, "queue {queue} has no items"),
            LevelError::CoinSupply {
                color,
                required,
                available,
            } => write!(
                f,
                "not enough {} coins: {available} available for {required} required",
                color.name()
            ),
        }
    }
}

impl std::error::Error for LevelError {}

/// Checks a level once at the loader boundary; the state machine assumes
/// validated input afterwards.
pub fn validate(config: &LevelConfig) -> Result<(), LevelError> {
    if config.grid_width <= 0 || config.grid_height <= 0 {
        return Err(LevelError::GridDimensions {
            width: config.grid_width,
            height: config.grid_height,
        });
    }
    if config.time_limit == 0 {
        return Err(LevelError::TimeLimit);
    }
    if config.max_moves_three_stars > config.max_moves_two_stars {
        return Err(LevelError::StarThresholds {
            three_star: config.max_moves_three_stars,
            two_star: config.max_moves_two_stars,
        });
    }
    if config.blocks.is_empty() {
        return Err(LevelError::NoBlocks);
    }

    let mut claimed: Vec<(Position, usize)> = Vec::new();
    for (index, block) in config.blocks.iter().enumerate() {
        if block.counter == 0 {
            return Err(LevelError::BlockCounter { block: index });
        }
        for cell in absolute_cells(block.shape, block.anchor) {
            if !in_bounds(cell, config.grid_width, config.grid_height) {
                return Err(LevelError::BlockOutOfBounds { block: index, cell });
            }
            if config.walls.contains(&cell) {
                return Err(LevelError::BlockOnWall { block: index, cell });
            }
            if let Some((_, first)) = claimed.iter().find(|(taken, _)| *taken == cell) {
                return Err(LevelError::BlocksOverlap {
                    first: *first,
                    second: index,
                    cell,
                });
            }
            claimed.push((cell, index));
        }
    }

    let mut coin_cells: Vec<Position> = Vec::new();
    for (index, coin) in config.coins.iter().enumerate() {
        if !in_bounds(coin.position, config.grid_width, config.grid_height) {
            return Err(LevelError::CoinOutOfBounds {
                coin: index,
                position: coin.position,
            });
        }
        if config.walls.contains(&coin.position) {
            return Err(LevelError::CoinOnWall {
                coin: index,
                position: coin.position,
            });
        }
        if coin_cells.contains(&coin.position) {
            return Err(LevelError::DuplicateCoin {
                position: coin.position,
            });
        }
        coin_cells.push(coin.position);
    }

    for (index, queue) in config.queues.iter().enumerate() {
        if !in_bounds(queue.position, config.grid_width, config.grid_height) {
            return Err(LevelError::QueueOutOfBounds {
                queue: index,
                position: queue.position,
            });
        }
        if config.walls.contains(&queue.position) {
            return Err(LevelError::QueueOnWall {
                queue: index,
                position: queue.position,
            });
        }
        if queue.items.is_empty() {
            return Err(LevelError::QueueEmpty { queue: index });
        }
    }

    let mut required = [0u32; COLOR_COUNT];
    for block in &config.blocks {
        required[block.color.index()] += block.counter;
    }
    let mut available = [0u32; COLOR_COUNT];
    for coin in &config.coins {
        available[coin.color.index()] += 1;
    }
    for queue in &config.queues {
        for color in &queue.items {
            available[color.index()] += 1;
        }
    }
    for color in crate::catalog::ALL_COLORS {
        let index = color.index();
        if available[index] < required[index] {
            return Err(LevelError::CoinSupply {
                color,
                required: required[index],
                available: available[index],
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn minimal_level() -> LevelConfig {
        LevelConfig {
            id: 99,
            name: "test".to_string(),
            grid_width: 6,
            grid_height: 6,
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
                position: Position::new(1, 3),
            }],
            queues: Vec::new(),
            walls: Vec::new(),
        }
    }

    #[test]
    fn minimal_level_passes() {
        assert_eq!(validate(&minimal_level()), Ok(()));
    }

    #[test]
    fn reversed_star_thresholds_are_rejected() {
        let mut config = minimal_level();
        config.max_moves_three_stars = 5;
        config.max_moves_two_stars = 3;
        assert_eq!(
            validate(&config),
            Err(LevelError::StarThresholds {
                three_star: 5,
                two_star: 3,
            })
        );
    }

    #[test]
    fn block_on_wall_is_rejected() {
        let mut config = minimal_level();
        config.walls.push(Position::new(2, 1));
        assert_eq!(
            validate(&config),
            Err(LevelError::BlockOnWall {
                block: 0,
                cell: Position::new(2, 1),
            })
        );
    }

    #[test]
    fn overlapping_blocks_are_rejected() {
        let mut config = minimal_level();
        config.blocks.push(BlockSpec {
            shape: ShapeId::O4,
            color: Color::Red,
            anchor: Position::new(2, 1),
            counter: 1,
        });
        config.coins.push(CoinSpec {
            color: Color::Red,
            position: Position::new(4, 4),
        });
        assert_eq!(
            validate(&config),
            Err(LevelError::BlocksOverlap {
                first: 0,
                second: 1,
                cell: Position::new(2, 1),
            })
        );
    }

    #[test]
    fn short_coin_supply_is_rejected() {
        let mut config = minimal_level();
        config.blocks[0].counter = 3;
        assert_eq!(
            validate(&config),
            Err(LevelError::CoinSupply {
                color: Color::Red,
                required: 3,
                available: 1,
            })
        );
    }

    #[test]
    fn queued_coins_count_towards_supply() {
        let mut config = minimal_level();
        config.blocks[0].counter = 2;
        config.queues.push(CoinQueueSpec {
            position: Position::new(4, 4),
            items: vec![Color::Red],
        });
        assert_eq!(validate(&config), Ok(()));
    }
}
