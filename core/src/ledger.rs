use crate::catalog::{Color, ALL_COLORS, COLOR_COUNT};
use crate::state::{Block, Coin, CoinId, CoinQueue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Objective {
    pub color: Color,
    pub collected: u32,
    pub required: u32,
}

/// A coin is collectable iff it sits on one of the block's cells and matches
/// the block's color. Coins of any other color are left untouched.
pub fn collectable_coins(block: &Block, coins: &[Coin]) -> Vec<CoinId> {
    let cells = block.cells();
    coins
        .iter()
        .filter(|coin| coin.color == block.color && cells.contains(&coin.position))
        .map(|coin| coin.id)
        .collect()
}

pub fn coins_remaining_by_color(coins: &[Coin]) -> [u32; COLOR_COUNT] {
    let mut remaining = [0u32; COLOR_COUNT];
    for coin in coins {
        remaining[coin.color.index()] += 1;
    }
    remaining
}

pub fn queued_by_color(queues: &[CoinQueue]) -> [u32; COLOR_COUNT] {
    let mut queued = [0u32; COLOR_COUNT];
    for queue in queues {
        for color in &queue.pending {
            queued[color.index()] += 1;
        }
    }
    queued
}

pub fn coins_required_by_color(blocks: &[Block]) -> [u32; COLOR_COUNT] {
    let mut required = [0u32; COLOR_COUNT];
    for block in blocks {
        required[block.color.index()] += block.counter;
    }
    required
}

/// Colors with zero required count are inactive objectives and skipped.
pub fn objectives(
    required: &[u32; COLOR_COUNT],
    remaining: &[u32; COLOR_COUNT],
) -> Vec<Objective> {
    ALL_COLORS
        .iter()
        .filter(|color| required[color.index()] > 0)
        .map(|color| {
            let index = color.index();
            Objective {
                color: *color,
                collected: required[index].saturating_sub(remaining[index]),
                required: required[index],
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::catalog::ShapeId;
    use crate::grid::Position;

    #[test]
    fn collectable_requires_overlap_and_exact_color() {
        let block = Block {
            id: 0,
            shape: ShapeId::I3,
            color: Color::Green,
            anchor: Position::new(1, 1),
            counter: 2,
        };
        let coins = vec![
            Coin {
                id: 0,
                color: Color::Green,
                position: Position::new(2, 1),
            },
            Coin {
                id: 1,
                color: Color::Red,
                position: Position::new(3, 1),
            },
            Coin {
                id: 2,
                color: Color::Green,
                position: Position::new(4, 4),
            },
        ];
        assert_eq!(collectable_coins(&block, &coins), vec![0]);
    }

    #[test]
    fn objectives_skip_colors_with_zero_required() {
        let mut required = [0u32; COLOR_COUNT];
        required[Color::Blue.index()] = 3;
        let mut remaining = [0u32; COLOR_COUNT];
        remaining[Color::Blue.index()] = 1;
        remaining[Color::Purple.index()] = 2;
        let summary = objectives(&required, &remaining);
        assert_eq!(
            summary,
            vec![Objective {
                color: Color::Blue,
                collected: 2,
                required: 3,
            }]
        );
    }
}
