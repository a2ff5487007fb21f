use rkyv::{Archive, Deserialize, Serialize};

use crate::catalog::ShapeId;
use crate::state::Block;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

pub fn absolute_cells(shape: ShapeId, anchor: Position) -> Vec<Position> {
    shape
        .cells()
        .iter()
        .map(|cell| anchor.offset(cell.x, cell.y))
        .collect()
}

pub fn in_bounds(position: Position, grid_width: i32, grid_height: i32) -> bool {
    position.x >= 0 && position.x < grid_width && position.y >= 0 && position.y < grid_height
}

pub fn is_valid_placement(
    candidate: &Block,
    grid_width: i32,
    grid_height: i32,
    others: &[Block],
    walls: &[Position],
) -> bool {
    for cell in absolute_cells(candidate.shape, candidate.anchor) {
        if !in_bounds(cell, grid_width, grid_height) {
            return false;
        }
        if walls.contains(&cell) {
            return false;
        }
        // Blocks sharing the candidate's id are the instance being replaced.
        for other in others {
            if other.id == candidate.id {
                continue;
            }
            if other.occupies(cell) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::catalog::Color;

    fn block(id: u32, shape: ShapeId, anchor: Position) -> Block {
        Block {
            id,
            shape,
            color: Color::Red,
            anchor,
            counter: 1,
        }
    }

    #[test]
    fn absolute_cells_add_anchor_to_each_offset() {
        let cells = absolute_cells(ShapeId::T4, Position::new(2, 3));
        assert_eq!(
            cells,
            vec![
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(4, 3),
                Position::new(3, 4),
            ]
        );
        assert_eq!(cells.len(), ShapeId::T4.cells().len());
    }

    #[test]
    fn placement_rejects_out_of_bounds_cells() {
        let candidate = block(0, ShapeId::I4, Position::new(3, 0));
        assert!(!is_valid_placement(&candidate, 6, 6, &[], &[]));
        let candidate = block(0, ShapeId::I3, Position::new(-1, 0));
        assert!(!is_valid_placement(&candidate, 6, 6, &[], &[]));
    }

    #[test]
    fn placement_rejects_wall_overlap_without_other_blocks() {
        let candidate = block(0, ShapeId::O4, Position::new(1, 1));
        let walls = [Position::new(2, 2)];
        assert!(!is_valid_placement(&candidate, 6, 6, &[], &walls));
    }

    #[test]
    fn placement_rejects_overlap_with_other_blocks_only() {
        let candidate = block(0, ShapeId::I3, Position::new(1, 1));
        let other = block(1, ShapeId::O4, Position::new(2, 1));
        assert!(!is_valid_placement(&candidate, 8, 8, &[other], &[]));
    }

    #[test]
    fn placement_ignores_the_candidates_own_prior_cells() {
        let prior = block(7, ShapeId::I3, Position::new(1, 1));
        let candidate = block(7, ShapeId::I3, Position::new(2, 1));
        assert!(is_valid_placement(&candidate, 8, 8, &[prior], &[]));
    }
}
