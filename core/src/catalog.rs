use rkyv::{Archive, Deserialize, Serialize};

use crate::grid::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[repr(u8)]
pub enum ShapeId {
    I3,
    L3,
    I4,
    O4,
    L4,
    J4,
    T4,
    S4,
    Z4,
}

pub const SHAPE_CATALOG: &[ShapeId] = &[
    ShapeId::I3,
    ShapeId::L3,
    ShapeId::I4,
    ShapeId::O4,
    ShapeId::L4,
    ShapeId::J4,
    ShapeId::T4,
    ShapeId::S4,
    ShapeId::Z4,
];

const I3_CELLS: [Position; 3] = [
    Position::new(0, 0),
    Position::new(1, 0),
    Position::new(2, 0),
];
const L3_CELLS: [Position; 3] = [
    Position::new(0, 0),
    Position::new(1, 0),
    Position::new(0, 1),
];
const I4_CELLS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(1, 0),
    Position::new(2, 0),
    Position::new(3, 0),
];
const O4_CELLS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(1, 0),
    Position::new(0, 1),
    Position::new(1, 1),
];
const L4_CELLS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, 1),
    Position::new(0, 2),
    Position::new(1, 2),
];
const J4_CELLS: [Position; 4] = [
    Position::new(1, 0),
    Position::new(1, 1),
    Position::new(1, 2),
    Position::new(0, 2),
];
const T4_CELLS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(1, 0),
    Position::new(2, 0),
    Position::new(1, 1),
];
const S4_CELLS: [Position; 4] = [
    Position::new(1, 0),
    Position::new(2, 0),
    Position::new(0, 1),
    Position::new(1, 1),
];
const Z4_CELLS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(1, 0),
    Position::new(1, 1),
    Position::new(2, 1),
];

impl ShapeId {
    pub const fn cells(self) -> &'static [Position] {
        match self {
            ShapeId::I3 => &I3_CELLS,
            ShapeId::L3 => &L3_CELLS,
            ShapeId::I4 => &I4_CELLS,
            ShapeId::O4 => &O4_CELLS,
            ShapeId::L4 => &L4_CELLS,
            ShapeId::J4 => &J4_CELLS,
            ShapeId::T4 => &T4_CELLS,
            ShapeId::S4 => &S4_CELLS,
            ShapeId::Z4 => &Z4_CELLS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShapeId::I3 => "I3",
            ShapeId::L3 => "L3",
            ShapeId::I4 => "I4",
            ShapeId::O4 => "O4",
            ShapeId::L4 => "L4",
            ShapeId::J4 => "J4",
            ShapeId::T4 => "T4",
            ShapeId::S4 => "S4",
            ShapeId::Z4 => "Z4",
        }
    }
}

pub fn shape_by_name(name: &str) -> Option<ShapeId> {
    let trimmed = name.trim();
    SHAPE_CATALOG
        .iter()
        .copied()
        .find(|shape| shape.name().eq_ignore_ascii_case(trimmed))
}

pub const COLOR_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Yellow,
    Blue,
    Red,
    Green,
    Purple,
}

pub const ALL_COLORS: [Color; COLOR_COUNT] = [
    Color::Yellow,
    Color::Blue,
    Color::Red,
    Color::Green,
    Color::Purple,
];

impl Color {
    pub const fn index(self) -> usize {
        match self {
            Color::Yellow => 0,
            Color::Blue => 1,
            Color::Red => 2,
            Color::Green => 3,
            Color::Purple => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
        }
    }
}

pub fn color_by_name(name: &str) -> Option<Color> {
    let trimmed = name.trim();
    ALL_COLORS
        .iter()
        .copied()
        .find(|color| color.name().eq_ignore_ascii_case(trimmed))
}
