use crate::catalog::{Color, ShapeId};
use crate::grid::Position;
use crate::level::{BlockSpec, CoinQueueSpec, CoinSpec, LevelConfig};

#[derive(Clone, Copy)]
pub struct LevelCatalogEntry {
    pub id: u32,
    pub name: &'static str,
    build: fn() -> LevelConfig,
}

impl LevelCatalogEntry {
    pub fn config(&self) -> LevelConfig {
        (self.build)()
    }
}

pub const LEVEL_CATALOG: &[LevelCatalogEntry] = &[
    LevelCatalogEntry {
        id: 1,
        name: "Primi Passi",
        build: primi_passi,
    },
    LevelCatalogEntry {
        id: 2,
        name: "Incrocio",
        build: incrocio,
    },
    LevelCatalogEntry {
        id: 3,
        name: "Scivolo di Monete",
        build: scivolo_di_monete,
    },
    LevelCatalogEntry {
        id: 4,
        name: "Cortile",
        build: cortile,
    },
    LevelCatalogEntry {
        id: 5,
        name: "Fuoco Incrociato",
        build: fuoco_incrociato,
    },
];

pub fn level_by_id(id: u32) -> Option<&'static LevelCatalogEntry> {
    LEVEL_CATALOG.iter().find(|entry| entry.id == id)
}

pub fn level_by_name(name: &str) -> Option<&'static LevelCatalogEntry> {
    let trimmed = name.trim();
    LEVEL_CATALOG
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(trimmed))
}

fn border_walls(width: i32, height: i32) -> Vec<Position> {
    let mut walls = Vec::new();
    for x in 0..width {
        walls.push(Position::new(x, 0));
        walls.push(Position::new(x, height - 1));
    }
    for y in 1..height - 1 {
        walls.push(Position::new(0, y));
        walls.push(Position::new(width - 1, y));
    }
    walls
}

fn primi_passi() -> LevelConfig {
    LevelConfig {
        id: 1,
        name: "Primi Passi".to_string(),
        grid_width: 6,
        grid_height: 6,
        time_limit: 120,
        max_moves_three_stars: 2,
        max_moves_two_stars: 4,
        blocks: vec![BlockSpec {
            shape: ShapeId::I4,
            color: Color::Yellow,
            anchor: Position::new(1, 4),
            counter: 4,
        }],
        coins: vec![
            CoinSpec {
                color: Color::Yellow,
                position: Position::new(1, 1),
            },
            CoinSpec {
                color: Color::Yellow,
                position: Position::new(2, 1),
            },
            CoinSpec {
                color: Color::Yellow,
                position: Position::new(3, 1),
            },
            CoinSpec {
                color: Color::Yellow,
                position: Position::new(4, 1),
            },
        ],
        queues: Vec::new(),
        walls: Vec::new(),
    }
}

fn incrocio() -> LevelConfig {
    LevelConfig {
        id: 2,
        name: "Incrocio".to_string(),
        grid_width: 6,
        grid_height: 8,
        time_limit: 90,
        max_moves_three_stars: 1,
        max_moves_two_stars: 3,
        blocks: vec![BlockSpec {
            shape: ShapeId::T4,
            color: Color::Red,
            anchor: Position::new(2, 2),
            counter: 1,
        }],
        coins: vec![CoinSpec {
            color: Color::Red,
            position: Position::new(3, 4),
        }],
        queues: Vec::new(),
        walls: border_walls(6, 8),
    }
}

fn scivolo_di_monete() -> LevelConfig {
    LevelConfig {
        id: 3,
        name: "Scivolo di Monete".to_string(),
        grid_width: 7,
        grid_height: 7,
        time_limit: 90,
        max_moves_three_stars: 1,
        max_moves_two_stars: 2,
        blocks: vec![BlockSpec {
            shape: ShapeId::L3,
            color: Color::Blue,
            anchor: Position::new(1, 1),
            counter: 2,
        }],
        coins: Vec::new(),
        queues: vec![CoinQueueSpec {
            position: Position::new(1, 5),
            items: vec![Color::Blue, Color::Blue],
        }],
        walls: border_walls(7, 7),
    }
}

fn cortile() -> LevelConfig {
    let mut walls = border_walls(8, 8);
    walls.push(Position::new(3, 2));
    walls.push(Position::new(3, 3));
    LevelConfig {
        id: 4,
        name: "Cortile".to_string(),
        grid_width: 8,
        grid_height: 8,
        time_limit: 150,
        max_moves_three_stars: 6,
        max_moves_two_stars: 10,
        blocks: vec![BlockSpec {
            shape: ShapeId::O4,
            color: Color::Purple,
            anchor: Position::new(1, 1),
            counter: 4,
        }],
        coins: vec![
            CoinSpec {
                color: Color::Purple,
                position: Position::new(4, 4),
            },
            CoinSpec {
                color: Color::Purple,
                position: Position::new(5, 4),
            },
            CoinSpec {
                color: Color::Purple,
                position: Position::new(4, 5),
            },
            CoinSpec {
                color: Color::Purple,
                position: Position::new(5, 5),
            },
        ],
        queues: Vec::new(),
        walls,
    }
}

fn fuoco_incrociato() -> LevelConfig {
    LevelConfig {
        id: 5,
        name: "Fuoco Incrociato".to_string(),
        grid_width: 7,
        grid_height: 7,
        time_limit: 120,
        max_moves_three_stars: 2,
        max_moves_two_stars: 5,
        blocks: vec![
            BlockSpec {
                shape: ShapeId::I3,
                color: Color::Green,
                anchor: Position::new(1, 1),
                counter: 2,
            },
            BlockSpec {
                shape: ShapeId::I3,
                color: Color::Yellow,
                anchor: Position::new(3, 3),
                counter: 2,
            },
        ],
        coins: vec![
            CoinSpec {
                color: Color::Green,
                position: Position::new(1, 5),
            },
            CoinSpec {
                color: Color::Green,
                position: Position::new(2, 5),
            },
            CoinSpec {
                color: Color::Yellow,
                position: Position::new(4, 5),
            },
            CoinSpec {
                color: Color::Yellow,
                position: Position::new(5, 5),
            },
        ],
        queues: Vec::new(),
        walls: border_walls(7, 7),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::level::validate;

    #[test]
    fn catalog_ids_are_unique_and_match_configs() {
        for entry in LEVEL_CATALOG {
            let config = entry.config();
            assert_eq!(config.id, entry.id);
            assert_eq!(config.name, entry.name);
            assert_eq!(
                LEVEL_CATALOG.iter().filter(|other| other.id == entry.id).count(),
                1
            );
        }
    }

    #[test]
    fn every_catalog_level_validates() {
        for entry in LEVEL_CATALOG {
            assert_eq!(validate(&entry.config()), Ok(()), "{}", entry.name);
        }
    }

    #[test]
    fn lookup_by_id_and_name() {
        assert_eq!(level_by_id(1).map(|entry| entry.name), Some("Primi Passi"));
        assert_eq!(level_by_name("primi passi").map(|entry| entry.id), Some(1));
        assert!(level_by_id(42).is_none());
        assert!(level_by_name("nope").is_none());
    }
}
