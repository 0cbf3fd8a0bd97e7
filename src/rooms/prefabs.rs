// src/rooms/prefabs.rs
// Built-in room templates. Every template is 10x8 and fully painted, so the
// first Side room sets a 10x8 footprint.

use std::collections::BTreeMap;

use crate::grid::Vector2D;
use crate::rooms::catalog::{CatalogSource, TileId};
use crate::rooms::RoomType;

pub const TILE_BRICK: TileId = 1;
pub const TILE_AIR: TileId = 2;
pub const TILE_LADDER: TileId = 3;

const SIDE: &[&[&str]] = &[
    &[
        "##########",
        "#........#",
        "#..##....#",
        "#........#",
        "#.....##.#",
        "#........#",
        "#.##.....#",
        "##########",
    ],
    &[
        "##########",
        "##########",
        "###....###",
        "##......##",
        "##......##",
        "###....###",
        "##########",
        "##########",
    ],
];

const LR: &[&[&str]] = &[
    &[
        "##########",
        "#........#",
        "#........#",
        "#........#",
        "..........",
        "..........",
        "...####...",
        "##########",
    ],
    &[
        "##########",
        "##########",
        "##......##",
        "#........#",
        "..........",
        "....##....",
        "..........",
        "##########",
    ],
];

const LRB: &[&[&str]] = &[
    &[
        "##########",
        "#........#",
        "#........#",
        "#........#",
        "..........",
        "..........",
        "..........",
        "####..####",
    ],
    &[
        "##########",
        "#...##...#",
        "#........#",
        "#........#",
        "..........",
        "..##..##..",
        ".........#",
        "#####..###",
    ],
];

const LRT: &[&[&str]] = &[
    &[
        "####HH####",
        "#...HH...#",
        "#...HH...#",
        "#...HH...#",
        "....HH....",
        "..........",
        "..........",
        "##########",
    ],
    &[
        "######H###",
        "#.....H..#",
        "#.....H..#",
        "#..####..#",
        "..........",
        "..........",
        "....##....",
        "##########",
    ],
];

const LRTB: &[&[&str]] = &[
    &[
        "####HH####",
        "#...HH...#",
        "#...HH...#",
        "#...HH...#",
        "....HH....",
        "....HH....",
        "....HH....",
        "####HH####",
    ],
    &[
        "###H######",
        "#..H.....#",
        "#..H.....#",
        "#..H.....#",
        "..........",
        "..........",
        "#.......#.",
        "#####..###",
    ],
];

fn templates(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|room| room.iter().map(|row| row.to_string()).collect())
        .collect()
}

pub fn builtin_source() -> CatalogSource {
    let mut legend = BTreeMap::new();
    legend.insert('#', TILE_BRICK);
    legend.insert('.', TILE_AIR);
    legend.insert('H', TILE_LADDER);

    let mut rooms = BTreeMap::new();
    rooms.insert(RoomType::Side, templates(SIDE));
    rooms.insert(RoomType::Lr, templates(LR));
    rooms.insert(RoomType::Lrb, templates(LRB));
    rooms.insert(RoomType::Lrt, templates(LRT));
    rooms.insert(RoomType::Lrtb, templates(LRTB));

    CatalogSource {
        cell_size: Vector2D::new(16.0, 16.0),
        legend,
        rooms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_is_ten_by_eight() {
        for (room_type, rooms) in builtin_source().rooms {
            for room in rooms {
                assert_eq!(room.len(), 8, "{:?}", room_type);
                assert!(room.iter().all(|row| row.chars().count() == 10), "{:?}", room_type);
            }
        }
    }

    #[test]
    fn test_openings_match_room_type() {
        // Bottom row has a gap exactly when the type is bottom-opened.
        for (room_type, rooms) in builtin_source().rooms {
            for room in rooms {
                let bottom_open = room[7].chars().any(|c| c != '#');
                assert_eq!(bottom_open, room_type.is_bottom_opened(), "{:?}", room_type);
            }
        }
    }
}
