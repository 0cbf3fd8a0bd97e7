// src/rooms/catalog.rs

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::grid::{MapPos, Size2D, Vector2D};
use crate::rooms::prefabs;
use crate::rooms::RoomType;

/// Identifier of a tile in the tile set.
pub type TileId = u32;

/// One used tile of a room, relative to the room's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomData {
    pub offset: MapPos,
    pub tile: TileId,
}

impl RoomData {
    pub fn new(offset: MapPos, tile: TileId) -> Self {
        Self { offset, tile }
    }
}

/// Source of room layouts.
///
/// `room_data` returns one randomly chosen room of the requested type, so two
/// calls for the same type may return different layouts. An empty result is
/// a valid room with nothing to stamp.
pub trait RoomCatalog {
    fn room_data(
        &self,
        room_type: RoomType,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<RoomData>, CatalogError>;

    /// Footprint of one room, in map cells.
    fn room_size(&self) -> Size2D;

    /// Size of one map cell, in world units.
    fn cell_size(&self) -> Vector2D;
}

/// On-disk shape of a prefab catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSource {
    pub cell_size: Vector2D,
    /// Template character to tile id. Characters not listed are empty cells.
    pub legend: BTreeMap<char, TileId>,
    /// Every template is a list of rows.
    pub rooms: BTreeMap<RoomType, Vec<Vec<String>>>,
}

/// A catalog built from ASCII room templates.
#[derive(Debug, Clone)]
pub struct PrefabCatalog {
    rooms: BTreeMap<RoomType, Vec<Vec<RoomData>>>,
    room_size: Size2D,
    cell_size: Vector2D,
}

impl PrefabCatalog {
    /// The rooms shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_source(&prefabs::builtin_source())
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let source: CatalogSource = serde_json::from_str(json)?;
        Self::from_source(&source)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loading room catalog from {:?}", path);
        Self::from_json(&json)
    }

    pub fn from_source(source: &CatalogSource) -> Result<Self, CatalogError> {
        let mut rooms = BTreeMap::new();
        for (room_type, templates) in &source.rooms {
            let parsed: Vec<Vec<RoomData>> = templates
                .iter()
                .map(|rows| parse_template(rows, &source.legend))
                .collect();
            rooms.insert(*room_type, parsed);
        }

        for room_type in RoomType::ALL {
            if rooms.get(&room_type).map_or(true, |t| t.is_empty()) {
                return Err(CatalogError::NoRooms(room_type));
            }
        }

        // The first Side room defines the footprint of every room.
        let room_size = rooms
            .get(&RoomType::Side)
            .and_then(|t| t.first())
            .and_then(|data| used_extent(data))
            .ok_or(CatalogError::EmptyRoomSize)?;

        for (room_type, templates) in &rooms {
            for (index, data) in templates.iter().enumerate() {
                if let Some(extent) = used_extent(data) {
                    if extent.width > room_size.width || extent.height > room_size.height {
                        return Err(CatalogError::TemplateTooLarge {
                            room_type: *room_type,
                            index,
                            width: extent.width,
                            height: extent.height,
                            room_width: room_size.width,
                            room_height: room_size.height,
                        });
                    }
                }
            }
        }

        debug!(
            "Room catalog ready: {} templates, room size {}x{}",
            rooms.values().map(Vec::len).sum::<usize>(),
            room_size.width,
            room_size.height
        );

        Ok(PrefabCatalog {
            rooms,
            room_size,
            cell_size: source.cell_size,
        })
    }

    /// Number of templates available for a type.
    pub fn variants(&self, room_type: RoomType) -> usize {
        self.rooms.get(&room_type).map_or(0, Vec::len)
    }
}

impl RoomCatalog for PrefabCatalog {
    fn room_data(
        &self,
        room_type: RoomType,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<RoomData>, CatalogError> {
        let templates = self
            .rooms
            .get(&room_type)
            .filter(|t| !t.is_empty())
            .ok_or(CatalogError::NoRooms(room_type))?;
        let index = rng.random_range(0..templates.len());
        Ok(templates[index].clone())
    }

    fn room_size(&self) -> Size2D {
        self.room_size
    }

    fn cell_size(&self) -> Vector2D {
        self.cell_size
    }
}

fn parse_template(rows: &[String], legend: &BTreeMap<char, TileId>) -> Vec<RoomData> {
    let mut data = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if let Some(tile) = legend.get(&ch) {
                data.push(RoomData::new(MapPos::new(x as i32, y as i32), *tile));
            }
        }
    }
    data
}

/// Size of the rectangle spanned by the used cells, measured from the origin.
fn used_extent(data: &[RoomData]) -> Option<Size2D> {
    let max_x = data.iter().map(|d| d.offset.x).max()?;
    let max_y = data.iter().map(|d| d.offset.y).max()?;
    Some(Size2D::new(max_x + 1, max_y + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tiny_catalog_json(side_rows: &str) -> String {
        format!(
            r##"{{
                "cell_size": {{ "x": 8.0, "y": 8.0 }},
                "legend": {{ "#": 0, ".": 1 }},
                "rooms": {{
                    "side": [{side}],
                    "lr":   [["...", "..."]],
                    "lrb":  [["#.#", "..."], ["...", "#.#"]],
                    "lrt":  [["#.#"]],
                    "lrtb": [[" . ", "..."]]
                }}
            }}"##,
            side = side_rows
        )
    }

    #[test]
    fn test_builtin_catalog_has_every_type() {
        let catalog = PrefabCatalog::builtin().unwrap();
        for room_type in RoomType::ALL {
            assert!(catalog.variants(room_type) >= 2, "{:?}", room_type);
        }
        assert_eq!(catalog.room_size(), Size2D::new(10, 8));
        assert_eq!(catalog.cell_size(), Vector2D::new(16.0, 16.0));
    }

    #[test]
    fn test_builtin_rooms_fill_footprint() {
        let catalog = PrefabCatalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for room_type in RoomType::ALL {
            let data = catalog.room_data(room_type, &mut rng).unwrap();
            assert_eq!(data.len(), catalog.room_size().area());
        }
    }

    #[test]
    fn test_json_catalog_parses() {
        let catalog = PrefabCatalog::from_json(&tiny_catalog_json("[\"###\", \"#.#\"]")).unwrap();
        assert_eq!(catalog.room_size(), Size2D::new(3, 2));
        assert_eq!(catalog.variants(RoomType::Lrb), 2);

        let mut rng = StdRng::seed_from_u64(3);
        let side = catalog.room_data(RoomType::Side, &mut rng).unwrap();
        assert_eq!(side.len(), 6);
        assert!(side.contains(&RoomData::new(MapPos::new(1, 1), 1)));
    }

    #[test]
    fn test_unlisted_characters_are_empty_cells() {
        let catalog = PrefabCatalog::from_json(&tiny_catalog_json("[\"###\", \"#.#\"]")).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let lrtb = catalog.room_data(RoomType::Lrtb, &mut rng).unwrap();
        assert_eq!(lrtb.len(), 4);
        assert!(!lrtb.iter().any(|d| d.offset == MapPos::new(0, 0)));
    }

    #[test]
    fn test_missing_room_type_is_rejected() {
        let json = r##"{
            "cell_size": { "x": 8.0, "y": 8.0 },
            "legend": { "#": 0 },
            "rooms": { "side": [["#"]] }
        }"##;
        match PrefabCatalog::from_json(json) {
            Err(CatalogError::NoRooms(RoomType::Lr)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_oversized_template_is_rejected() {
        let json = tiny_catalog_json("[\"##\", \"##\"]");
        assert!(matches!(
            PrefabCatalog::from_json(&json),
            Err(CatalogError::TemplateTooLarge { .. })
        ));
    }

    #[test]
    fn test_blank_side_room_is_rejected() {
        let json = tiny_catalog_json("[\"   \"]");
        assert!(matches!(
            PrefabCatalog::from_json(&json),
            Err(CatalogError::EmptyRoomSize)
        ));
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            PrefabCatalog::from_json("{ not json"),
            Err(CatalogError::Json(_))
        ));
    }
}
