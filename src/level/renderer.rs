// src/level/renderer.rs

use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};
use rand::RngCore;

use crate::error::CatalogError;
use crate::grid::MapPos;
use crate::rooms::{RoomCatalog, RoomType, TileId};

/// Anything tiles can be written into.
pub trait TileSink {
    fn set_cell(&mut self, pos: MapPos, tile: TileId);
}

/// Sparse tile map. Cells never written are empty.
#[derive(Debug, Clone, Default)]
pub struct TileMap {
    cells: HashMap<MapPos, TileId>,
}

impl TileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: MapPos) -> Option<TileId> {
        self.cells.get(&pos).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Inclusive corners of the used area, if any cell is set.
    pub fn bounds(&self) -> Option<(MapPos, MapPos)> {
        let min_x = self.cells.keys().map(|p| p.x).min()?;
        let min_y = self.cells.keys().map(|p| p.y).min()?;
        let max_x = self.cells.keys().map(|p| p.x).max()?;
        let max_y = self.cells.keys().map(|p| p.y).max()?;
        Some((MapPos::new(min_x, min_y), MapPos::new(max_x, max_y)))
    }

    /// Text dump of the used area. Tiles missing from `glyphs` print as `?`,
    /// empty cells as a space.
    pub fn to_ascii(&self, glyphs: &BTreeMap<TileId, char>) -> String {
        let Some((min, max)) = self.bounds() else {
            return String::new();
        };
        let mut out = String::new();
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                let ch = match self.get(MapPos::new(x, y)) {
                    Some(tile) => glyphs.get(&tile).copied().unwrap_or('?'),
                    None => ' ',
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl TileSink for TileMap {
    fn set_cell(&mut self, pos: MapPos, tile: TileId) {
        trace!("Set {:?} to tile {}", pos, tile);
        self.cells.insert(pos, tile);
    }
}

/// Copies catalog rooms into a tile sink.
pub struct LevelRenderer<C, S> {
    catalog: C,
    sink: S,
}

impl<C: RoomCatalog, S: TileSink> LevelRenderer<C, S> {
    pub fn new(catalog: C, sink: S) -> Self {
        LevelRenderer { catalog, sink }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Writes one random room of `room_type` with its top-left corner at
    /// `map_offset`. Returns the number of tiles written.
    pub fn stamp_room(
        &mut self,
        map_offset: MapPos,
        room_type: RoomType,
        rng: &mut dyn RngCore,
    ) -> Result<usize, CatalogError> {
        let data = self.catalog.room_data(room_type, rng)?;
        for tile in &data {
            self.sink.set_cell(map_offset + tile.offset, tile.tile);
        }
        debug!("Stamped {:?} room at {:?} ({} tiles)", room_type, map_offset, data.len());
        Ok(data.len())
    }

    pub fn fill_cell(&mut self, x: i32, y: i32, tile: TileId) {
        self.sink.set_cell(MapPos::new(x, y), tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Size2D, Vector2D};
    use crate::rooms::{PrefabCatalog, RoomData};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Catalog with one fixed room per type, and no tiles at all for Side.
    struct FixedCatalog;

    impl RoomCatalog for FixedCatalog {
        fn room_data(
            &self,
            room_type: RoomType,
            _rng: &mut dyn RngCore,
        ) -> Result<Vec<RoomData>, CatalogError> {
            match room_type {
                RoomType::Side => Ok(Vec::new()),
                RoomType::Lrtb => Err(CatalogError::NoRooms(RoomType::Lrtb)),
                other => Ok(vec![
                    RoomData::new(MapPos::new(0, 0), other.index() as TileId),
                    RoomData::new(MapPos::new(1, 1), 9),
                ]),
            }
        }

        fn room_size(&self) -> Size2D {
            Size2D::new(2, 2)
        }

        fn cell_size(&self) -> Vector2D {
            Vector2D::new(1.0, 1.0)
        }
    }

    #[test]
    fn test_stamp_writes_at_offset() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut renderer = LevelRenderer::new(FixedCatalog, TileMap::new());
        let written = renderer.stamp_room(MapPos::new(4, 6), RoomType::Lrb, &mut rng).unwrap();
        assert_eq!(written, 2);
        assert_eq!(renderer.sink().get(MapPos::new(4, 6)), Some(2));
        assert_eq!(renderer.sink().get(MapPos::new(5, 7)), Some(9));
        assert_eq!(renderer.sink().len(), 2);
    }

    #[test]
    fn test_empty_room_writes_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut renderer = LevelRenderer::new(FixedCatalog, TileMap::new());
        let written = renderer.stamp_room(MapPos::new(0, 0), RoomType::Side, &mut rng).unwrap();
        assert_eq!(written, 0);
        assert!(renderer.sink().is_empty());
    }

    #[test]
    fn test_catalog_miss_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut renderer = LevelRenderer::new(FixedCatalog, TileMap::new());
        assert!(renderer.stamp_room(MapPos::new(0, 0), RoomType::Lrtb, &mut rng).is_err());
    }

    #[test]
    fn test_stamp_overwrites_walls() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut renderer = LevelRenderer::new(PrefabCatalog::builtin().unwrap(), TileMap::new());
        renderer.fill_cell(3, 3, 0);
        renderer.stamp_room(MapPos::new(0, 0), RoomType::Side, &mut rng).unwrap();
        assert_ne!(renderer.sink().get(MapPos::new(3, 3)), Some(0));
    }

    #[test]
    fn test_ascii_dump() {
        let mut map = TileMap::new();
        map.set_cell(MapPos::new(-1, 0), 0);
        map.set_cell(MapPos::new(1, 1), 1);
        let mut glyphs = BTreeMap::new();
        glyphs.insert(0, '#');
        assert_eq!(map.to_ascii(&glyphs), "#  \n  ?\n");
        assert_eq!(TileMap::new().to_ascii(&glyphs), "");
    }
}
