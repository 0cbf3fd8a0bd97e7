// src/level/composer.rs

use log::debug;
use rand::Rng;

use crate::error::LayoutError;
use crate::grid::{GridPos, MapPos, Size2D};
use crate::rooms::RoomType;
use crate::walker::Walk;

/// Put a room of `room_type` at grid cell `pos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementInstruction {
    pub pos: GridPos,
    pub room_type: RoomType,
}

impl PlacementInstruction {
    pub fn new(pos: GridPos, room_type: RoomType) -> Self {
        Self { pos, room_type }
    }
}

/// Map offset of a grid cell: the room footprint times the grid position.
pub fn grid_to_map(room_size: Size2D, pos: GridPos) -> MapPos {
    room_size * pos
}

/// Turns a finished walk into placement work: path rooms, filler rooms for
/// every cell the walk skipped, and the wall frame.
#[derive(Debug, Clone)]
pub struct LevelComposer {
    walk: Walk,
    room_size: Size2D,
}

impl LevelComposer {
    pub fn new(walk: Walk, room_size: Size2D) -> Self {
        LevelComposer { walk, room_size }
    }

    pub fn walk(&self) -> &Walk {
        &self.walk
    }

    pub fn room_size(&self) -> Size2D {
        self.room_size
    }

    pub fn grid_to_map(&self, pos: GridPos) -> MapPos {
        grid_to_map(self.room_size, pos)
    }

    /// Path rooms in visiting order.
    pub fn path_placements(&self) -> Vec<PlacementInstruction> {
        self.walk
            .path()
            .iter()
            .map(|entry| PlacementInstruction::new(entry.pos, entry.room_type))
            .collect()
    }

    /// One random room for every unvisited cell, row by row. Fails if an
    /// unvisited cell is also on the path.
    pub fn side_placements<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<PlacementInstruction>, LayoutError> {
        let path_cells = self.walk.path_cells();
        let mut cells: Vec<GridPos> = self.walk.unvisited().iter().copied().collect();
        cells.sort_by_key(|pos| (pos.y, pos.x));

        let mut placements = Vec::with_capacity(cells.len());
        for pos in cells {
            if path_cells.contains(&pos) {
                return Err(LayoutError::SideRoomOnPath(pos));
            }
            placements.push(PlacementInstruction::new(pos, RoomType::random(rng)));
        }
        debug!("Composed {} side rooms", placements.len());
        Ok(placements)
    }

    /// Map cells covered by the wall frame. The frame is painted as two
    /// overlapping fills: columns `[-1, w)` by rows `[-1, h]`, then rows
    /// `[-1, h)` by columns `[0, w]`, where `w` and `h` are the level size in
    /// map cells. Cells covered by both passes appear twice.
    pub fn wall_cells(&self) -> Vec<MapPos> {
        wall_cells(self.walk.grid(), self.room_size)
    }
}

pub fn wall_cells(grid: Size2D, room_size: Size2D) -> Vec<MapPos> {
    let map = room_size * grid;
    let mut cells = Vec::new();
    for x in -1..map.width {
        for y in -1..=map.height {
            cells.push(MapPos::new(x, y));
        }
    }
    for x in 0..=map.width {
        for y in -1..map.height {
            cells.push(MapPos::new(x, y));
        }
    }
    cells
}
