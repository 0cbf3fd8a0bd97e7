// src/grid/geometry.rs
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A cell of the generation grid. One grid cell holds one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<Delta> for GridPos {
    type Output = GridPos;

    fn add(self, delta: Delta) -> GridPos {
        GridPos::new(self.x + delta.dx, self.y + delta.dy)
    }
}

/// A position in tile-map coordinates. The wall frame lives at negative
/// coordinates, so this is signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct MapPos {
    pub x: i32,
    pub y: i32,
}

impl MapPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for MapPos {
    type Output = MapPos;

    fn add(self, other: MapPos) -> MapPos {
        MapPos::new(self.x + other.x, self.y + other.y)
    }
}

/// One step of the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    pub const ZERO: Delta = Delta { dx: 0, dy: 0 };
    pub const LEFT: Delta = Delta { dx: -1, dy: 0 };
    pub const RIGHT: Delta = Delta { dx: 1, dy: 0 };
    pub const DOWN: Delta = Delta { dx: 0, dy: 1 };

    pub fn is_down(&self) -> bool {
        *self == Delta::DOWN
    }
}

/// Width and height of anything measured in whole cells: the grid, a room
/// footprint, or the tile map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size2D {
    pub width: i32,
    pub height: i32,
}

impl Size2D {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn area(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }

    /// Whether `pos` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Every cell of the rectangle, row by row.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        let width = self.width.max(0);
        (0..self.height.max(0)).flat_map(move |y| (0..width).map(move |x| GridPos::new(x, y)))
    }
}

/// Component-wise scaling; this is how grid coordinates become map coordinates.
impl Mul<GridPos> for Size2D {
    type Output = MapPos;

    fn mul(self, pos: GridPos) -> MapPos {
        MapPos::new(self.width * pos.x, self.height * pos.y)
    }
}

impl Mul for Size2D {
    type Output = Size2D;

    fn mul(self, other: Size2D) -> Size2D {
        Size2D::new(self.width * other.width, self.height * other.height)
    }
}

/// A floating point 2D vector, used only for world units (camera setup).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn scale(&self, size: Size2D) -> Vector2D {
        Vector2D::new(self.x * size.width as f32, self.y * size.height as f32)
    }

    pub fn max_component(&self) -> f32 {
        self.x.max(self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_pos_plus_delta() {
        let pos = GridPos::new(3, 2);
        assert_eq!(pos + Delta::LEFT, GridPos::new(2, 2));
        assert_eq!(pos + Delta::RIGHT, GridPos::new(4, 2));
        assert_eq!(pos + Delta::DOWN, GridPos::new(3, 3));
        assert_eq!(pos + Delta::ZERO, pos);
    }

    #[test]
    fn test_room_size_times_grid_pos() {
        let room = Size2D::new(10, 8);
        assert_eq!(room * GridPos::new(2, 3), MapPos::new(20, 24));
        assert_eq!(room * GridPos::new(0, 0), MapPos::new(0, 0));
    }

    #[test]
    fn test_cells_cover_rectangle_row_major() {
        let size = Size2D::new(3, 2);
        let cells: Vec<GridPos> = size.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], GridPos::new(0, 0));
        assert_eq!(cells[2], GridPos::new(2, 0));
        assert_eq!(cells[3], GridPos::new(0, 1));
        assert!(cells.iter().all(|c| size.contains(*c)));
    }

    #[test]
    fn test_empty_size_has_no_cells() {
        assert_eq!(Size2D::new(0, 5).cells().count(), 0);
        assert_eq!(Size2D::new(5, 0).area(), 0);
        assert!(Size2D::new(-1, 3).is_empty());
    }
}
