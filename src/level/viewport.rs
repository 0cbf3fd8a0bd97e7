// src/level/viewport.rs

use crate::error::ConfigError;
use crate::grid::{Size2D, Vector2D};
use crate::rooms::RoomCatalog;

/// Level size in world units: cell size times room size times grid size.
pub fn grid_to_world(grid: Size2D, room_size: Size2D, cell_size: Vector2D) -> Vector2D {
    cell_size.scale(room_size * grid)
}

/// Camera placement that shows the whole level in a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub world_size: Vector2D,
    /// Camera centre, in world units.
    pub position: Vector2D,
    /// Uniform zoom factor, applied to both axes.
    pub zoom: f32,
}

impl Viewport {
    pub fn fit<C: RoomCatalog + ?Sized>(
        grid: Size2D,
        catalog: &C,
        window: Vector2D,
    ) -> Result<Self, ConfigError> {
        if window.x <= 0.0 || window.y <= 0.0 {
            return Err(ConfigError::EmptyWindow {
                width: window.x,
                height: window.y,
            });
        }
        let world_size = grid_to_world(grid, catalog.room_size(), catalog.cell_size());
        let ratio = Vector2D::new(world_size.x / window.x, world_size.y / window.y);
        Ok(Viewport {
            world_size,
            position: Vector2D::new(world_size.x / 2.0, world_size.y / 2.0),
            zoom: ratio.max_component() + 1.0,
        })
    }
}
