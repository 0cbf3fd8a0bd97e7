// src/level/mod.rs
pub mod composer;
pub mod renderer;
pub mod scheduler;
pub mod viewport;

pub use composer::{grid_to_map, wall_cells, LevelComposer, PlacementInstruction};
pub use renderer::{LevelRenderer, TileMap, TileSink};
pub use scheduler::{LevelScheduler, Phase, SchedulerEvent};
pub use viewport::{grid_to_world, Viewport};
