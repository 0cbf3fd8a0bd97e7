// src/lib.rs
//! # room_walker
//!
//! Generates a grid of prefab rooms with a guaranteed route from the top row
//! to the bottom row. A biased random walker lays the route, every cell it
//! visits gets a room whose openings fit the walk, the remaining cells get
//! filler rooms, and everything is stamped into a tile map inside a wall frame.

pub mod config;
pub mod error;
pub mod grid;
pub mod level;
pub mod rooms;
pub mod walker;

pub use config::GeneratorConfig;
pub use error::{CatalogError, ConfigError, GenError, LayoutError};
pub use level::{LevelScheduler, SchedulerEvent, TileMap};
pub use rooms::{PrefabCatalog, RoomCatalog, RoomType};
pub use walker::{PathWalker, Walk};
