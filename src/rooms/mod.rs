// src/rooms/mod.rs
pub mod catalog;
pub mod prefabs;
mod room_type;

pub use catalog::{CatalogSource, PrefabCatalog, RoomCatalog, RoomData, TileId};
pub use room_type::RoomType;
