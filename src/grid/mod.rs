// src/grid/mod.rs
pub mod geometry;

pub use geometry::{Delta, GridPos, MapPos, Size2D, Vector2D};
