// src/error.rs
//! Error types for configuration, room catalogs and level layout.

use std::path::PathBuf;

use thiserror::Error;

use crate::grid::GridPos;
use crate::rooms::RoomType;

/// Problems with the run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: i32, height: i32 },

    #[error("window must be at least 1x1, got {width}x{height}")]
    EmptyWindow { width: f32, height: f32 },
}

/// Problems building or querying a room catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("could not read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no rooms of type {0:?}")]
    NoRooms(RoomType),

    #[error("catalog room size is empty; the first Side template has no used cells")]
    EmptyRoomSize,

    #[error(
        "{room_type:?} template #{index} is {width}x{height}, \
         larger than the {room_width}x{room_height} room size"
    )]
    TemplateTooLarge {
        room_type: RoomType,
        index: usize,
        width: i32,
        height: i32,
        room_width: i32,
        room_height: i32,
    },
}

/// Logic errors while composing or placing a level.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("side room at {0:?} would overwrite a path room")]
    SideRoomOnPath(GridPos),

    #[error("event {event} is not valid while {state}")]
    OutOfOrder {
        event: &'static str,
        state: &'static str,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Top-level error for a generation run.
#[derive(Error, Debug)]
pub enum GenError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
