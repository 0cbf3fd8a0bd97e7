// src/config.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::Size2D;
use crate::rooms::TileId;

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid width, in rooms.
    pub grid_width: i32,
    /// Grid height, in rooms.
    pub grid_height: i32,
    /// Fixed seed; a random one is used when absent.
    pub seed: Option<u64>,
    /// Tile painted on the outer wall frame.
    pub wall_tile: TileId,
    /// Delay between path-room placements, in milliseconds.
    pub tick_ms: u64,
    /// Room catalog JSON; the built-in rooms are used when absent.
    pub catalog: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            grid_width: 8,
            grid_height: 6,
            seed: None,
            wall_tile: 0,
            tick_ms: 0,
            catalog: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn grid(&self) -> Size2D {
        Size2D::new(self.grid_width, self.grid_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid().is_empty() {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        Ok(())
    }
}
