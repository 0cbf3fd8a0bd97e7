//! # room_walker
//!
//! Command line driver: reads a config, generates one level and prints it as
//! text. Set `RUST_LOG=debug` to follow the walk step by step.
//!
//! ## License
//! Licensed under the MIT License.

use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use room_walker::grid::Vector2D;
use room_walker::level::{LevelRenderer, Viewport};
use room_walker::rooms::prefabs::{TILE_AIR, TILE_BRICK, TILE_LADDER};
use room_walker::{
    GenError, GeneratorConfig, LevelScheduler, PrefabCatalog, SchedulerEvent, TileMap,
};

/// Generate a random-walk room layout
#[derive(Parser, Debug)]
#[command(name = "room_walker")]
#[command(author, version, about = "Generate a random-walk room layout", long_about = None)]
struct Args {
    /// JSON config file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Grid width, in rooms
    #[arg(short = 'W', long = "width")]
    width: Option<i32>,

    /// Grid height, in rooms
    #[arg(short = 'H', long = "height")]
    height: Option<i32>,

    /// Random seed
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Delay between path-room placements, in milliseconds
    #[arg(short = 't', long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Room catalog JSON
    #[arg(long = "catalog")]
    catalog: Option<PathBuf>,

    /// Window width used to report the camera fit
    #[arg(long = "window-width", default_value_t = 1024.0)]
    window_width: f32,

    /// Window height used to report the camera fit
    #[arg(long = "window-height", default_value_t = 600.0)]
    window_height: f32,
}

impl Args {
    fn into_config(self) -> Result<(GeneratorConfig, Vector2D), GenError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_path(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if self.catalog.is_some() {
            config.catalog = self.catalog;
        }
        config.validate()?;
        let window = Vector2D::new(self.window_width, self.window_height);
        Ok((config, window))
    }
}

fn run(args: Args) -> Result<(), GenError> {
    let (config, window) = args.into_config()?;

    let catalog = match &config.catalog {
        Some(path) => PrefabCatalog::from_path(path)?,
        None => PrefabCatalog::builtin()?,
    };

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "Generating a {}x{} level with seed {}",
        config.grid_width, config.grid_height, seed
    );

    let viewport = Viewport::fit(config.grid(), &catalog, window)?;
    info!(
        "Camera at ({}, {}) with zoom {:.2}",
        viewport.position.x, viewport.position.y, viewport.zoom
    );

    let renderer = LevelRenderer::new(catalog, TileMap::new());
    let rng = StdRng::seed_from_u64(seed);
    let mut scheduler = LevelScheduler::new(config.grid(), renderer, rng, config.wall_tile);

    scheduler.start()?;
    let tick = Duration::from_millis(config.tick_ms);
    loop {
        if !tick.is_zero() {
            thread::sleep(tick);
        }
        if let Some(SchedulerEvent::PathComplete) = scheduler.handle(SchedulerEvent::Tick)? {
            scheduler.handle(SchedulerEvent::PathComplete)?;
            break;
        }
    }

    if let Some(walk) = scheduler.walk() {
        info!(
            "Path of {} rooms, {} side rooms",
            walk.path().len(),
            scheduler.side_placed()
        );
        for entry in walk.path() {
            println!("({}, {}) {}", entry.pos.x, entry.pos.y, entry.room_type.name());
        }
    }

    let mut glyphs = BTreeMap::new();
    glyphs.insert(config.wall_tile, '@');
    glyphs.insert(TILE_BRICK, '#');
    glyphs.insert(TILE_AIR, '.');
    glyphs.insert(TILE_LADDER, 'H');
    print!("{}", scheduler.renderer().sink().to_ascii(&glyphs));
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("room_walker starting...");

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("Generation failed: {}", e);
        return Err(Box::new(e));
    }

    info!("room_walker exiting.");
    Ok(())
}
