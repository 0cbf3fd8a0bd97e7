// src/level/scheduler.rs

use std::collections::VecDeque;

use log::{debug, info, warn};
use rand::RngCore;

use crate::error::LayoutError;
use crate::grid::Size2D;
use crate::level::composer::{LevelComposer, PlacementInstruction};
use crate::level::renderer::{LevelRenderer, TileSink};
use crate::rooms::{RoomCatalog, TileId};
use crate::walker::{PathWalker, Walk};

/// Where a generation run is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Walking,
    PlacingPath,
    PlacingSide,
    Done,
    /// Side-room placement failed; only `start` is accepted.
    Failed,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Walking => "walking",
            Phase::PlacingPath => "placing path rooms",
            Phase::PlacingSide => "placing side rooms",
            Phase::Done => "done",
            Phase::Failed => "failed",
        }
    }
}

/// Inputs that move the scheduler along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerEvent {
    /// The pacing timer fired; place the next path room.
    Tick,
    /// Every path room is placed; side rooms may go in.
    PathComplete,
}

impl SchedulerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SchedulerEvent::Tick => "tick",
            SchedulerEvent::PathComplete => "path-complete",
        }
    }
}

/// Drives one level from an empty tile map to a finished layout.
///
/// `start` walks the grid and paints the wall frame. Each `Tick` then places
/// one path room; the tick that places the last one returns `PathComplete`,
/// which the caller feeds back to place every side room in one go. Side rooms
/// are never placed before that.
///
/// A path room whose stamp fails stays queued, so the next `Tick` retries it.
/// A failure while placing side rooms leaves the scheduler `Failed` until the
/// next `start`.
pub struct LevelScheduler<C, S, R> {
    phase: Phase,
    walker: PathWalker,
    renderer: LevelRenderer<C, S>,
    rng: R,
    wall_tile: TileId,
    composer: Option<LevelComposer>,
    pending_path: VecDeque<PlacementInstruction>,
    path_placed: usize,
    side_placed: usize,
}

impl<C: RoomCatalog, S: TileSink, R: RngCore> LevelScheduler<C, S, R> {
    pub fn new(grid: Size2D, renderer: LevelRenderer<C, S>, rng: R, wall_tile: TileId) -> Self {
        LevelScheduler {
            phase: Phase::Idle,
            walker: PathWalker::new(grid),
            renderer,
            rng,
            wall_tile,
            composer: None,
            pending_path: VecDeque::new(),
            path_placed: 0,
            side_placed: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The walk of the current run, once `start` has happened.
    pub fn walk(&self) -> Option<&Walk> {
        self.composer.as_ref().map(LevelComposer::walk)
    }

    pub fn renderer(&self) -> &LevelRenderer<C, S> {
        &self.renderer
    }

    pub fn into_renderer(self) -> LevelRenderer<C, S> {
        self.renderer
    }

    pub fn path_placed(&self) -> usize {
        self.path_placed
    }

    pub fn side_placed(&self) -> usize {
        self.side_placed
    }

    /// Walks the grid, paints the walls and queues the path rooms. Allowed
    /// from `Idle`, `Done` and `Failed`; a previous run is thrown away.
    pub fn start(&mut self) -> Result<(), LayoutError> {
        if !matches!(self.phase, Phase::Idle | Phase::Done | Phase::Failed) {
            return Err(self.out_of_order("start"));
        }

        self.phase = Phase::Walking;
        self.path_placed = 0;
        self.side_placed = 0;

        let walk = self.walker.walk(&mut self.rng);
        let composer = LevelComposer::new(walk, self.renderer.catalog().room_size());

        let walls = composer.wall_cells();
        for cell in &walls {
            self.renderer.fill_cell(cell.x, cell.y, self.wall_tile);
        }
        debug!("Painted {} wall cells", walls.len());

        self.pending_path = composer.path_placements().into();
        info!("Queued {} path rooms", self.pending_path.len());
        self.composer = Some(composer);
        self.phase = Phase::PlacingPath;
        Ok(())
    }

    /// Applies one event. Returns the follow-up event the caller must feed
    /// back, if any.
    pub fn handle(
        &mut self,
        event: SchedulerEvent,
    ) -> Result<Option<SchedulerEvent>, LayoutError> {
        match (self.phase, event) {
            (Phase::PlacingPath, SchedulerEvent::Tick) => self.place_next_path_room(),
            (Phase::PlacingPath, SchedulerEvent::PathComplete) => {
                if !self.pending_path.is_empty() {
                    return Err(self.out_of_order(event.name()));
                }
                if let Err(e) = self.place_side_rooms() {
                    warn!("Side-room placement failed: {}", e);
                    self.phase = Phase::Failed;
                    return Err(e);
                }
                Ok(None)
            }
            (Phase::PlacingSide | Phase::Done, SchedulerEvent::Tick) => {
                warn!("Ignoring tick while {}", self.phase.name());
                Ok(None)
            }
            _ => Err(self.out_of_order(event.name())),
        }
    }

    /// Runs the whole level without pacing. Starts a new run unless one is
    /// already placing path rooms.
    pub fn run_to_completion(&mut self) -> Result<(), LayoutError> {
        if self.phase != Phase::PlacingPath {
            self.start()?;
        }
        loop {
            match self.phase {
                Phase::PlacingPath => {
                    if let Some(follow_up) = self.handle(SchedulerEvent::Tick)? {
                        self.handle(follow_up)?;
                    }
                }
                Phase::Done => return Ok(()),
                _ => return Err(self.out_of_order(SchedulerEvent::Tick.name())),
            }
        }
    }

    fn place_next_path_room(&mut self) -> Result<Option<SchedulerEvent>, LayoutError> {
        if let Some(placement) = self.pending_path.front().copied() {
            let offset = self.composer()?.grid_to_map(placement.pos);
            self.renderer.stamp_room(offset, placement.room_type, &mut self.rng)?;
            self.pending_path.pop_front();
            self.path_placed += 1;
        }
        if self.pending_path.is_empty() {
            info!("All {} path rooms placed", self.path_placed);
            Ok(Some(SchedulerEvent::PathComplete))
        } else {
            Ok(None)
        }
    }

    fn place_side_rooms(&mut self) -> Result<(), LayoutError> {
        self.phase = Phase::PlacingSide;
        let composer = self.composer.as_ref().ok_or(LayoutError::OutOfOrder {
            event: SchedulerEvent::PathComplete.name(),
            state: Phase::PlacingSide.name(),
        })?;
        let placements = composer.side_placements(&mut self.rng)?;
        for placement in &placements {
            let offset = composer.grid_to_map(placement.pos);
            self.renderer.stamp_room(offset, placement.room_type, &mut self.rng)?;
            self.side_placed += 1;
        }
        info!("Placed {} side rooms", self.side_placed);
        self.phase = Phase::Done;
        Ok(())
    }

    fn composer(&self) -> Result<&LevelComposer, LayoutError> {
        self.composer
            .as_ref()
            .ok_or_else(|| self.out_of_order(SchedulerEvent::Tick.name()))
    }

    fn out_of_order(&self, event: &'static str) -> LayoutError {
        LayoutError::OutOfOrder {
            event,
            state: self.phase.name(),
        }
    }
}
