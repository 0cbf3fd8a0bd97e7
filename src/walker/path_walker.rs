// src/walker/path_walker.rs

use std::collections::HashSet;

use log::{debug, info, warn};
use rand::Rng;

use crate::grid::{Delta, GridPos, Size2D};
use crate::rooms::RoomType;
use crate::walker::state::{PathEntry, WalkState};

/// Direction table. Left and right appear twice, so a uniform pick favours
/// horizontal moves four to one.
pub const STEP: [Delta; 5] = [Delta::LEFT, Delta::LEFT, Delta::RIGHT, Delta::RIGHT, Delta::DOWN];

const SLOT_LEFT: usize = 0;
const SLOT_RIGHT: usize = 2;
const SLOT_DOWN: usize = 4;

// Promotion draws its index over BOTTOM_OPENED and uses it on BOTTOM_CLOSED.
const _: () = assert!(RoomType::BOTTOM_OPENED.len() == RoomType::BOTTOM_CLOSED.len());

/// Probability of honouring a horizontal pick: the share of non-Down slots in `STEP`.
pub fn horizontal_chance() -> f64 {
    let downs = STEP.iter().filter(|d| d.is_down()).count();
    1.0 - downs as f64 / STEP.len() as f64
}

/// The finished result of a walk. Read-only.
#[derive(Debug, Clone)]
pub struct Walk {
    grid: Size2D,
    path: Vec<PathEntry>,
    unvisited: HashSet<GridPos>,
    steps: usize,
}

impl Walk {
    /// Builds a walk by hand, for checking how consumers handle odd layouts.
    #[cfg(test)]
    pub(crate) fn from_parts(
        grid: Size2D,
        path: Vec<PathEntry>,
        unvisited: HashSet<GridPos>,
    ) -> Self {
        let steps = path.len();
        Walk {
            grid,
            path,
            unvisited,
            steps,
        }
    }

    pub fn grid(&self) -> Size2D {
        self.grid
    }

    /// Visited cells in visiting order.
    pub fn path(&self) -> &[PathEntry] {
        &self.path
    }

    pub fn unvisited(&self) -> &HashSet<GridPos> {
        &self.unvisited
    }

    pub fn path_cells(&self) -> HashSet<GridPos> {
        self.path.iter().map(|entry| entry.pos).collect()
    }

    /// Number of loop iterations the walk took. Equals the path length.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Random walker that threads a connected path from the top row to the
/// bottom of the grid.
///
/// Every iteration assigns a room to the current cell, then moves. Left and
/// right runs continue until a coin flip or a grid edge turns them into a
/// Down move; after a Down move any direction may follow. Only Down moves
/// increase `y`, so the walk always ends.
pub struct PathWalker {
    grid: Size2D,
    horizontal_chance: f64,
    state: WalkState,
}

impl PathWalker {
    pub fn new(grid: Size2D) -> Self {
        PathWalker {
            grid,
            horizontal_chance: horizontal_chance(),
            state: WalkState::reset(grid),
        }
    }

    pub fn grid(&self) -> Size2D {
        self.grid
    }

    pub fn horizontal_chance(&self) -> f64 {
        self.horizontal_chance
    }

    /// Runs a complete walk and hands back its result. The internal state is
    /// reset at the start of every call.
    pub fn walk<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Walk {
        self.state = WalkState::reset(self.grid);

        if self.grid.is_empty() {
            warn!(
                "Grid {}x{} has no cells; the path is empty",
                self.grid.width, self.grid.height
            );
            return self.finish(0);
        }

        self.state.pick_start(self.grid.width, rng);
        info!(
            "Walking a {}x{} grid from {:?}",
            self.grid.width, self.grid.height, self.state.offset
        );

        let mut steps = 0;
        while self.state.offset.y < self.grid.height {
            self.update_room_type(rng);
            self.update_next_position(rng);
            self.update_down_counter();
            steps += 1;
        }

        info!("Walk finished after {} steps", steps);
        self.finish(steps)
    }

    fn finish(&mut self, steps: usize) -> Walk {
        let state = std::mem::take(&mut self.state);
        Walk {
            grid: self.grid,
            path: state.path,
            unvisited: state.unvisited,
            steps,
        }
    }

    /// Records the current cell. When the walker has just dropped out of a
    /// room with a closed bottom, that room is retyped first.
    pub(crate) fn update_room_type<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let moved_down = self.state.delta.is_down();
        let down_counter = self.state.down_counter;

        if let Some(last) = self.state.path.last_mut() {
            if moved_down && last.room_type.is_bottom_closed() {
                let index = rng.random_range(0..RoomType::BOTTOM_OPENED.len());
                let promoted = if down_counter < 2 {
                    RoomType::BOTTOM_CLOSED[index]
                } else {
                    RoomType::Lrtb
                };
                debug!("Retyping {:?} from {:?} to {:?}", last.pos, last.room_type, promoted);
                last.room_type = promoted;
            }
        }

        let rolled = RoomType::random(rng);
        let room_type = if moved_down { RoomType::Lrt } else { rolled };

        self.state.unvisited.remove(&self.state.offset);
        self.state.path.push(PathEntry::new(self.state.offset, room_type));
    }

    /// Picks the next direction and commits the move.
    pub(crate) fn update_next_position<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let index = match self.state.pending_index {
            Some(index) => index,
            None => rng.random_range(0..STEP.len()),
        };
        let resolved = STEP[index];

        let honoured = rng.random::<f64>() < self.horizontal_chance;
        let x = self.state.offset.x;
        let last_col = self.grid.width - 1;

        let next = if resolved == Delta::LEFT {
            // x > 1, not x > 0: a left run never ends in column 0.
            if x > 1 && honoured {
                SLOT_LEFT
            } else {
                SLOT_DOWN
            }
        } else if resolved == Delta::RIGHT {
            if x < last_col && honoured {
                SLOT_RIGHT
            } else {
                SLOT_DOWN
            }
        } else if x > 0 && x < last_col {
            rng.random_range(0..STEP.len())
        } else if last_col == 0 {
            // One column: both edges at once.
            SLOT_DOWN
        } else if x == 0 {
            if honoured {
                SLOT_RIGHT
            } else {
                SLOT_DOWN
            }
        } else if honoured {
            SLOT_LEFT
        } else {
            SLOT_DOWN
        };

        self.state.pending_index = Some(next);
        self.state.delta = STEP[next];
        self.state.offset = self.state.offset + self.state.delta;
        debug!("Moved {:?} to {:?}", self.state.delta, self.state.offset);
    }

    pub(crate) fn update_down_counter(&mut self) {
        self.state.down_counter = if self.state.delta.is_down() {
            self.state.down_counter + 1
        } else {
            0
        };
    }
}
