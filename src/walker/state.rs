// src/walker/state.rs

use std::collections::HashSet;

use rand::Rng;

use crate::grid::{Delta, GridPos, Size2D};
use crate::rooms::RoomType;

/// A visited cell and the room chosen for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEntry {
    pub pos: GridPos,
    pub room_type: RoomType,
}

impl PathEntry {
    pub fn new(pos: GridPos, room_type: RoomType) -> Self {
        Self { pos, room_type }
    }
}

/// Progress of one walk. Only `PathWalker` mutates it.
#[derive(Debug, Clone, Default)]
pub struct WalkState {
    /// The walker's current cell.
    pub(crate) offset: GridPos,
    /// The move that led to `offset`.
    pub(crate) delta: Delta,
    /// Slot of the direction table to try next; `None` means roll a new one.
    pub(crate) pending_index: Option<usize>,
    /// Consecutive Down moves, including the last one.
    pub(crate) down_counter: u32,
    pub(crate) path: Vec<PathEntry>,
    /// Cells the path has not touched yet.
    pub(crate) unvisited: HashSet<GridPos>,
}

impl WalkState {
    /// A fresh state where every cell of `grid` is unvisited.
    pub fn reset(grid: Size2D) -> Self {
        WalkState {
            offset: GridPos::default(),
            delta: Delta::ZERO,
            pending_index: None,
            down_counter: 0,
            path: Vec::with_capacity(grid.area()),
            unvisited: grid.cells().collect(),
        }
    }

    /// Puts the walker on a random cell of the top row. `width` must be positive.
    pub fn pick_start<R: Rng + ?Sized>(&mut self, width: i32, rng: &mut R) {
        let x = rng.random_range(0..width);
        self.offset = GridPos::new(x, 0);
    }

    pub fn offset(&self) -> GridPos {
        self.offset
    }

    pub fn delta(&self) -> Delta {
        self.delta
    }

    pub fn down_counter(&self) -> u32 {
        self.down_counter
    }

    pub fn path(&self) -> &[PathEntry] {
        &self.path
    }

    pub fn unvisited(&self) -> &HashSet<GridPos> {
        &self.unvisited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reset_marks_every_cell_unvisited() {
        let state = WalkState::reset(Size2D::new(4, 3));
        assert_eq!(state.unvisited().len(), 12);
        assert!(state.path().is_empty());
        assert_eq!(state.down_counter(), 0);
        assert_eq!(state.pending_index, None);
        assert_eq!(state.delta(), Delta::ZERO);
    }

    #[test]
    fn test_pick_start_is_on_top_row() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut state = WalkState::reset(Size2D::new(5, 5));
        for _ in 0..100 {
            state.pick_start(5, &mut rng);
            assert_eq!(state.offset().y, 0);
            assert!((0..5).contains(&state.offset().x));
        }
    }
}
