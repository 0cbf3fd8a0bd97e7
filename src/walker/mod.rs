// src/walker/mod.rs
mod path_walker;
mod state;

pub use path_walker::{horizontal_chance, PathWalker, Walk, STEP};
pub use state::{PathEntry, WalkState};
