//! Randomized maze carving with breadth-first move-sequence solving
//!
//! The system carves mazes on a wall grid using a randomized depth-first
//! backtracker, then searches for a shortest solution with a breadth-first
//! expansion of move sequences, pruning immediate move reversals and
//! rejecting wall collisions.

#![forbid(unsafe_code)]

/// Core algorithms: maze carving, the move alphabet, and breadth-first search
pub mod algorithm;
/// Input/output operations, error handling, and progress reporting
pub mod io;
/// Maze board storage, positions, and text rendering
pub mod spatial;

pub use io::error::{MazeError, Result};
