//! Spatial data structures for maze boards
//!
//! This module contains board-related functionality including:
//! - Cell classification and character round-tripping
//! - Signed positions for bounds-checked movement
//! - Board storage, parsing, and text rendering

/// Board storage, cell access, parsing, and rendering
pub mod grid;

pub use grid::{Cell, Maze, Position};
