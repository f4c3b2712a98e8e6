//! Move alphabet and move sequences
//!
//! Moves are the four cardinal directions written as `R`, `L`, `U` and `D`.
//! A [`MovePath`] is an ordered move sequence; its `Display` output is the
//! plain move string (for example `DDRDD`) used throughout the demos.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{MazeError, Result};
use crate::spatial::grid::{Maze, Position};

/// One move in the four-letter alphabet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `R`: one column rightward
    Right,
    /// `L`: one column leftward
    Left,
    /// `U`: one row upward
    Up,
    /// `D`: one row downward
    Down,
}

impl Direction {
    /// All directions in the solver's fixed expansion order
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Up, Self::Down];

    /// The move that undoes this one
    pub const fn reverse(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Coordinate delta (dx, dy) of one step, with y growing downward
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    /// Move letter used in move strings
    pub const fn to_char(self) -> char {
        match self {
            Self::Right => 'R',
            Self::Left => 'L',
            Self::Up => 'U',
            Self::Down => 'D',
        }
    }

    /// Parse a move letter, `None` for anything outside `RLUD`
    pub const fn from_char(glyph: char) -> Option<Self> {
        match glyph {
            'R' => Some(Self::Right),
            'L' => Some(Self::Left),
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Ordered move sequence
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovePath {
    moves: Vec<Direction>,
}

impl MovePath {
    /// The empty move sequence
    pub const fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether no moves have been taken
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The most recent move, if any
    pub fn last(&self) -> Option<Direction> {
        self.moves.last().copied()
    }

    /// Moves in order
    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    /// Append a move
    pub fn push(&mut self, direction: Direction) {
        self.moves.push(direction);
    }

    /// New sequence extended by one move, leaving this one untouched
    ///
    /// The breadth-first frontier expands paths with this instead of mutating
    /// in place.
    pub fn child(&self, direction: Direction) -> Self {
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(direction);
        Self { moves }
    }

    /// Whether appending this move would immediately undo the previous one
    pub fn reverses_last(&self, direction: Direction) -> bool {
        self.last() == Some(direction.reverse())
    }

    /// Replay the sequence from the board's start cell
    ///
    /// Returns every position entered, one per move, without bounds or wall
    /// checks; callers validate or render as needed.
    pub fn walk(&self, maze: &Maze) -> Vec<Position> {
        let mut current = maze.start();
        self.moves
            .iter()
            .map(|&direction| {
                current = current.stepped(direction);
                current
            })
            .collect()
    }

    /// Position reached after replaying the whole sequence from the start cell
    pub fn end_position(&self, maze: &Maze) -> Position {
        self.moves
            .iter()
            .fold(maze.start(), |position, &direction| {
                position.stepped(direction)
            })
    }
}

impl fmt::Display for MovePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in &self.moves {
            write!(f, "{direction}")?;
        }
        Ok(())
    }
}

impl FromStr for MovePath {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut moves = Vec::with_capacity(s.len());
        for (index, glyph) in s.chars().enumerate() {
            let direction =
                Direction::from_char(glyph).ok_or(MazeError::InvalidDirection {
                    found: glyph,
                    index,
                })?;
            moves.push(direction);
        }
        Ok(Self { moves })
    }
}
