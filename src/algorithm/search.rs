//! Breadth-first search over move sequences
//!
//! The frontier is a FIFO of move sequences anchored at the start cell,
//! seeded with the empty sequence. Each expansion pops one sequence, tests it
//! against the finish, and enqueues every one-move extension that is not an
//! immediate reversal, stays on the board, and does not end in a wall. FIFO
//! order makes the first sequence to reach the finish a shortest one.
//!
//! No visited set is kept beyond reversal pruning; states are move sequences,
//! not cells, exactly as in the console demos this crate grew from.

use std::collections::VecDeque;

use crate::algorithm::moves::{Direction, MovePath};
use crate::io::configuration::{DEFAULT_MAX_EXPANSIONS, PROGRESS_UPDATE_INTERVAL};
use crate::io::error::{MazeError, Result};
use crate::spatial::grid::{Maze, Position};

/// Search parameters
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Expansion budget before the search gives up
    pub max_expansions: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

/// Counters describing a finished search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Sequences popped and expanded
    pub expansions: usize,
    /// Largest frontier size observed
    pub frontier_peak: usize,
    /// Moves in the returned path
    pub path_len: usize,
}

/// A shortest solution together with search counters
#[derive(Clone, Debug)]
pub struct Solution {
    /// Move sequence from start to finish
    pub path: MovePath,
    /// Search counters at the moment the finish was popped
    pub stats: SearchStats,
}

/// One frontier entry: a move sequence and the cell it ends on
///
/// Carrying the end position alongside the sequence makes each extension
/// check O(1) instead of replaying the whole sequence per candidate. The
/// explored state space and expansion order are unchanged.
#[derive(Clone, Debug)]
struct FrontierEntry {
    path: MovePath,
    position: Position,
}

/// Breadth-first solver over a borrowed board
pub struct BreadthFirstSolver<'a> {
    maze: &'a Maze,
    config: SolverConfig,
    frontier: VecDeque<FrontierEntry>,
    expansions: usize,
    frontier_peak: usize,
}

impl<'a> BreadthFirstSolver<'a> {
    /// Create a solver with its frontier seeded at the board's start cell
    pub fn new(maze: &'a Maze, config: SolverConfig) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(FrontierEntry {
            path: MovePath::new(),
            position: maze.start(),
        });

        Self {
            maze,
            config,
            frontier,
            expansions: 0,
            frontier_peak: 1,
        }
    }

    /// Pop and expand one move sequence
    ///
    /// Returns `Ok(Some(solution))` when the popped sequence ends on the
    /// finish, `Ok(None)` after an ordinary expansion.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NoPath`] when the frontier drains without
    /// reaching the finish, and [`MazeError::ExpansionLimit`] when the
    /// configured budget is exhausted first.
    pub fn step(&mut self) -> Result<Option<Solution>> {
        let entry = self.frontier.pop_front().ok_or(MazeError::NoPath {
            expansions: self.expansions,
            grid_dimensions: self.maze.dimensions(),
        })?;

        if self.maze.is_finish(entry.position) {
            return Ok(Some(Solution {
                stats: SearchStats {
                    expansions: self.expansions,
                    frontier_peak: self.frontier_peak,
                    path_len: entry.path.len(),
                },
                path: entry.path,
            }));
        }

        if self.expansions >= self.config.max_expansions {
            return Err(MazeError::ExpansionLimit {
                limit: self.config.max_expansions,
            });
        }
        self.expansions += 1;

        for direction in Direction::ALL {
            if entry.path.reverses_last(direction) {
                continue;
            }
            let next = entry.position.stepped(direction);
            if !self.maze.is_passable(next) {
                continue;
            }
            self.frontier.push_back(FrontierEntry {
                path: entry.path.child(direction),
                position: next,
            });
        }

        self.frontier_peak = self.frontier_peak.max(self.frontier.len());
        Ok(None)
    }

    /// Run the search to completion
    ///
    /// # Errors
    ///
    /// Propagates [`step`](Self::step) errors.
    pub fn solve(&mut self) -> Result<Solution> {
        self.solve_with_progress(|_| {})
    }

    /// Run the search, reporting the expansion count at a fixed interval
    ///
    /// # Errors
    ///
    /// Propagates [`step`](Self::step) errors.
    pub fn solve_with_progress(
        &mut self,
        mut on_progress: impl FnMut(usize),
    ) -> Result<Solution> {
        loop {
            if let Some(solution) = self.step()? {
                on_progress(self.expansions);
                return Ok(solution);
            }
            if self.expansions % PROGRESS_UPDATE_INTERVAL == 0 {
                on_progress(self.expansions);
            }
        }
    }

    /// Sequences expanded so far
    pub const fn expansions(&self) -> usize {
        self.expansions
    }

    /// Current frontier size
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}

/// Solve a board with the default configuration
///
/// # Errors
///
/// Propagates [`BreadthFirstSolver::step`] errors.
pub fn solve(maze: &Maze) -> Result<Solution> {
    BreadthFirstSolver::new(maze, SolverConfig::default()).solve()
}
