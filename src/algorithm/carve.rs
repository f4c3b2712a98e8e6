//! Randomized depth-first maze carving
//!
//! Carves a maze on a wall grid using the recursive backtracker: start in the
//! first cell, repeatedly knock out the wall toward a random unvisited
//! neighbor, and backtrack when boxed in. The carved passages form a spanning
//! tree over the cells, so every board this module produces is solvable.

use bitvec::prelude::{BitVec, bitvec};
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SEED, MAX_CARVE_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{Cell, Maze, Position};

/// Carving parameters
///
/// `rows` and `cols` count carved cells, not wall lines; the produced board
/// is `2 * rows + 1` by `2 * cols + 1` including the outer wall.
#[derive(Clone, Copy, Debug)]
pub struct CarveConfig {
    /// Cell rows to carve
    pub rows: usize,
    /// Cell columns to carve
    pub cols: usize,
    /// Seed for reproducible carving
    pub seed: u64,
}

impl Default for CarveConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: DEFAULT_SEED,
        }
    }
}

/// Cell-grid neighbor offsets, one per cardinal direction
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Carve a maze with the recursive backtracker
///
/// The entrance `s` is cut into the top border above the first cell and the
/// exit `f` into the bottom border below the last cell. Identical
/// configurations carve identical boards.
///
/// # Errors
///
/// Returns [`crate::MazeError::InvalidParameter`] when either dimension is
/// zero or exceeds [`MAX_CARVE_DIMENSION`].
pub fn carve(config: &CarveConfig) -> Result<Maze> {
    validate_dimension("rows", config.rows)?;
    validate_dimension("cols", config.cols)?;

    let grid_rows = 2 * config.rows + 1;
    let grid_cols = 2 * config.cols + 1;
    let mut cells = Array2::from_elem((grid_rows, grid_cols), Cell::Wall);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut visited: BitVec = bitvec![0; config.rows * config.cols];
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(config.rows * config.cols);

    open_cell(&mut cells, 0, 0);
    visited.set(0, true);
    stack.push((0, 0));

    while let Some(&(row, col)) = stack.last() {
        let candidates = unvisited_neighbors(config, &visited, row, col);
        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let pick = rng.random_range(0..candidates.len());
        if let Some(&(next_row, next_col)) = candidates.get(pick) {
            open_wall_between(&mut cells, (row, col), (next_row, next_col));
            open_cell(&mut cells, next_row, next_col);
            visited.set(next_row * config.cols + next_col, true);
            stack.push((next_row, next_col));
        }
    }

    // Entrance above cell (0, 0), exit below cell (rows - 1, cols - 1)
    set_cell(&mut cells, 0, 1, Cell::Start);
    set_cell(&mut cells, grid_rows - 1, grid_cols - 2, Cell::Finish);

    Maze::from_cells(cells)
}

/// Carve the default-sized maze for a seed
///
/// # Errors
///
/// Propagates [`carve`] errors, which cannot occur for the default
/// dimensions.
pub fn carve_with_seed(seed: u64) -> Result<Maze> {
    carve(&CarveConfig {
        seed,
        ..CarveConfig::default()
    })
}

/// Board position of a carved cell's center
pub const fn cell_center(row: usize, col: usize) -> Position {
    Position::new((2 * col + 1) as i32, (2 * row + 1) as i32)
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(
            parameter,
            &value,
            &"must be at least 1",
        ));
    }
    if value > MAX_CARVE_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be at most {MAX_CARVE_DIMENSION}"),
        ));
    }
    Ok(())
}

fn unvisited_neighbors(
    config: &CarveConfig,
    visited: &BitVec,
    row: usize,
    col: usize,
) -> Vec<(usize, usize)> {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let next_row = row as i32 + dr;
            let next_col = col as i32 + dc;
            if next_row < 0
                || next_col < 0
                || next_row as usize >= config.rows
                || next_col as usize >= config.cols
            {
                return None;
            }
            let index = next_row as usize * config.cols + next_col as usize;
            let seen = visited.get(index).as_deref() == Some(&true);
            (!seen).then_some((next_row as usize, next_col as usize))
        })
        .collect()
}

fn open_cell(cells: &mut Array2<Cell>, row: usize, col: usize) {
    set_cell(cells, 2 * row + 1, 2 * col + 1, Cell::Open);
}

fn open_wall_between(cells: &mut Array2<Cell>, from: (usize, usize), to: (usize, usize)) {
    let wall_row = from.0 + to.0 + 1;
    let wall_col = from.1 + to.1 + 1;
    set_cell(cells, wall_row, wall_col, Cell::Open);
}

fn set_cell(cells: &mut Array2<Cell>, row: usize, col: usize, cell: Cell) {
    if let Some(slot) = cells.get_mut((row, col)) {
        *slot = cell;
    }
}

#[cfg(test)]
mod tests {
    use super::{CarveConfig, carve, cell_center};
    use crate::spatial::grid::Position;

    #[test]
    fn test_cell_center_maps_to_odd_coordinates() {
        assert_eq!(cell_center(0, 0), Position::new(1, 1));
        assert_eq!(cell_center(2, 3), Position::new(7, 5));
    }

    #[test]
    fn test_single_cell_carve() {
        let maze = carve(&CarveConfig {
            rows: 1,
            cols: 1,
            seed: 0,
        })
        .unwrap();
        assert_eq!(maze.dimensions(), (3, 3));
        assert!(maze.is_passable(Position::new(1, 1)));
    }
}
