//! Validates carved maze structure: dimensions, border openings,
//! reproducibility, and full connectivity of the carved cells

use std::collections::{HashSet, VecDeque};

use mazeway::MazeError;
use mazeway::algorithm::carve::{CarveConfig, carve, carve_with_seed, cell_center};
use mazeway::algorithm::moves::Direction;
use mazeway::spatial::grid::{Cell, Maze, Position};

#[test]
fn test_carved_dimensions_are_odd() {
    let maze = carve(&CarveConfig {
        rows: 4,
        cols: 7,
        seed: 3,
    })
    .unwrap();
    assert_eq!(maze.dimensions(), (9, 15));
}

#[test]
fn test_default_dimensions() {
    let maze = carve_with_seed(9).unwrap();
    assert_eq!(maze.dimensions(), (21, 21));
}

#[test]
fn test_same_seed_reproduces_the_same_board() {
    let config = CarveConfig {
        rows: 8,
        cols: 8,
        seed: 1234,
    };
    let first = carve(&config).unwrap();
    let second = carve(&config).unwrap();
    assert_eq!(first.render(), second.render());
}

#[test]
fn test_seeds_produce_varied_boards() {
    let renders: HashSet<String> = (0..6)
        .map(|seed| {
            carve(&CarveConfig {
                rows: 8,
                cols: 8,
                seed,
            })
            .unwrap()
            .render()
        })
        .collect();
    assert!(renders.len() > 1);
}

#[test]
fn test_entrance_and_exit_sit_in_the_border() {
    let maze = carve(&CarveConfig {
        rows: 5,
        cols: 5,
        seed: 7,
    })
    .unwrap();

    assert_eq!(maze.start(), Position::new(1, 0));
    assert_eq!(maze.cell(Position::new(1, 0)), Some(Cell::Start));
    let (rows, cols) = maze.dimensions();
    let exit = Position::new(cols as i32 - 2, rows as i32 - 1);
    assert_eq!(maze.cell(exit), Some(Cell::Finish));
}

#[test]
fn test_every_open_cell_is_reachable_from_the_start() {
    let maze = carve(&CarveConfig {
        rows: 6,
        cols: 9,
        seed: 11,
    })
    .unwrap();

    let mut seen = HashSet::new();
    let mut frontier = VecDeque::new();
    seen.insert(maze.start());
    frontier.push_back(maze.start());

    while let Some(position) = frontier.pop_front() {
        for direction in Direction::ALL {
            let next = position.stepped(direction);
            if maze.is_passable(next) && seen.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    let (rows, cols) = maze.dimensions();
    let mut open = 0;
    for y in 0..rows {
        for x in 0..cols {
            let position = Position::new(x as i32, y as i32);
            if maze.is_passable(position) {
                open += 1;
            }
        }
    }
    assert_eq!(seen.len(), open);
}

#[test]
fn test_every_carved_cell_is_open() {
    let config = CarveConfig {
        rows: 5,
        cols: 4,
        seed: 21,
    };
    let maze = carve(&config).unwrap();
    for row in 0..config.rows {
        for col in 0..config.cols {
            assert!(maze.is_passable(cell_center(row, col)));
        }
    }
}

#[test]
fn test_zero_dimension_is_rejected() {
    let err = carve(&CarveConfig {
        rows: 0,
        cols: 5,
        seed: 0,
    })
    .unwrap_err();
    assert!(matches!(
        err,
        MazeError::InvalidParameter {
            parameter: "rows",
            ..
        }
    ));
}

#[test]
fn test_oversized_dimension_is_rejected() {
    let err = carve(&CarveConfig {
        rows: 2,
        cols: 100_000,
        seed: 0,
    })
    .unwrap_err();
    assert!(matches!(
        err,
        MazeError::InvalidParameter {
            parameter: "cols",
            ..
        }
    ));
}

#[test]
fn test_parse_round_trips_a_carved_board() {
    let maze = carve(&CarveConfig {
        rows: 3,
        cols: 3,
        seed: 2,
    })
    .unwrap();

    let render = maze.render();
    let rows: Vec<String> = render
        .lines()
        .map(|line| line.chars().step_by(2).collect())
        .collect();
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let reparsed = Maze::parse(&row_refs).unwrap();
    assert_eq!(reparsed.render(), render);
}
