//! Validates board text rendering, path overlay, and report output

use mazeway::algorithm::search::solve;
use mazeway::io::cli::{Cli, SolveRunner, solution_report};
use mazeway::spatial::grid::Maze;

#[test]
fn test_fixed_board_render() {
    let maze = Maze::fixed_five_by_five();
    let expected = [
        "# # s # #",
        "      # #",
        "  #     #",
        "  # #   #",
        "      f #",
    ]
    .join("\n");
    assert_eq!(maze.render(), expected);
}

#[test]
fn test_path_overlay_marks_entered_cells() {
    let maze = Maze::fixed_five_by_five();
    let path = "DDRDD".parse().unwrap();
    let expected = [
        "# # s # #",
        "    + # #",
        "  # + + #",
        "  # # + #",
        "      + #",
    ]
    .join("\n");
    assert_eq!(maze.render_with_path(&path), expected);
}

#[test]
fn test_overlay_never_touches_the_start_cell() {
    let maze = Maze::parse(&["#s#", "# #", "#f#"]).unwrap();
    let path = "DD".parse().unwrap();
    let rendered = maze.render_with_path(&path);
    assert!(rendered.contains('s'));
    assert!(!rendered.contains('f'));
}

#[test]
fn test_overlay_marks_a_start_cell_entered_again() {
    // The start glyph survives only because the walk begins after the first
    // move; a sequence looping back through the start overdraws it.
    let maze = Maze::parse(&["s ", "f#"]).unwrap();
    let path = "RLD".parse().unwrap();
    let rendered = maze.render_with_path(&path);
    assert!(!rendered.contains('s'));
    assert!(!rendered.contains('f'));
}

#[test]
fn test_solution_report_carries_the_move_string() {
    let maze = Maze::fixed_five_by_five();
    let solution = solve(&maze).unwrap();
    let report = solution_report(&maze, &solution);

    assert!(report.contains("Shortest path: DDRDD"));
    assert!(report.contains("Moves: 5"));
    assert!(report.contains('+'));
}

#[test]
fn test_runner_writes_the_report_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("solution.txt");

    let cli = Cli {
        rows: 3,
        cols: 3,
        seed: 42,
        fixed: true,
        expansions: 10_000,
        quiet: true,
        output: Some(output.clone()),
    };
    SolveRunner::new(cli).run().unwrap();

    let written = std::fs::read_to_string(output).unwrap();
    assert!(written.contains("Shortest path: DDRDD"));
}
