//! Command-line interface for carving and solving mazes

use crate::algorithm::carve::{CarveConfig, carve};
use crate::algorithm::search::{BreadthFirstSolver, Solution, SolverConfig};
use crate::io::configuration::{DEFAULT_COLS, DEFAULT_MAX_EXPANSIONS, DEFAULT_ROWS, DEFAULT_SEED};
use crate::io::error::{Result, file_system_error};
use crate::io::progress::SearchProgress;
use crate::spatial::grid::Maze;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mazeway")]
#[command(
    author,
    version,
    about = "Carve a random maze and solve it with breadth-first search"
)]
/// Command-line arguments for the maze tool
pub struct Cli {
    /// Cell rows to carve
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Cell columns to carve
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Random seed for reproducible carving
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Solve the built-in 5x5 demo board instead of carving
    #[arg(short, long)]
    pub fixed: bool,

    /// Maximum search expansions before giving up
    #[arg(short = 'e', long, default_value_t = DEFAULT_MAX_EXPANSIONS)]
    pub expansions: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the solved board and move string to a file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates carve, solve, and report for one CLI invocation
pub struct SolveRunner {
    cli: Cli,
}

impl SolveRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Carve (or load the fixed board), solve, and emit the report
    ///
    /// # Errors
    ///
    /// Returns an error if carving parameters are invalid, the search fails,
    /// or the report file cannot be written.
    pub fn run(&self) -> Result<()> {
        let maze = self.build_maze()?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| SearchProgress::new(self.cli.expansions));

        let config = SolverConfig {
            max_expansions: self.cli.expansions,
        };
        let mut solver = BreadthFirstSolver::new(&maze, config);
        let solution = solver.solve_with_progress(|expansions| {
            if let Some(bar) = &progress {
                bar.update(expansions);
            }
        })?;

        if let Some(bar) = &progress {
            bar.finish();
        }

        let report = solution_report(&maze, &solution);
        self.emit(&report)?;
        Ok(())
    }

    fn build_maze(&self) -> Result<Maze> {
        if self.cli.fixed {
            return Ok(Maze::fixed_five_by_five());
        }
        carve(&CarveConfig {
            rows: self.cli.rows,
            cols: self.cli.cols,
            seed: self.cli.seed,
        })
    }

    // Allow print for the user-facing result report
    #[allow(clippy::print_stdout)]
    fn emit(&self, report: &str) -> Result<()> {
        println!("{report}");

        if let Some(path) = &self.cli.output {
            std::fs::write(path, report)
                .map_err(|e| file_system_error(path.clone(), "write report", e))?;
        }
        Ok(())
    }
}

/// Render the solved board and search summary as report text
pub fn solution_report(maze: &Maze, solution: &Solution) -> String {
    format!(
        "{}\n\nShortest path: {}\nMoves: {}, states expanded: {}, frontier peak: {}\n",
        maze.render_with_path(&solution.path),
        solution.path,
        solution.stats.path_len,
        solution.stats.expansions,
        solution.stats.frontier_peak,
    )
}
