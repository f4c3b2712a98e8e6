//! CLI entry point for maze carving and breadth-first solving

use clap::Parser;
use mazeway::io::cli::{Cli, SolveRunner};

fn main() -> mazeway::Result<()> {
    let cli = Cli::parse();
    let runner = SolveRunner::new(cli);
    runner.run()
}
