//! Performance measurement for breadth-first move-sequence search

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use mazeway::algorithm::carve::{CarveConfig, carve};
use mazeway::algorithm::search::solve;
use mazeway::spatial::grid::Maze;
use std::hint::black_box;

/// Measures a full search over the fixed 5x5 demo board
fn bench_solve_fixed_board(c: &mut Criterion) {
    let maze = Maze::fixed_five_by_five();
    c.bench_function("solve_fixed_5x5", |b| {
        b.iter(|| {
            let solution = solve(black_box(&maze));
            black_box(solution)
        });
    });
}

/// Measures a full search over a carved board
fn bench_solve_carved_board(c: &mut Criterion) {
    let Ok(maze) = carve(&CarveConfig {
        rows: 12,
        cols: 12,
        seed: 12345,
    }) else {
        return;
    };

    c.bench_function("solve_carved_12x12", |b| {
        b.iter(|| {
            let solution = solve(black_box(&maze));
            black_box(solution)
        });
    });
}

criterion_group!(benches, bench_solve_fixed_board, bench_solve_carved_board);
criterion_main!(benches);
