use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minesweeper_core::*;

fn open_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    for dim in [15, 99, 400] {
        let layout = MineLayout::from_mine_coords(dim, &[(dim - 1, dim - 1)]).unwrap();
        group.bench_function(format!("open_{dim}x{dim}"), |b| {
            b.iter_batched(
                || Board::new(layout.clone()),
                |mut board| black_box(board.reveal((0, 0))),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn generated_board(c: &mut Criterion) {
    let config = GameConfig::default();

    c.bench_function("generate_and_reveal_default", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut board = Board::generate(config, seed);
            let start = board.unrevealed_safe_cells().first().copied();
            if let Some(coords) = start {
                black_box(board.reveal(coords)).ok();
            }
            board
        })
    });
}

criterion_group!(benches, open_board, generated_board);
criterion_main!(benches);
