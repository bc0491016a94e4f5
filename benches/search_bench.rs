//! Benchmarks for evaluation and fixed-depth search
//!
//! Fixed depths keep the work per iteration constant, so timings are
//! comparable between runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reversi::board::{Board, Disc, Pos};
use reversi::eval::{EvalWeights, Evaluator};
use reversi::rules::{legal_moves, make_move};
use reversi::search::Searcher;

/// Play `plies` moves from the opening, always taking the first legal move
fn opened_board(size: usize, plies: usize) -> Board {
    let mut board = Board::initial(size).unwrap();
    let mut color = Disc::Black;
    for _ in 0..plies {
        if let Some(&mov) = legal_moves(&board, color).first() {
            board = make_move(&board, mov, color);
        }
        color = color.opponent();
    }
    board
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for size in [6, 8, 10, 12] {
        let evaluator = Evaluator::new(EvalWeights::default(), size).unwrap();
        let board = opened_board(size, 10);
        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            b.iter(|| black_box(evaluator.evaluate(black_box(board), Disc::Black)))
        });
    }
    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let board = opened_board(8, 12);
    c.bench_function("legal_moves_8x8", |b| {
        b.iter(|| black_box(legal_moves(black_box(&board), Disc::Black)))
    });
}

fn bench_fixed_depth_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_fixed_depth");
    group.sample_size(10);

    let evaluator = Evaluator::new(EvalWeights::default(), 8).unwrap();
    let board = make_move(&Board::initial(8).unwrap(), Pos::new(2, 3), Disc::Black);
    let mut searcher = Searcher::new(1 << 18, 1 << 12);

    for depth in [2u8, 4, 5] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(searcher.search(&evaluator, &board, Disc::White, depth)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_legal_moves, bench_fixed_depth_search);
criterion_main!(benches);
