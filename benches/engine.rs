use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::types::{PieceKind, Rotation};
use blockfall::{Board, PieceController, PieceGenerator};

fn bench_spawn_piece(c: &mut Criterion) {
    c.bench_function("spawn_piece", |b| {
        let board = Board::new();
        let mut pc = PieceController::new(board, PieceGenerator::new(12345));

        b.iter(|| {
            pc.spawn_piece();
        })
    });
}

fn bench_rotate_piece(c: &mut Criterion) {
    c.bench_function("rotate_piece", |b| {
        let board = Board::new();
        let mut pc = PieceController::new(board, PieceGenerator::new(12345));
        pc.spawn_piece();

        b.iter(|| {
            pc.rotate_piece(black_box(Rotation::East));
            pc.rotate_piece(black_box(Rotation::North));
        })
    });
}

fn bench_legality_query(c: &mut Criterion) {
    use blockfall::BoardQuery;

    c.bench_function("is_legal_placement", |b| {
        let board = Board::new();

        b.iter(|| {
            board.is_legal_placement(
                black_box(PieceKind::T),
                black_box(4),
                black_box(10),
                black_box(Rotation::East),
            )
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                for column in 0..10 {
                    board.set(column, row, Some(PieceKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

criterion_group!(
    benches,
    bench_spawn_piece,
    bench_rotate_piece,
    bench_legality_query,
    bench_line_clear
);
criterion_main!(benches);
