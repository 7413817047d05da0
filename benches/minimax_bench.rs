use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::{Board, GameStatus, Mark, Position, calculate_minimax_move};

fn bench_minimax_opening_move(c: &mut Criterion) {
    c.bench_function("minimax_opening_move", |b| {
        b.iter(|| {
            let board = Board::new();
            calculate_minimax_move(&board, Mark::X)
        });
    });
}

fn bench_minimax_midgame_move(c: &mut Criterion) {
    c.bench_function("minimax_midgame_move", |b| {
        let mut board = Board::new();
        let moves = [(1, 1), (0, 0), (2, 0), (0, 2), (0, 1)];
        for &(row, col) in &moves {
            let mark = board.turn();
            board
                .place_mark(Position::new(row, col), mark)
                .expect("scripted midgame move");
        }

        b.iter(|| calculate_minimax_move(&board, board.turn()));
    });
}

fn bench_minimax_full_self_play(c: &mut Criterion) {
    c.bench_function("minimax_full_self_play", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut mover = Mark::X;

            while board.status() == GameStatus::InProgress {
                let Some(position) = calculate_minimax_move(&board, mover) else {
                    break;
                };
                board = board.with_move(position, mover);
                mover = mover.opponent();
            }

            board.status()
        });
    });
}

criterion_group!(
    benches,
    bench_minimax_opening_move,
    bench_minimax_midgame_move,
    bench_minimax_full_self_play
);
criterion_main!(benches);
