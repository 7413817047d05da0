use crate::board::Board;
use crate::types::{GameStatus, Mark, Position};

pub fn calculate_minimax_move(board: &Board, mark: Mark) -> Option<Position> {
    if board.status() != GameStatus::InProgress {
        return None;
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    // Strict improvement keeps the first candidate in row-major order on
    // ties, so repeated runs pick the same move.
    for position in board.available_moves() {
        let score = minimax(&board.with_move(position, mark), mark);
        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

pub fn minimax(board: &Board, maximizing_mark: Mark) -> i32 {
    match board.status() {
        GameStatus::Win(mark) if mark == maximizing_mark => 1,
        GameStatus::Win(_) => -1,
        GameStatus::Draw => 0,
        GameStatus::InProgress => {
            let mover = board.turn();

            if mover == maximizing_mark {
                let mut max_eval = i32::MIN;
                for position in board.available_moves() {
                    let eval = minimax(&board.with_move(position, mover), maximizing_mark);
                    max_eval = max_eval.max(eval);
                }
                if max_eval == i32::MIN { 0 } else { max_eval }
            } else {
                let mut min_eval = i32::MAX;
                for position in board.available_moves() {
                    let eval = minimax(&board.with_move(position, mover), maximizing_mark);
                    min_eval = min_eval.min(eval);
                }
                if min_eval == i32::MAX { 0 } else { min_eval }
            }
        }
    }
}
