use crate::types::{BOARD_SIZE, Cell, Cells, GameStatus, Mark, Position, WinningLine};

// Scan order is fixed: rows top to bottom, columns left to right, main
// diagonal, anti-diagonal. The first completed line decides a grid that
// somehow holds two, which cannot arise through place_mark-only play.
const WIN_LINES: [[Position; BOARD_SIZE]; 8] = [
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

pub fn check_win_with_line(cells: &Cells) -> Option<WinningLine> {
    for line in &WIN_LINES {
        let first = cells[line[0].row][line[0].col];
        let Some(mark) = first.mark() else {
            continue;
        };

        if line
            .iter()
            .all(|position| cells[position.row][position.col] == first)
        {
            return Some(WinningLine::new(mark, line[0], line[BOARD_SIZE - 1]));
        }
    }

    None
}

pub fn check_win(cells: &Cells) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn is_winner(cells: &Cells, mark: Mark) -> bool {
    check_win(cells) == Some(mark)
}

pub fn detect_status(cells: &Cells) -> GameStatus {
    if let Some(mark) = check_win(cells) {
        return GameStatus::Win(mark);
    }

    let is_full = cells
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Cell::Empty));

    if is_full {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
