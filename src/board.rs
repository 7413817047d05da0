use crate::types::{BOARD_SIZE, Cell, Cells, GameStatus, Mark, PlaceError, Position};
use crate::win_detector::detect_status;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
    turn: Mark,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            turn: Mark::X,
        }
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        if position.row >= BOARD_SIZE || position.col >= BOARD_SIZE {
            return None;
        }
        Some(self.cells[position.row][position.col])
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        detect_status(&self.cells)
    }

    pub fn place_mark(&mut self, position: Position, mark: Mark) -> Result<(), PlaceError> {
        if self.status() != GameStatus::InProgress {
            return Err(PlaceError::GameOver);
        }

        if position.row >= BOARD_SIZE || position.col >= BOARD_SIZE {
            return Err(PlaceError::OutOfBounds);
        }

        if self.cells[position.row][position.col] != Cell::Empty {
            return Err(PlaceError::CellOccupied);
        }

        self.cells[position.row][position.col] = mark.cell();

        if self.status() == GameStatus::InProgress {
            self.turn = mark.opponent();
        }

        Ok(())
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_valid_move(&self, position: Position) -> bool {
        if position.row >= BOARD_SIZE || position.col >= BOARD_SIZE {
            return false;
        }
        self.cells[position.row][position.col] == Cell::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    // The caller must pass an empty cell; the search only feeds this
    // positions taken from available_moves().
    pub fn with_move(&self, position: Position, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[position.row][position.col] = mark.cell();
        next.turn = mark.opponent();
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
