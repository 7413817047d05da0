use crate::board::Board;
use crate::bot_controller::calculate_minimax_move;
use crate::log;
use crate::settings::MatchSettings;
use crate::types::{GameStatus, Position};

pub struct MatchSession {
    board: Board,
    settings: MatchSettings,
}

impl MatchSession {
    pub fn new(settings: MatchSettings) -> Self {
        Self {
            board: Board::new(),
            settings,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn bot_enabled(&self) -> bool {
        self.settings.bot_enabled
    }

    pub fn set_bot_enabled(&mut self, enabled: bool) {
        self.settings.bot_enabled = enabled;
        // Enabling mid-game while it is already the bot's turn hands it
        // the move right away.
        self.maybe_play_bot();
    }

    pub fn handle_place(&mut self, position: Position) -> GameStatus {
        let mark = self.board.turn();

        match self.board.place_mark(position, mark) {
            Ok(()) => self.maybe_play_bot(),
            Err(e) => {
                log!(
                    "Player {} failed to place mark at ({}, {}): {}",
                    mark,
                    position.row,
                    position.col,
                    e
                );
            }
        }

        self.board.status()
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.maybe_play_bot();
    }

    fn maybe_play_bot(&mut self) {
        if !self.settings.bot_enabled {
            return;
        }
        if self.board.status() != GameStatus::InProgress {
            return;
        }
        if self.board.turn() != self.settings.bot_mark {
            return;
        }

        let Some(position) = calculate_minimax_move(&self.board, self.settings.bot_mark) else {
            return;
        };

        if let Err(e) = self.board.place_mark(position, self.settings.bot_mark) {
            log!(
                "Bot {} failed to place mark at ({}, {}): {}",
                self.settings.bot_mark,
                position.row,
                position.col,
                e
            );
        }
    }
}
