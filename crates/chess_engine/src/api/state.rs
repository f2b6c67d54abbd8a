//! Game state queries
//!
//! Reports whether the side to move is checkmated, stalemated or still has
//! moves. The engine never acts on this itself; ending the game is the
//! caller's decision.

use std::fmt;

use crate::board::Board;
use crate::legal::has_legal_move;
use crate::move_gen::is_in_check;
use crate::types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Get current game state for the side to move
pub fn get_game_status(board: &Board, side: Color) -> GameStatus {
    let in_check = is_in_check(board, side);

    match (has_legal_move(board, side), in_check) {
        (true, false) => GameStatus::Playing,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
    }
}
