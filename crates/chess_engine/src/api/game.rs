//! Game lifecycle management
//!
//! [`Game`] owns the authoritative board between plies. It records the move
//! history and the pieces each side has captured, flips the turn after every
//! move, and is the only place a board is changed outside a search.

use rand::Rng;

use super::moves::{validate_move, MoveValidation};
use super::state::{get_game_status, GameStatus};
use crate::board::{apply_move, Board};
use crate::error::ChessEngineResult;
use crate::evaluation::game_phase;
use crate::legal::legal_moves;
use crate::search::SearchConfig;
use crate::selector::select_engine_move;
use crate::types::*;

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
    captured_by_white: Vec<Piece>,
    captured_by_black: Vec<Piece>,
    validation: MoveValidation,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(MoveValidation::default())
    }
}

impl Game {
    /// Create a new game with initial position
    pub fn new(validation: MoveValidation) -> Self {
        Game::from_position(Board::starting_position(), Color::White, validation)
    }

    /// Start from an arbitrary position with an empty history
    pub fn from_position(board: Board, side_to_move: Color, validation: MoveValidation) -> Self {
        Game {
            board,
            side_to_move,
            history: Vec::new(),
            captured_by_white: Vec::new(),
            captured_by_black: Vec::new(),
            validation,
        }
    }

    /// Reset the game to starting position, keeping the validation policy
    pub fn reset(&mut self) {
        *self = Game::new(self.validation);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// 1-based number of the ply about to be played
    pub fn move_number(&self) -> usize {
        self.history.len() + 1
    }

    /// Pieces `color` has taken from the opponent, in capture order
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.captured_by_white,
            Color::Black => &self.captured_by_black,
        }
    }

    pub fn validation(&self) -> MoveValidation {
        self.validation
    }

    /// Legal moves for the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.side_to_move)
    }

    pub fn status(&self) -> GameStatus {
        get_game_status(&self.board, self.side_to_move)
    }

    /// Play a caller-entered move for the side to move
    ///
    /// The move is checked under this game's [`MoveValidation`] policy. On
    /// success it is recorded and the turn passes to the other side; on error
    /// nothing changes.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`validate_move`].
    pub fn play(&mut self, from: Square, to: Square) -> ChessEngineResult<Move> {
        let mv = validate_move(&self.board, from, to, self.side_to_move, self.validation)?;
        self.commit(mv);
        Ok(mv)
    }

    /// Let the engine choose and play a move for the side to move
    ///
    /// Returns `None`, leaving the game untouched, when the side to move has
    /// no legal moves.
    pub fn engine_move<R: Rng + ?Sized>(&mut self, config: &SearchConfig, rng: &mut R) -> Option<Move> {
        let phase = game_phase(&self.board);
        let mv = select_engine_move(
            &self.board,
            self.side_to_move,
            self.history.len(),
            Some(phase),
            config,
            rng,
        )?;
        self.commit(mv);
        Some(mv)
    }

    fn commit(&mut self, mv: Move) {
        if let Some(captured) = mv.captured {
            match mv.piece.color {
                Color::White => self.captured_by_white.push(captured),
                Color::Black => self.captured_by_black.push(captured),
            }
        }
        self.board = apply_move(&self.board, mv.from, mv.to);
        self.history.push(mv);
        self.side_to_move = self.side_to_move.opposite();
    }
}
