//! Public API for the chess engine
//!
//! The operations a game-state controller needs, in one place:
//!
//! - [`legal_moves`] - validate a human move or enumerate engine candidates
//! - [`apply_move`] - pure board transformation
//! - [`is_in_check`] - status display
//! - [`select_engine_move`] - the engine's choice for the side to move
//!
//! plus [`Game`], a controller that owns the board, history and captured
//! pieces and applies one validation policy to both colors.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new, reset, play, engine_move)
//! - `moves` - Move validation policy for caller-entered moves
//! - `state` - Game state queries (playing, check, checkmate, stalemate)

mod game;
mod moves;
mod state;

pub use game::Game;
pub use moves::{validate_move, MoveValidation};
pub use state::{get_game_status, GameStatus};

pub use crate::board::apply_move;
pub use crate::legal::legal_moves;
pub use crate::move_gen::is_in_check;
pub use crate::selector::select_engine_move;
