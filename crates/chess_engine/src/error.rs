//! Error types for chess engine
//!
//! Errors here cover caller-supplied input (square names, coordinates, moves
//! submitted by a human). Precondition violations inside the engine itself
//! (probing an empty square for its piece, applying a move from an empty
//! square) are programmer errors and panic instead.

use thiserror::Error;

use crate::types::{Color, Square};

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Coordinates outside the 8x8 grid
    #[error("Invalid square coordinates: rank {rank}, file {file} (must be 0-7)")]
    InvalidSquare { rank: i32, file: i32 },

    /// Square name that is not algebraic notation (`a1`..`h8`)
    #[error("Invalid square name: {name:?}")]
    InvalidSquareName { name: String },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece does not belong to the side that tried to move it
    #[error("Piece at square {square} does not belong to {color}")]
    WrongPieceColor { square: Square, color: Color },

    /// Destination is not reachable under the active validation policy
    #[error("Illegal move: from square {from} to square {to}")]
    IllegalMove { from: Square, to: Square },

    /// Board text layout could not be parsed
    #[error("Invalid board layout: {message}")]
    InvalidBoardLayout { message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
