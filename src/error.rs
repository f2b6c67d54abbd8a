//! Error types for the interactive session
//!
//! Covers text typed at the prompt. Engine-side rejections are wrapped from
//! [`ChessEngineError`].

use chess_engine::types::Color;
use chess_engine::ChessEngineError;

/// Errors that can occur while handling session input
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Input that is neither a move nor a known command
    #[error("Unrecognised input {input:?}: type a move like e2e4, or board, moves, new, quit")]
    UnknownCommand { input: String },

    /// A move whose square names could not be parsed
    #[error("Invalid move {text:?}: {source}")]
    BadMoveText {
        text: String,
        #[source]
        source: ChessEngineError,
    },

    /// A move entered while the engine is to move
    #[error("It is not your turn: the engine plays {color}")]
    NotYourTurn { color: Color },

    /// The engine rejected the move
    #[error(transparent)]
    Rejected(#[from] ChessEngineError),
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
