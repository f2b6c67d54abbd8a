//! Move validation for caller-initiated moves
//!
//! The engine always plays legal moves. Moves entered by a caller (a human at
//! the board) are checked under a [`MoveValidation`] policy:
//!
//! - `PseudoLegal` accepts any move the piece can make by its movement rules,
//!   even one that leaves the mover's own king in check. This is how the
//!   interactive board has always behaved.
//! - `Legal` additionally rejects moves that leave the mover's king in check.
//!
//! Whichever policy is chosen applies to both colors.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::legal::legal_destinations;
use crate::move_gen::pseudo_legal_destinations;
use crate::types::*;

/// How strictly caller-entered moves are checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveValidation {
    #[default]
    PseudoLegal,
    Legal,
}

/// Check a move for `side` and build the [`Move`] it would play
///
/// # Errors
///
/// - [`ChessEngineError::NoPieceAtSquare`] if `from` is empty
/// - [`ChessEngineError::WrongPieceColor`] if the piece belongs to the other side
/// - [`ChessEngineError::IllegalMove`] if the policy rejects `from` -> `to`
///
/// # Examples
///
/// ```rust
/// use chess_engine::api::{validate_move, MoveValidation};
/// use chess_engine::board::Board;
/// use chess_engine::types::Color;
///
/// let board = Board::starting_position();
/// let e2 = "e2".parse().unwrap();
/// let e4 = "e4".parse().unwrap();
/// let mv = validate_move(&board, e2, e4, Color::White, MoveValidation::Legal).unwrap();
/// assert_eq!(mv.to_string(), "e2e4");
/// assert!(validate_move(&board, e2, e4, Color::Black, MoveValidation::Legal).is_err());
/// ```
pub fn validate_move(
    board: &Board,
    from: Square,
    to: Square,
    side: Color,
    policy: MoveValidation,
) -> ChessEngineResult<Move> {
    let piece = board
        .piece_at(from)
        .ok_or(ChessEngineError::NoPieceAtSquare { square: from })?;

    if piece.color != side {
        return Err(ChessEngineError::WrongPieceColor {
            square: from,
            color: side,
        });
    }

    let destinations = match policy {
        MoveValidation::PseudoLegal => pseudo_legal_destinations(board, from),
        MoveValidation::Legal => legal_destinations(board, from),
    };

    if !destinations.contains(&to) {
        return Err(ChessEngineError::IllegalMove { from, to });
    }

    Ok(Move::new(from, to, piece, board.piece_at(to)))
}
