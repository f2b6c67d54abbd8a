//! Legal move filtering
//!
//! A legal move is a pseudo-legal move that does not leave the mover's own king
//! in check. Each candidate is played on one scratch board with
//! [`make_move`](crate::board) and taken back right after the check test, so the
//! caller's board is never touched.
//!
//! Output order is the pseudo-legal order: origins in scan order, then each
//! piece's destination order.

use crate::board::{make_move, unmake_move, Board};
use crate::move_gen::{is_in_check, pseudo_legal_destinations, pseudo_legal_moves};
use crate::types::*;

/// All legal moves for `color`
///
/// # Examples
///
/// ```rust
/// use chess_engine::board::Board;
/// use chess_engine::legal::legal_moves;
/// use chess_engine::types::Color;
///
/// let moves = legal_moves(&Board::starting_position(), Color::White);
/// assert_eq!(moves.len(), 20);
/// ```
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut scratch = *board;
    pseudo_legal_moves(board, color)
        .into_iter()
        .filter(|mv| keeps_king_safe(&mut scratch, mv.from, mv.to, color))
        .collect()
}

/// Whether `color` has at least one legal move; stops at the first one found
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    let mut scratch = *board;
    pseudo_legal_moves(board, color)
        .iter()
        .any(|mv| keeps_king_safe(&mut scratch, mv.from, mv.to, color))
}

/// Legal destinations for the piece on `from`
///
/// # Panics
///
/// Panics if `from` is empty.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let color = match board.piece_at(from) {
        Some(piece) => piece.color,
        None => panic!("no piece on {from} to generate moves for"),
    };
    let mut scratch = *board;
    pseudo_legal_destinations(board, from)
        .into_iter()
        .filter(|&to| keeps_king_safe(&mut scratch, from, to, color))
        .collect()
}

fn keeps_king_safe(scratch: &mut Board, from: Square, to: Square, color: Color) -> bool {
    let undo = make_move(scratch, from, to);
    let safe = !is_in_check(scratch, color);
    unmake_move(scratch, undo);
    safe
}
