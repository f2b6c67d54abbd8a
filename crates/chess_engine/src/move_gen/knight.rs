//! Knight move generation
//!
//! Knights jump in an L-shape and ignore pieces in between. A destination is
//! valid when it is empty or holds an enemy piece.

use super::tables::move_tables;
use crate::board::Board;
use crate::types::*;

/// Generate knight destinations from a given square
pub(crate) fn generate_knight_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    for &to in &move_tables().knight[from.index()] {
        if !board.is_color(to, color) {
            moves.push(to);
        }
    }
}
