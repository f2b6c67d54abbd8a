//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, onto an empty square
//! - **Double push**: two squares from the pawn's starting rank (rank 2 for White,
//!   rank 7 for Black), only if both the intermediate and destination squares are
//!   empty
//! - **Captures**: one square diagonally forward, only onto an enemy piece
//!
//! There is no en passant and no promotion: a pawn that reaches the last rank
//! stays a pawn and simply has no forward moves left.

use crate::board::Board;
use crate::types::*;

/// Generate pawn destinations from a given square
///
/// # Arguments
///
/// * `board` - The position
/// * `from` - Square holding the pawn
/// * `color` - Color of the pawn
/// * `moves` - Output vector to append destinations to
pub(crate) fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    let forward = color.pawn_direction();

    if let Some(one) = from.offset(forward, 0) {
        if board.is_empty(one) {
            moves.push(one);

            if from.rank() == color.pawn_start_rank() {
                if let Some(two) = one.offset(forward, 0) {
                    if board.is_empty(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        if let Some(target) = from.offset(forward, side) {
            if board.is_color(target, color.opposite()) {
                moves.push(target);
            }
        }
    }
}
