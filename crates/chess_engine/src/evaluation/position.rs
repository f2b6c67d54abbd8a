//! Full position evaluation
//!
//! Evaluates positions using material, piece-square tables and, once the board
//! thins out into an endgame, a king centralisation term.

use super::pst::get_pst_value;
use crate::board::Board;
use crate::constants::*;
use crate::types::*;

/// Classify the position by total piece count, kings included
///
/// More than 28 pieces is the opening, 12 or fewer the endgame, anything in
/// between the middlegame.
pub fn game_phase(board: &Board) -> GamePhase {
    let pieces = board.piece_count();
    if pieces > OPENING_PIECE_THRESHOLD {
        GamePhase::Opening
    } else if pieces <= ENDGAME_PIECE_THRESHOLD {
        GamePhase::Endgame
    } else {
        GamePhase::Middlegame
    }
}

/// Evaluate the position and report the phase it was scored in
pub fn evaluate_with_phase(board: &Board) -> (i32, GamePhase) {
    let phase = game_phase(board);
    let mut score = 0;

    for (square, piece) in board.occupied() {
        score += piece.value() * piece.color.sign();
        score += get_pst_value(piece, square);

        if phase == GamePhase::Endgame && piece.kind == PieceKind::King {
            score += king_centralisation(square) * piece.color.sign();
        }
    }

    (score, phase)
}

/// Evaluate full position (material + positional), positive favors White
pub fn evaluate(board: &Board) -> i32 {
    evaluate_with_phase(board).0
}

/// Bonus for a king near the middle of the board: 60 on the four center
/// squares, 0 in the corners
fn king_centralisation(square: Square) -> i32 {
    let rank_dist = (2 * square.rank() as i32 - 7).abs();
    let file_dist = (2 * square.file() as i32 - 7).abs();
    (14 - (rank_dist + file_dist)) * KING_CENTER_WEIGHT
}
