//! Attack detection and check detection
//!
//! Check detection runs once per candidate move in the legality filter and at
//! every search node, so it dominates engine cost. Instead of generating every
//! enemy move and looking for the king's square, we look outward from the target
//! square:
//!
//! - pawn: the two squares an enemy pawn would capture from
//! - knight / king: the precomputed jump and step tables
//! - sliders: the first piece met along each ray; a rook or queen on an
//!   orthogonal ray, or a bishop or queen on a diagonal ray, attacks
//!
//! For an occupied target (a king) this is exactly "some enemy pseudo-legal
//! destination equals the target", because every pseudo-legal capture pattern is
//! symmetric. The tests cross-check the two definitions.

use super::tables::{move_tables, DIAGONAL_RAYS, ORTHOGONAL_RAYS};
use crate::board::Board;
use crate::types::*;

/// Check if a square is attacked by pieces of `by`
///
/// # Arguments
///
/// * `board` - The position
/// * `square` - Target square
/// * `by` - Color of the pieces that might attack
///
/// # Examples
///
/// ```rust
/// use chess_engine::board::Board;
/// use chess_engine::move_gen::is_square_attacked;
/// use chess_engine::types::Color;
///
/// let board = Board::starting_position();
/// // f3 is covered by the g1 knight and the e2/g2 pawns
/// assert!(is_square_attacked(&board, "f3".parse().unwrap(), Color::White));
/// assert!(!is_square_attacked(&board, "e4".parse().unwrap(), Color::Black));
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    let tables = move_tables();
    let idx = square.index();

    // An attacking pawn sits one rank behind the target, from its own side.
    let behind = -by.pawn_direction();
    for side in [-1, 1] {
        if let Some(from) = square.offset(behind, side) {
            if board.piece_at(from) == Some(Piece::new(by, PieceKind::Pawn)) {
                return true;
            }
        }
    }

    let knight = Piece::new(by, PieceKind::Knight);
    if tables.knight[idx].iter().any(|&from| board.piece_at(from) == Some(knight)) {
        return true;
    }

    let king = Piece::new(by, PieceKind::King);
    if tables.king[idx].iter().any(|&from| board.piece_at(from) == Some(king)) {
        return true;
    }

    let slider_hits = |dirs: std::ops::Range<usize>, kind: PieceKind| {
        dirs.into_iter().any(|dir| {
            tables.rays[idx][dir]
                .iter()
                .find_map(|&from| board.piece_at(from))
                .is_some_and(|p| p.color == by && (p.kind == kind || p.kind == PieceKind::Queen))
        })
    };

    slider_hits(ORTHOGONAL_RAYS, PieceKind::Rook) || slider_hits(DIAGONAL_RAYS, PieceKind::Bishop)
}

/// Check if the king of `color` is in check
///
/// The king is the first one of that color in scan order. A board without such
/// a king is reported as not in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    }
}
