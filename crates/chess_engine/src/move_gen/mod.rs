//! Move generation with precalculated move tables
//!
//! Generates pseudo-legal moves: moves that follow each piece's movement pattern,
//! the board edges and same-color blocking, but may leave the mover's own king in
//! check. [`crate::legal`] filters those out.
//!
//! ## Module Organization
//!
//! - `tables` - Knight jumps, king steps and sliding rays, built once
//! - `pawn`, `knight`, `king`, `sliding` - Per-piece destination generators
//! - `attack` - Square attack and check detection
//!
//! ## Ordering
//!
//! [`pseudo_legal_moves`] visits origins in board scan order (a1, b1, .. h8) and
//! keeps each generator's destination order, so the output is deterministic.

mod attack;
mod king;
mod knight;
mod pawn;
mod sliding;
mod tables;

pub use attack::{is_in_check, is_square_attacked};

use crate::board::Board;
use crate::types::*;

/// Pseudo-legal destinations for the piece on `from`
///
/// # Panics
///
/// Panics if `from` is empty.
///
/// # Examples
///
/// ```rust
/// use chess_engine::board::Board;
/// use chess_engine::move_gen::pseudo_legal_destinations;
///
/// let board = Board::starting_position();
/// let knight = pseudo_legal_destinations(&board, "b1".parse().unwrap());
/// assert_eq!(knight.len(), 2);
/// ```
pub fn pseudo_legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => panic!("no piece on {from} to generate moves for"),
    };
    let mut moves = Vec::new();
    push_destinations(board, from, piece, &mut moves);
    moves
}

/// All pseudo-legal moves for `color`, in scan order
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);
    let mut destinations = Vec::with_capacity(28);

    for (from, piece) in board.pieces(color) {
        destinations.clear();
        push_destinations(board, from, piece, &mut destinations);
        moves.extend(
            destinations
                .iter()
                .map(|&to| Move::new(from, to, piece, board.piece_at(to))),
        );
    }

    moves
}

pub(crate) fn push_destinations(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Square>) {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, color, moves),
        PieceKind::Knight => knight::generate_knight_moves(board, from, color, moves),
        PieceKind::Bishop => sliding::generate_bishop_moves(board, from, color, moves),
        PieceKind::Rook => sliding::generate_rook_moves(board, from, color, moves),
        PieceKind::Queen => sliding::generate_queen_moves(board, from, color, moves),
        PieceKind::King => king::generate_king_moves(board, from, color, moves),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_starting_position_pseudo_legal_count() {
        let board = Board::starting_position();
        assert_eq!(pseudo_legal_moves(&board, Color::White).len(), 20);
        assert_eq!(pseudo_legal_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn test_moves_follow_scan_order() {
        let board = Board::starting_position();
        let moves = pseudo_legal_moves(&board, Color::White);
        // b1 comes before the second-rank pawns in scan order
        assert_eq!(moves[0].from, sq("b1"));
        assert_eq!(moves[0].to, sq("c3"));
        let origins: Vec<usize> = moves.iter().map(|m| m.from.index()).collect();
        let mut sorted = origins.clone();
        sorted.sort();
        assert_eq!(origins, sorted, "origins should be in scan order");
    }

    #[test]
    fn test_moves_record_captured_piece() {
        let mut board = Board::starting_position();
        board.put(sq("d3"), Piece::new(Color::Black, PieceKind::Queen));
        let captures: Vec<Move> = pseudo_legal_moves(&board, Color::White)
            .into_iter()
            .filter(Move::is_capture)
            .collect();
        assert_eq!(captures.len(), 2, "only the c2 and e2 pawns reach d3: {captures:?}");
        assert!(captures
            .iter()
            .all(|m| m.captured == Some(Piece::new(Color::Black, PieceKind::Queen))));
    }

    #[test]
    fn test_pseudo_legal_ignores_pins() {
        // The e2 rook is pinned by the e8 rook but still generates sideways moves.
        let board = Board::from_rows(&[
            "....r..k", "........", "........", "........", "........", "........", "....R...",
            "....K...",
        ])
        .unwrap();
        let destinations = pseudo_legal_destinations(&board, sq("e2"));
        assert!(destinations.contains(&sq("a2")));
        assert!(destinations.contains(&sq("e8")));
    }

    #[test]
    #[should_panic(expected = "no piece on e4")]
    fn test_destinations_from_empty_square_panics() {
        let board = Board::starting_position();
        let _ = pseudo_legal_destinations(&board, sq("e4"));
    }
}
