//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//!
//! ## Algorithm
//!
//! Each direction is a precomputed ray, nearest square first. Walking a ray:
//! 1. Empty square: valid move, keep going
//! 2. Opponent piece: valid capture, then stop
//! 3. Own piece: stop before it
//!
//! Rooks walk the four orthogonal rays, bishops the four diagonal rays, queens
//! all eight (orthogonal first). Every destination appears at most once since
//! rays never overlap.

use std::ops::Range;

use super::tables::{move_tables, DIAGONAL_RAYS, ORTHOGONAL_RAYS};
use crate::board::Board;
use crate::types::*;

/// Walk the rays in `dirs` from `from`, appending reachable squares
fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    dirs: Range<usize>,
    moves: &mut Vec<Square>,
) {
    let rays = &move_tables().rays[from.index()];

    for dir in dirs {
        for &to in &rays[dir] {
            if board.is_empty(to) {
                moves.push(to);
            } else {
                if !board.is_color(to, color) {
                    moves.push(to);
                }
                break;
            }
        }
    }
}

pub(crate) fn generate_bishop_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    generate_sliding_moves(board, from, color, DIAGONAL_RAYS, moves);
}

pub(crate) fn generate_rook_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    generate_sliding_moves(board, from, color, ORTHOGONAL_RAYS, moves);
}

pub(crate) fn generate_queen_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    generate_rook_moves(board, from, color, moves);
    generate_bishop_moves(board, from, color, moves);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_rook_on_empty_board() {
        let mut board = Board::empty();
        board.put(sq("d4"), Piece::new(Color::White, PieceKind::Rook));
        let mut moves = Vec::new();
        generate_rook_moves(&board, sq("d4"), Color::White, &mut moves);
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn test_rook_stops_before_own_piece_and_on_enemy() {
        let mut board = Board::empty();
        board.put(sq("a1"), Piece::new(Color::White, PieceKind::Rook));
        board.put(sq("a4"), Piece::new(Color::White, PieceKind::Pawn));
        board.put(sq("d1"), Piece::new(Color::Black, PieceKind::Knight));
        let mut moves = Vec::new();
        generate_rook_moves(&board, sq("a1"), Color::White, &mut moves);
        moves.sort();
        let mut expected = vec![sq("a2"), sq("a3"), sq("b1"), sq("c1"), sq("d1")];
        expected.sort();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_bishop_blocked_at_start() {
        let board = Board::starting_position();
        let mut moves = Vec::new();
        generate_bishop_moves(&board, sq("c1"), Color::White, &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_queen_combines_rook_and_bishop() {
        let mut board = Board::empty();
        board.put(sq("d4"), Piece::new(Color::Black, PieceKind::Queen));
        let mut moves = Vec::new();
        generate_queen_moves(&board, sq("d4"), Color::Black, &mut moves);
        assert_eq!(moves.len(), 27);

        let mut unique = moves.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), moves.len(), "no duplicate destinations");
    }
}
