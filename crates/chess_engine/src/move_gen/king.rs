//! King move generation
//!
//! Kings step one square in any direction onto an empty or enemy-occupied
//! square. There is no castling. Stepping into check is filtered out later by
//! the legality filter, not here.

use super::tables::move_tables;
use crate::board::Board;
use crate::types::*;

pub(crate) fn generate_king_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    for &to in &move_tables().king[from.index()] {
        if !board.is_color(to, color) {
            moves.push(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_king_boxed_in_at_start() {
        let board = Board::starting_position();
        let mut moves = Vec::new();
        generate_king_moves(&board, "e1".parse().unwrap(), Color::White, &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_king_in_open_has_eight_steps() {
        let mut board = Board::empty();
        let e4: Square = "e4".parse().unwrap();
        board.put(e4, Piece::new(Color::Black, PieceKind::King));
        board.put("e5".parse().unwrap(), Piece::new(Color::White, PieceKind::Pawn));
        let mut moves = Vec::new();
        generate_king_moves(&board, e4, Color::Black, &mut moves);
        assert_eq!(moves.len(), 8);
    }
}
