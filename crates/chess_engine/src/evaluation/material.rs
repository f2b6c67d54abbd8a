//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::board::Board;

/// Evaluate material balance (positive favors White)
pub fn evaluate_material(board: &Board) -> i32 {
    board
        .occupied()
        .map(|(_, piece)| piece.value() * piece.color.sign())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PAWN_VALUE, QUEEN_VALUE};
    use crate::types::*;

    #[test]
    fn test_starting_position_material_balance() {
        let board = Board::starting_position();
        assert_eq!(
            evaluate_material(&board),
            0,
            "Starting position should have 0 material balance"
        );
    }

    #[test]
    fn test_white_up_queen() {
        let mut board = Board::starting_position();
        board.clear("d8".parse().unwrap());

        let score = evaluate_material(&board);
        assert_eq!(score, QUEEN_VALUE, "White should be exactly a queen up");
    }

    #[test]
    fn test_black_up_pawn() {
        let mut board = Board::starting_position();
        board.clear("e2".parse().unwrap());

        let score = evaluate_material(&board);
        assert_eq!(score, -PAWN_VALUE, "Score should be exactly negative pawn value");
    }

    #[test]
    fn test_kings_cancel_out() {
        let mut board = Board::empty();
        board.put("e1".parse().unwrap(), Piece::new(Color::White, PieceKind::King));
        board.put("e8".parse().unwrap(), Piece::new(Color::Black, PieceKind::King));
        assert_eq!(evaluate_material(&board), 0);
        assert_eq!(evaluate_material(&Board::empty()), 0, "Empty board should have 0 material");
    }
}
