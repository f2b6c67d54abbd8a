//! Board representation and utilities
//!
//! The board is 64 signed bytes in rank-major order (index 0 = a1, 63 = h8).
//! Positive values are White pieces, negative values Black, zero is empty; the
//! magnitude is the piece kind. The whole board is `Copy` (64 bytes), so
//! "apply a move to a copy" is a plain memcpy.
//!
//! Two ways to change a position:
//! - [`apply_move`] returns a new board and leaves the input untouched. This is
//!   what callers use.
//! - [`make_move`] / [`unmake_move`] mutate one scratch board in place and
//!   restore it from an [`UndoInfo`] record. The legality filter and the search
//!   use these to avoid copying a board per node.

use std::fmt;

use crate::constants::SETUP;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [i8; 64],
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl Board {
    /// A board with no pieces
    pub const fn empty() -> Self {
        Board { squares: [0; 64] }
    }

    /// Standard starting setup
    pub const fn starting_position() -> Self {
        Board { squares: SETUP }
    }

    /// Build a board from eight text rows, rank 8 first.
    ///
    /// Each row has exactly eight characters: a piece letter (uppercase White,
    /// lowercase Black) or `.` for an empty square.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_engine::board::Board;
    ///
    /// let board = Board::from_rows(&[
    ///     ".......k",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "....K...",
    /// ])
    /// .unwrap();
    /// assert_eq!(board.piece_count(), 2);
    /// ```
    pub fn from_rows(rows: &[&str; 8]) -> ChessEngineResult<Self> {
        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != 8 {
                return Err(ChessEngineError::InvalidBoardLayout {
                    message: format!("row {} has {} squares, expected 8", row_idx + 1, chars.len()),
                });
            }
            let rank = 7 - row_idx as u8;
            for (file, c) in chars.into_iter().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_char(c).ok_or_else(|| ChessEngineError::InvalidBoardLayout {
                    message: format!("unknown piece letter {c:?}"),
                })?;
                board.put(Square::new(rank, file as u8), piece);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        Piece::decode(self.squares[square.index()])
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()] == 0
    }

    /// Whether `square` holds a piece of `color`
    #[inline]
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        let code = self.squares[square.index()];
        match color {
            Color::White => code > 0,
            Color::Black => code < 0,
        }
    }

    pub fn put(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = piece.encode();
    }

    pub fn clear(&mut self, square: Square) {
        self.squares[square.index()] = 0;
    }

    /// Occupied squares in scan order
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, &code)| Piece::decode(code).map(|p| (Square::from_index(idx), p)))
    }

    /// Squares holding `color`'s pieces, in scan order
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|&&code| code != 0).count()
    }

    /// First king of `color` in scan order, if any
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let code = Piece::new(color, PieceKind::King).encode();
        self.squares
            .iter()
            .position(|&c| c == code)
            .map(Square::from_index)
    }

    /// Swap every piece's color and flip ranks
    pub fn mirrored(&self) -> Board {
        let mut mirrored = Board::empty();
        for (square, piece) in self.occupied() {
            mirrored.put(
                square.flipped(),
                Piece::new(piece.color.opposite(), piece.kind),
            );
        }
        mirrored
    }
}

/// Color of a piece
#[inline]
pub fn color_of(piece: Piece) -> Color {
    piece.color
}

/// Information needed to undo a move
#[derive(Debug, Clone, Copy)]
pub(crate) struct UndoInfo {
    from: Square,
    to: Square,
    moved: i8,
    captured: i8,
}

/// Make a move on the board (returns undo information)
///
/// # Panics
///
/// Panics if `from` is empty.
pub(crate) fn make_move(board: &mut Board, from: Square, to: Square) -> UndoInfo {
    let moved = board.squares[from.index()];
    assert!(moved != 0, "no piece to move on {from}");
    let undo = UndoInfo {
        from,
        to,
        moved,
        captured: board.squares[to.index()],
    };

    board.squares[to.index()] = moved;
    board.squares[from.index()] = 0;

    undo
}

/// Unmake a move on the board
pub(crate) fn unmake_move(board: &mut Board, undo: UndoInfo) {
    board.squares[undo.from.index()] = undo.moved;
    board.squares[undo.to.index()] = undo.captured;
}

/// Return a new board with the piece on `from` moved to `to`
///
/// Whatever stood on `to` is removed. No legality check is made; callers are
/// expected to pick `to` from [`crate::legal::legal_moves`] (or the pseudo-legal
/// set, depending on their validation policy).
///
/// # Panics
///
/// Panics if `from` is empty.
pub fn apply_move(board: &Board, from: Square, to: Square) -> Board {
    let mut next = *board;
    make_move(&mut next, from, to);
    next
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self
                    .piece_at(Square::new(rank, file))
                    .map_or('.', Piece::to_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(
            board.piece_at(sq("e1")),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(sq("d8")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.find_king(Color::Black), Some(sq("e8")));
    }

    #[test]
    fn test_from_rows_matches_setup() {
        let board = Board::from_rows(&[
            "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ])
        .unwrap();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        let short = Board::from_rows(&[
            "rnbqkbn", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ]);
        assert!(matches!(
            short,
            Err(ChessEngineError::InvalidBoardLayout { .. })
        ));

        let bad_letter = Board::from_rows(&[
            "rnbqkbnx", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ]);
        assert!(bad_letter.is_err());
    }

    #[test]
    fn test_apply_move_is_pure() {
        let board = Board::starting_position();
        let next = apply_move(&board, sq("e2"), sq("e4"));
        assert_eq!(board.piece_at(sq("e2")).map(|p| p.kind), Some(PieceKind::Pawn));
        assert!(next.is_empty(sq("e2")));
        assert_eq!(next.piece_at(sq("e4")).map(color_of), Some(Color::White));
    }

    #[test]
    fn test_make_unmake_restores_capture() {
        let mut board = Board::starting_position();
        board.put(sq("d3"), Piece::new(Color::Black, PieceKind::Knight));
        let before = board;

        let undo = make_move(&mut board, sq("e2"), sq("d3"));
        assert_eq!(board.piece_count(), before.piece_count() - 1);
        unmake_move(&mut board, undo);

        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "no piece to move")]
    fn test_apply_move_from_empty_square_panics() {
        let board = Board::starting_position();
        let _ = apply_move(&board, sq("e4"), sq("e5"));
    }

    #[test]
    fn test_mirrored_swaps_colors_and_ranks() {
        let board = Board::starting_position();
        assert_eq!(board.mirrored(), board);

        let mut lone = Board::empty();
        lone.put(sq("b2"), Piece::new(Color::White, PieceKind::Knight));
        let mirrored = lone.mirrored();
        assert_eq!(
            mirrored.piece_at(sq("b7")),
            Some(Piece::new(Color::Black, PieceKind::Knight))
        );
        assert_eq!(mirrored.piece_count(), 1);
    }

    #[test]
    fn test_display_draws_rank_eight_first() {
        let text = Board::starting_position().to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "8  r n b q k b n r");
        assert!(text.ends_with("a b c d e f g h"));
    }
}
