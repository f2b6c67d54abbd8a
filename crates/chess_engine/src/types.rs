//! # Chess Engine Core Types
//!
//! Value types shared by every layer of the engine: colors, piece kinds, pieces,
//! squares, moves and the derived game phase.
//!
//! ## Coordinates
//!
//! A [`Square`] is a `(rank, file)` pair with both coordinates in `0..8`. Rank 0 is
//! White's back rank ("rank 1" in algebraic notation) and file 0 is the a-file, so
//! `Square::new(1, 4)` is `e2`. The linear index used by [`crate::board::Board`] is
//! `rank * 8 + file`, which makes the board's scan order rank-major, file-minor.
//!
//! ## Piece Encoding
//!
//! Inside the board a piece is a signed byte: the magnitude is the kind
//! (1 = pawn .. 6 = king) and the sign is the color (positive = White). This module
//! converts between that compact form and the typed [`Piece`]. For text, the
//! historical letter-case convention is kept: `P N B R Q K` are White,
//! `p n b r q k` are Black.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for White, -1 for Black; the evaluator's sign convention
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// White maximizes the evaluation, Black minimizes it
    pub fn is_maximizing(self) -> bool {
        self == Color::White
    }

    pub(crate) fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub(crate) fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Kind of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value in centipawns
    pub fn value(self) -> i32 {
        FIGURE_VALUE[self.id() as usize]
    }

    pub(crate) fn id(self) -> i8 {
        match self {
            PieceKind::Pawn => PAWN_ID,
            PieceKind::Knight => KNIGHT_ID,
            PieceKind::Bishop => BISHOP_ID,
            PieceKind::Rook => ROOK_ID,
            PieceKind::Queen => QUEEN_ID,
            PieceKind::King => KING_ID,
        }
    }

    pub(crate) fn from_id(id: i8) -> Option<PieceKind> {
        match id {
            PAWN_ID => Some(PieceKind::Pawn),
            KNIGHT_ID => Some(PieceKind::Knight),
            BISHOP_ID => Some(PieceKind::Bishop),
            ROOK_ID => Some(PieceKind::Rook),
            QUEEN_ID => Some(PieceKind::Queen),
            KING_ID => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter (`p`, `n`, `b`, `r`, `q`, `k`)
    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A colored piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    /// Parse a letter; uppercase is White, lowercase is Black
    pub fn from_char(c: char) -> Option<Piece> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }

    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn value(self) -> i32 {
        self.kind.value()
    }

    pub(crate) fn encode(self) -> i8 {
        match self.color {
            Color::White => self.kind.id(),
            Color::Black => -self.kind.id(),
        }
    }

    pub(crate) fn decode(code: i8) -> Option<Piece> {
        let kind = PieceKind::from_id(code.abs())?;
        let color = if code > 0 { Color::White } else { Color::Black };
        Some(Piece { color, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Board coordinate, `rank` and `file` both in `0..8`
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Build a square from in-range coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..8`. Use [`Square::try_new`] for
    /// untrusted input.
    pub const fn new(rank: u8, file: u8) -> Self {
        assert!(rank < 8 && file < 8, "square coordinates out of range");
        Square { rank, file }
    }

    pub fn try_new(rank: i32, file: i32) -> ChessEngineResult<Self> {
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Ok(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            Err(ChessEngineError::InvalidSquare { rank, file })
        }
    }

    /// # Panics
    ///
    /// Panics if `index >= 64`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < 64, "square index {index} out of range");
        Square {
            rank: (index / 8) as u8,
            file: (index % 8) as u8,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    /// Step by a `(rank, file)` delta, `None` past the board edge
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Same file, rank flipped (a1 <-> a8)
    pub fn flipped(self) -> Square {
        Square {
            rank: 7 - self.rank,
            file: self.file,
        }
    }

    /// Rank counted from `color`'s own back rank
    pub fn relative_rank(self, color: Color) -> u8 {
        match color {
            Color::White => self.rank,
            Color::Black => 7 - self.rank,
        }
    }

    /// All 64 squares in scan order (rank-major, file-minor)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FromStr for Square {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessEngineError::InvalidSquareName {
            name: s.to_string(),
        };
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square::new(rank - b'1', file - b'a'))
    }
}

/// A move as a value object: origin, destination, the mover and what it takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Coarse game stage derived from remaining material
///
/// Never stored on the board; the evaluator computes it and the move selector
/// uses it to pick a search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Opening => write!(f, "opening"),
            GamePhase::Middlegame => write!(f, "middlegame"),
            GamePhase::Endgame => write!(f, "endgame"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_algebraic_round_trip() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!(e2.rank(), 1);
        assert_eq!(e2.file(), 4);
        assert_eq!(e2.to_string(), "e2");
        assert_eq!(e2.index(), 12);
        assert_eq!(Square::from_index(63).to_string(), "h8");
    }

    #[test]
    fn test_square_rejects_bad_names() {
        for name in ["", "e", "e9", "i1", "e22", "11"] {
            assert!(
                matches!(
                    name.parse::<Square>(),
                    Err(ChessEngineError::InvalidSquareName { .. })
                ),
                "{name:?} should not parse"
            );
        }
    }

    #[test]
    fn test_square_try_new_bounds() {
        assert!(Square::try_new(7, 7).is_ok());
        assert_eq!(
            Square::try_new(8, 0),
            Err(ChessEngineError::InvalidSquare { rank: 8, file: 0 })
        );
        assert!(Square::try_new(0, -1).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_square_new_fails_fast() {
        let _ = Square::new(3, 8);
    }

    #[test]
    fn test_square_offset_stops_at_edges() {
        let a1 = Square::new(0, 0);
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(1, 1), Some(Square::new(1, 1)));
    }

    #[test]
    fn test_piece_letter_case_encodes_color() {
        let white_knight = Piece::from_char('N').unwrap();
        assert_eq!(white_knight, Piece::new(Color::White, PieceKind::Knight));
        let black_queen = Piece::from_char('q').unwrap();
        assert_eq!(black_queen.color, Color::Black);
        assert_eq!(black_queen.to_char(), 'q');
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn test_piece_encode_decode() {
        for kind in PieceKind::ALL {
            for color in [Color::White, Color::Black] {
                let piece = Piece::new(color, kind);
                assert_eq!(Piece::decode(piece.encode()), Some(piece));
            }
        }
        assert_eq!(Piece::decode(0), None);
    }

    #[test]
    fn test_material_values() {
        assert_eq!(PieceKind::Pawn.value(), 100);
        assert_eq!(PieceKind::Knight.value(), 320);
        assert_eq!(PieceKind::Bishop.value(), 330);
        assert_eq!(PieceKind::Rook.value(), 500);
        assert_eq!(PieceKind::Queen.value(), 900);
        assert_eq!(PieceKind::King.value(), 20_000);
    }
}
