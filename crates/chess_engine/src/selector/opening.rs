//! Opening heuristics
//!
//! Early in the game the engine does not run its full search. It picks among
//! a handful of developing moves instead, so games do not always open with the
//! same line:
//!
//! - d- and e-pawn pushes (single or double), c- and f-pawn single pushes
//! - knights to c3 / f3 (c6 / f6 for Black)
//! - bishops to c4, b5, e2 or d3 (rank-mirrored for Black)
//!
//! Queen and king moves never qualify.

use rand::Rng;

use crate::board::{apply_move, Board};
use crate::constants::*;
use crate::search::Searcher;
use crate::types::*;

/// Knight squares, from White's side (rank, file)
const KNIGHT_SQUARES: [(u8, u8); 2] = [(2, 2), (2, 5)];

/// Bishop squares, from White's side (rank, file)
const BISHOP_SQUARES: [(u8, u8); 4] = [
    (3, 2), // c4
    (4, 1), // b5
    (1, 4), // e2
    (2, 3), // d3
];

/// Whether a move is one of the developing moves listed above
pub(crate) fn is_book_move(mv: &Move) -> bool {
    let color = mv.piece.color;
    let to = (mv.to.relative_rank(color), mv.to.file());

    match mv.piece.kind {
        PieceKind::Pawn => {
            if mv.is_capture() {
                return false;
            }
            let distance = mv.to.rank().abs_diff(mv.from.rank());
            match mv.from.file() {
                3 | 4 => true,
                2 | 5 => distance == 1,
                _ => false,
            }
        }
        PieceKind::Knight => KNIGHT_SQUARES.contains(&to),
        PieceKind::Bishop => BISHOP_SQUARES.contains(&to),
        PieceKind::Rook | PieceKind::Queen | PieceKind::King => false,
    }
}

/// Pick a developing move among `moves`, or `None` if none qualify
///
/// Candidates are scored with a shallow search; any candidate within
/// `OPENING_MARGIN` of the best is eligible, and `rng` picks one of them.
pub(crate) fn choose_book_move<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    moves: &[Move],
    searcher: &mut Searcher,
    rng: &mut R,
) -> Option<Move> {
    let scored: Vec<(Move, i32)> = moves
        .iter()
        .filter(|mv| is_book_move(mv))
        .map(|&mv| {
            let child = apply_move(board, mv.from, mv.to);
            let score = searcher.minimax(
                &child,
                OPENING_SEARCH_DEPTH,
                side.opposite().is_maximizing(),
                -AB_INF,
                AB_INF,
            );
            // From the engine's point of view
            (mv, score * side.sign())
        })
        .collect();

    let best = scored.iter().map(|&(_, score)| score).max()?;
    let eligible: Vec<Move> = scored
        .into_iter()
        .filter(|&(_, score)| score >= best - OPENING_MARGIN)
        .map(|(mv, _)| mv)
        .collect();

    let pick = eligible[rng.random_range(0..eligible.len())];
    tracing::debug!(
        "[ENGINE] book move {} chosen from {} eligible candidates",
        pick,
        eligible.len()
    );
    Some(pick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legal::legal_moves;
    use crate::search::SearchConfig;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn book_moves(board: &Board, color: Color) -> Vec<String> {
        legal_moves(board, color)
            .into_iter()
            .filter(is_book_move)
            .map(|m| m.to_string())
            .collect()
    }

    #[test]
    fn test_white_book_moves_from_start() {
        let moves = book_moves(&Board::starting_position(), Color::White);
        assert_eq!(
            moves,
            ["b1c3", "g1f3", "c2c3", "d2d3", "d2d4", "e2e3", "e2e4", "f2f3"]
        );
    }

    #[test]
    fn test_black_book_moves_are_mirrored() {
        let moves = book_moves(&Board::starting_position(), Color::Black);
        assert_eq!(
            moves,
            ["c7c6", "d7d6", "d7d5", "e7e6", "e7e5", "f7f6", "b8c6", "g8f6"]
        );
    }

    #[test]
    fn test_queen_and_king_moves_never_qualify() {
        let queen = Move::new(
            sq("d1"),
            sq("d3"),
            Piece::new(Color::White, PieceKind::Queen),
            None,
        );
        let king = Move::new(sq("e1"), sq("e2"), Piece::new(Color::White, PieceKind::King), None);
        assert!(!is_book_move(&queen));
        assert!(!is_book_move(&king));
    }

    #[test]
    fn test_bishop_development_square() {
        let to_c4 = Move::new(sq("f1"), sq("c4"), Piece::new(Color::White, PieceKind::Bishop), None);
        let to_c5 = Move::new(sq("f8"), sq("c5"), Piece::new(Color::Black, PieceKind::Bishop), None);
        let to_a6 = Move::new(sq("f1"), sq("a6"), Piece::new(Color::White, PieceKind::Bishop), None);
        assert!(is_book_move(&to_c4));
        assert!(is_book_move(&to_c5));
        assert!(!is_book_move(&to_a6));

        for (from, to) in [("c1", "f4"), ("c1", "g5"), ("c1", "d2"), ("c1", "e3")] {
            let mv = Move::new(sq(from), sq(to), Piece::new(Color::White, PieceKind::Bishop), None);
            assert!(!is_book_move(&mv), "{mv} should not be a developing move");
        }
    }

    #[test]
    fn test_choose_book_move_is_seeded() {
        let board = Board::starting_position();
        let moves = legal_moves(&board, Color::White);
        let mut searcher = Searcher::new(SearchConfig::default());

        let first = choose_book_move(&board, Color::White, &moves, &mut searcher, &mut SmallRng::seed_from_u64(7));
        let again = choose_book_move(&board, Color::White, &moves, &mut searcher, &mut SmallRng::seed_from_u64(7));
        assert_eq!(first, again, "same seed, same move");

        let pick = first.unwrap();
        assert!(is_book_move(&pick));
    }

    #[test]
    fn test_no_book_candidates_returns_none() {
        let board = Board::from_rows(&[
            "....k...", "........", "........", "........", "........", "........", "........",
            "Q...K...",
        ])
        .unwrap();
        let moves = legal_moves(&board, Color::White);
        let mut searcher = Searcher::new(SearchConfig::default());
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(choose_book_move(&board, Color::White, &moves, &mut searcher, &mut rng), None);
    }
}
