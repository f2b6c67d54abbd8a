//! Engine move selection
//!
//! The top-level policy run once per engine turn:
//!
//! 1. While fewer than `OPENING_BOOK_PLIES` plies have been played, choose
//!    among developing moves (see `opening`) with the injected random source.
//! 2. Otherwise take the first `root_candidates` legal moves after ordering,
//!    apply each one and search the result at the depth for the game phase.
//!    Each raw score is adjusted for the engine's side by a tenth of the
//!    captured piece's value plus `THREAT_BONUS` for every distinct enemy piece
//!    the engine could capture in the resulting position. Forced-mate scores
//!    are left as they are, so a shorter mate always beats a longer one.
//! 3. Keep the best adjusted score for the engine; the first of equal scores
//!    wins, so this branch is deterministic.
//!
//! No legal moves means `None`. Deciding whether that ends the game is up to
//! the caller.

mod opening;

use std::collections::HashSet;

use rand::Rng;

use crate::board::{apply_move, Board};
use crate::constants::*;
use crate::evaluation::game_phase;
use crate::legal::legal_moves;
use crate::search::{order_moves, SearchConfig, Searcher};
use crate::types::*;

/// Choose the engine's move for `side`
///
/// # Arguments
///
/// * `board` - Current position
/// * `side` - The engine's color (side to move)
/// * `history_len` - Plies already played in the game
/// * `phase_hint` - Phase to size the search by; computed from `board` when `None`
/// * `config` - Search tuning
/// * `rng` - Random source for the opening choice
///
/// # Examples
///
/// ```rust
/// use chess_engine::board::Board;
/// use chess_engine::search::SearchConfig;
/// use chess_engine::selector::select_engine_move;
/// use chess_engine::types::Color;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let board = Board::starting_position();
/// let mv = select_engine_move(&board, Color::White, 0, None, &SearchConfig::default(), &mut rng);
/// assert!(mv.is_some());
/// ```
pub fn select_engine_move<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    history_len: usize,
    phase_hint: Option<GamePhase>,
    config: &SearchConfig,
    rng: &mut R,
) -> Option<Move> {
    let mut moves = legal_moves(board, side);
    if moves.is_empty() {
        tracing::debug!("[ENGINE] {} has no legal moves", side);
        return None;
    }

    let mut searcher = Searcher::new(*config);

    if history_len < OPENING_BOOK_PLIES {
        if let Some(mv) = opening::choose_book_move(board, side, &moves, &mut searcher, rng) {
            return Some(mv);
        }
    }

    let phase = phase_hint.unwrap_or_else(|| game_phase(board));
    let depth = config.depth_for(phase);

    order_moves(&mut moves);
    moves.truncate(config.root_candidates.max(1));

    let mut best: Option<(Move, i32)> = None;
    for mv in moves {
        let child = apply_move(board, mv.from, mv.to);
        let raw = searcher.minimax(
            &child,
            depth,
            side.opposite().is_maximizing(),
            -AB_INF,
            AB_INF,
        );
        let score = if raw.abs() >= MATE_BOUND {
            raw
        } else {
            raw + side.sign() * heuristic_bonus(&child, side, &mv)
        };

        let better = match best {
            Some((_, best_score)) => score * side.sign() > best_score * side.sign(),
            None => true,
        };
        if better {
            best = Some((mv, score));
        }
    }

    let stats = searcher.stats();
    if let Some((mv, score)) = best {
        tracing::debug!(
            "[ENGINE] {} plays {} (score {}, {} phase, depth {}, {} nodes, {} cutoffs)",
            side,
            mv,
            score,
            phase,
            depth,
            stats.nodes,
            stats.cutoffs
        );
    }

    best.map(|(mv, _)| mv)
}

/// Capture and threat bonus for the engine, always non-negative
fn heuristic_bonus(child: &Board, side: Color, mv: &Move) -> i32 {
    let capture = mv.captured.map_or(0, |p| p.value() / CAPTURE_BONUS_DIVISOR);

    let threatened: HashSet<Square> = legal_moves(child, side)
        .into_iter()
        .filter(Move::is_capture)
        .map(|m| m.to)
        .collect();

    capture + THREAT_BONUS * threatened.len() as i32
}
