//! Alpha-beta search (recursive, make/unmake on one scratch board)
//!
//! Every child position is produced with `make_move` on the searcher's scratch
//! board and taken back with `unmake_move` once the child returns, so a whole
//! search allocates no boards.

use super::ordering::order_moves;
use super::Searcher;
use crate::board::{make_move, unmake_move, Board};
use crate::constants::*;
use crate::evaluation::evaluate;
use crate::legal::{has_legal_move, legal_moves};
use crate::move_gen::is_in_check;
use crate::types::*;

impl Searcher {
    pub(super) fn alphabeta(
        &mut self,
        board: &mut Board,
        depth: u32,
        ply: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;
        let side = if maximizing { Color::White } else { Color::Black };

        // Mate and stalemate take precedence over the depth cutoff.
        if depth == 0 {
            if !has_legal_move(board, side) {
                return terminal_score(board, side, ply);
            }
            return evaluate(board);
        }

        let mut moves = legal_moves(board, side);
        if moves.is_empty() {
            return terminal_score(board, side, ply);
        }

        order_moves(&mut moves);
        moves.truncate(self.config.max_branching.max(1));

        let mut best = if maximizing { -AB_INF } else { AB_INF };
        for mv in &moves {
            let undo = make_move(board, mv.from, mv.to);
            let score = self.alphabeta(board, depth - 1, ply + 1, !maximizing, alpha, beta);
            unmake_move(board, undo);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Score for a side with no legal moves, from White's point of view
fn terminal_score(board: &Board, side: Color, ply: i32) -> i32 {
    if is_in_check(board, side) {
        // The side to move is mated; the other side wins.
        -side.sign() * (MATE_SCORE - ply)
    } else {
        0
    }
}
