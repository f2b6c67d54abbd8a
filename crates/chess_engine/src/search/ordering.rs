//! Move ordering for alpha-beta pruning
//!
//! Orders moves to maximize alpha-beta pruning efficiency by trying captures
//! first. Among captures the most valuable victim comes first, and for equal
//! victims the least valuable attacker (MVV-LVA). Quiet moves keep their
//! generation order, since the sort is stable.

use std::cmp::Reverse;

use crate::types::*;

/// Order moves for better alpha-beta pruning
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| match mv.captured {
        Some(victim) => (0, Reverse(victim.value()), mv.piece.value()),
        None => (1, Reverse(0), 0),
    });
}
