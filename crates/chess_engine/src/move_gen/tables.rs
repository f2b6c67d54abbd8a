//! Move table initialization
//!
//! Precomputes, for every square, the destinations a piece could reach on an
//! empty board: knight jumps, king steps, and one ray per sliding direction.
//! Occupancy is applied later by the per-piece generators.
//!
//! The tables are immutable and built once on first use behind a `OnceLock`, so
//! every board shares them and move generation stays a pure function of the
//! board.
//!
//! ## Ray layout
//!
//! `rays[square][dir]` lists squares in the direction `RAY_DIRS[dir]`, nearest
//! first, stopping at the board edge. Directions 0..4 are orthogonal (rook),
//! 4..8 diagonal (bishop).

use std::sync::OnceLock;

use crate::constants::*;
use crate::types::Square;

pub(crate) const ORTHOGONAL_RAYS: std::ops::Range<usize> = 0..4;
pub(crate) const DIAGONAL_RAYS: std::ops::Range<usize> = 4..8;

pub(crate) struct MoveTables {
    pub knight: [Vec<Square>; 64],
    pub king: [Vec<Square>; 64],
    pub rays: [[Vec<Square>; 8]; 64],
}

/// Shared move tables, built on first call
pub(crate) fn move_tables() -> &'static MoveTables {
    static TABLES: OnceLock<MoveTables> = OnceLock::new();
    TABLES.get_or_init(MoveTables::build)
}

impl MoveTables {
    fn build() -> Self {
        MoveTables {
            knight: std::array::from_fn(|idx| steps_from(Square::from_index(idx), &KNIGHT_DIRS)),
            king: std::array::from_fn(|idx| steps_from(Square::from_index(idx), &KING_DIRS)),
            rays: std::array::from_fn(|idx| {
                let from = Square::from_index(idx);
                std::array::from_fn(|dir| ray_from(from, RAY_DIRS[dir]))
            }),
        }
    }
}

/// Single-step destinations (knight, king)
fn steps_from(from: Square, dirs: &[(i8, i8)]) -> Vec<Square> {
    dirs.iter()
        .filter_map(|&(dr, df)| from.offset(dr, df))
        .collect()
}

/// Slide in one direction until the board edge
fn ray_from(from: Square, (dr, df): (i8, i8)) -> Vec<Square> {
    let mut ray = Vec::with_capacity(7);
    let mut current = from;
    while let Some(next) = current.offset(dr, df) {
        ray.push(next);
        current = next;
    }
    ray
}
