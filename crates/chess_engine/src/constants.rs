//! # Chess Engine Constants - Evaluation Values & Search Parameters
//!
//! ## Overview
//!
//! This module centralizes the constant values used throughout the engine: piece
//! valuations (in centipawns), movement direction vectors, the starting layout,
//! game-phase thresholds and the default search tuning parameters.
//!
//! ## Centipawn Valuation System
//!
//! Scores are integers in centipawns (1/100th of a pawn):
//!
//! - **Pawn**: 100
//! - **Knight**: 320
//! - **Bishop**: 330
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: 20,000 (more than all other material combined)
//!
//! Both kings are always counted, so their material cancels out in any position
//! reachable from the starting setup. The positive sign favors White.
//!
//! ## Mate Scores
//!
//! A side with no legal moves while in check is mated. The search scores that node
//! as `MATE_SCORE - ply` from the winner's point of view, where `ply` is the
//! distance from the search root. `MATE_SCORE` sits far above any material swing
//! the evaluator can produce in practice, and the ply term makes a shorter forced
//! mate strictly preferable to a longer one.
//!
//! ## Direction Vectors for Move Generation
//!
//! Movement is encoded as `(rank, file)` deltas rather than 1-D index offsets, so
//! edge handling is a plain bounds check on both coordinates and no wrap-around
//! detection is needed:
//!
//! - **Orthogonal**: north `(1, 0)`, east `(0, 1)`, south `(-1, 0)`, west `(0, -1)`
//! - **Diagonal**: `(1, 1)`, `(1, -1)`, `(-1, 1)`, `(-1, -1)`
//! - **Knight**: the eight `(±1, ±2)` / `(±2, ±1)` jumps
//!
//! "North" is toward rank 8, i.e. White's forward direction.

pub const PAWN_ID: i8 = 1;
pub const KNIGHT_ID: i8 = 2;
pub const BISHOP_ID: i8 = 3;
pub const ROOK_ID: i8 = 4;
pub const QUEEN_ID: i8 = 5;
pub const KING_ID: i8 = 6;

pub const W_PAWN: i8 = PAWN_ID;
pub const W_KNIGHT: i8 = KNIGHT_ID;
pub const W_BISHOP: i8 = BISHOP_ID;
pub const W_ROOK: i8 = ROOK_ID;
pub const W_QUEEN: i8 = QUEEN_ID;
pub const W_KING: i8 = KING_ID;

pub const B_PAWN: i8 = -PAWN_ID;
pub const B_KNIGHT: i8 = -KNIGHT_ID;
pub const B_BISHOP: i8 = -BISHOP_ID;
pub const B_ROOK: i8 = -ROOK_ID;
pub const B_QUEEN: i8 = -QUEEN_ID;
pub const B_KING: i8 = -KING_ID;

/// Orthogonal rays first, then diagonal; indexes into the ray tables.
pub const RAY_DIRS: [(i8, i8); 8] = [
    (1, 0), (0, 1), (-1, 0), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];
pub const KING_DIRS: [(i8, i8); 8] = RAY_DIRS;
pub const KNIGHT_DIRS: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (-1, 2), (1, -2), (-1, -2),
];

pub const VOID_VALUE: i32 = 0;
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 20_000;

pub const FIGURE_VALUE: [i32; KING_ID as usize + 1] = [
    VOID_VALUE,
    PAWN_VALUE,
    KNIGHT_VALUE,
    BISHOP_VALUE,
    ROOK_VALUE,
    QUEEN_VALUE,
    KING_VALUE,
];

/// Search window bound; larger than any reachable evaluation.
pub const AB_INF: i32 = 1_000_000;
pub const MATE_SCORE: i32 = 10_000;
/// Scores at least this far from zero are forced mates.
pub const MATE_BOUND: i32 = MATE_SCORE - 1_000;

/// Index 0 is a1, index 63 is h8 (rank-major).
#[rustfmt::skip]
pub const SETUP: [i8; 64] = [
    W_ROOK, W_KNIGHT, W_BISHOP, W_QUEEN, W_KING, W_BISHOP, W_KNIGHT, W_ROOK,
    W_PAWN, W_PAWN, W_PAWN, W_PAWN, W_PAWN, W_PAWN, W_PAWN, W_PAWN,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    B_PAWN, B_PAWN, B_PAWN, B_PAWN, B_PAWN, B_PAWN, B_PAWN, B_PAWN,
    B_ROOK, B_KNIGHT, B_BISHOP, B_QUEEN, B_KING, B_BISHOP, B_KNIGHT, B_ROOK,
];

// Game phase thresholds on total piece count, kings included.
pub const OPENING_PIECE_THRESHOLD: usize = 28;
pub const ENDGAME_PIECE_THRESHOLD: usize = 12;
pub const KING_CENTER_WEIGHT: i32 = 5;

pub const DEFAULT_MAX_BRANCHING: usize = 30;
pub const DEFAULT_ROOT_CANDIDATES: usize = 40;
pub const DEFAULT_DEPTH_OPENING: u32 = 2;
pub const DEFAULT_DEPTH_MIDDLEGAME: u32 = 2;
pub const DEFAULT_DEPTH_ENDGAME: u32 = 3;

/// Plies of history below which the opening heuristic is consulted.
pub const OPENING_BOOK_PLIES: usize = 8;
pub const OPENING_SEARCH_DEPTH: u32 = 1;
/// Book candidates within this many centipawns of the best one are eligible.
pub const OPENING_MARGIN: i32 = 25;

pub const CAPTURE_BONUS_DIVISOR: i32 = 10;
pub const THREAT_BONUS: i32 = 5;
