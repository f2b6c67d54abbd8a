//! Position evaluation with piece-square tables
//!
//! Evaluates chess positions using:
//! - Material count (piece values)
//! - Positional bonuses (piece-square tables)
//! - King centralisation in the endgame
//!
//! Scores are centipawns, positive favors White. The search maximizes for White
//! and minimizes for Black, so this sign convention must never flip.
//!
//! The game phase is returned alongside the score rather than kept anywhere;
//! callers that want it for search depth take it from [`evaluate_with_phase`] or
//! [`game_phase`].
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square tables for positional evaluation
//! - `material` - Material balance evaluation
//! - `position` - Full position evaluation and phase classification

mod material;
mod position;
mod pst;

pub use material::evaluate_material;
pub use position::{evaluate, evaluate_with_phase, game_phase};
