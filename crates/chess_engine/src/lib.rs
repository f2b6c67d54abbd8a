//! # Chess Engine
//!
//! A small, synchronous chess engine: board model, pseudo-legal move
//! generation, check detection, legal move filtering, static evaluation and a
//! minimax alpha-beta search behind a move selector.
//!
//! ## Architecture
//!
//! ```text
//! selector  ->  search  ->  legal  ->  move_gen  ->  board / types
//!                  \-> evaluation
//! ```
//!
//! - [`types`] - Colors, pieces, squares, moves, game phase
//! - [`board`] - 64-square board, pure `apply_move`
//! - [`move_gen`] - Pseudo-legal moves and check detection
//! - [`legal`] - Moves that do not leave the mover in check
//! - [`evaluation`] - Material + piece-square tables, positive favors White
//! - [`search`] - Minimax with alpha-beta and a branching cap
//! - [`selector`] - Opening heuristics, then search over root candidates
//! - [`api`] - Caller-facing facade and the [`api::Game`] controller
//!
//! Every query takes a board by reference and returns new values; nothing in
//! the engine holds mutable state between calls. The opening choice is the only
//! random decision and its random source is passed in by the caller.
//!
//! ## Example
//!
//! ```rust
//! use chess_engine::api::{Game, MoveValidation};
//! use chess_engine::search::SearchConfig;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut game = Game::new(MoveValidation::Legal);
//! game.play("e2".parse().unwrap(), "e4".parse().unwrap()).unwrap();
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let reply = game.engine_move(&SearchConfig::default(), &mut rng);
//! assert!(reply.is_some());
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod legal;
pub mod move_gen;
pub mod search;
pub mod selector;
pub mod types;

pub use error::{ChessEngineError, ChessEngineResult};
