//! Minimax search with alpha-beta pruning
//!
//! This module implements the engine's search:
//! - Minimax over legal moves, White maximizing and Black minimizing
//! - Alpha-beta pruning with a cutoff once `beta <= alpha`
//! - Capture-first move ordering
//! - A per-node branching cap: only the first `max_branching` ordered moves
//!   are searched. Configurable, never disabled.
//!
//! ## Terminal nodes
//!
//! A side with no legal moves is either mated (in check) or stalemated. Mate
//! scores `MATE_SCORE - ply` for the winner, where `ply` is the distance from
//! the search root, so a shorter forced mate always beats a longer one.
//! Stalemate scores 0. This test runs before the depth-0 cutoff, so a
//! stalemated leaf never falls through to the static evaluation.
//!
//! ## Module Organization
//!
//! - `alphabeta` - The recursive search on one scratch board
//! - `ordering` - Move ordering heuristics

mod alphabeta;
mod ordering;

pub use ordering::order_moves;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::*;
use crate::types::GamePhase;

/// Search tuning knobs
///
/// Depths count plies below a root move: the move selector applies each
/// candidate first and then searches the resulting position this deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Moves searched per node after ordering
    pub max_branching: usize,
    /// Root moves the selector considers outside the opening
    pub root_candidates: usize,
    pub depth_opening: u32,
    pub depth_middlegame: u32,
    pub depth_endgame: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_branching: DEFAULT_MAX_BRANCHING,
            root_candidates: DEFAULT_ROOT_CANDIDATES,
            depth_opening: DEFAULT_DEPTH_OPENING,
            depth_middlegame: DEFAULT_DEPTH_MIDDLEGAME,
            depth_endgame: DEFAULT_DEPTH_ENDGAME,
        }
    }
}

impl SearchConfig {
    /// Search depth for a game phase
    pub fn depth_for(&self, phase: GamePhase) -> u32 {
        match phase {
            GamePhase::Opening => self.depth_opening,
            GamePhase::Middlegame => self.depth_middlegame,
            GamePhase::Endgame => self.depth_endgame,
        }
    }
}

/// Node and cutoff counters for one searcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Runs minimax searches with a fixed configuration and accumulates stats
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Searcher {
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters accumulated over every search run by this searcher
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score `board` to `depth` plies; positive favors White
    ///
    /// `maximizing` is true when White is to move. The board is copied once
    /// into a scratch buffer; the caller's board is never modified.
    pub fn minimax(&mut self, board: &Board, depth: u32, maximizing: bool, alpha: i32, beta: i32) -> i32 {
        let mut scratch = *board;
        self.alphabeta(&mut scratch, depth, 0, maximizing, alpha, beta)
    }
}

/// Minimax search with the default configuration
///
/// # Arguments
///
/// * `board` - Position to score
/// * `depth` - Plies to search
/// * `maximizing` - True when White is to move
/// * `alpha`, `beta` - Search window, usually `-AB_INF` and `AB_INF`
///
/// # Examples
///
/// ```rust
/// use chess_engine::board::Board;
/// use chess_engine::constants::AB_INF;
/// use chess_engine::search::minimax;
///
/// let score = minimax(&Board::starting_position(), 1, true, -AB_INF, AB_INF);
/// assert!(score.abs() < 100);
/// ```
pub fn minimax(board: &Board, depth: u32, maximizing: bool, alpha: i32, beta: i32) -> i32 {
    Searcher::new(SearchConfig::default()).minimax(board, depth, maximizing, alpha, beta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_branching, 30);
        assert_eq!(config.root_candidates, 40);
        assert_eq!(config.depth_for(GamePhase::Opening), 2);
        assert_eq!(config.depth_for(GamePhase::Middlegame), 2);
        assert_eq!(config.depth_for(GamePhase::Endgame), 3);
    }

    #[test]
    fn test_config_json_fills_missing_fields() {
        let config: SearchConfig = serde_json::from_str(r#"{ "depth_endgame": 5 }"#).unwrap();
        assert_eq!(config.depth_endgame, 5);
        assert_eq!(config.max_branching, DEFAULT_MAX_BRANCHING);

        let json = serde_json::to_string(&SearchConfig::default()).unwrap();
        assert!(json.contains("\"root_candidates\":40"));
    }
}
