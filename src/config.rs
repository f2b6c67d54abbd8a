//! Engine and session configuration
//!
//! Loaded from a JSON file with `--config`; every field is optional and falls
//! back to its default. Command-line flags override the loaded values.
//!
//! ```json
//! {
//!   "search": { "max_branching": 30, "depth_endgame": 3 },
//!   "validation": "legal",
//!   "think_delay_ms": 500,
//!   "seed": 7
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use chess_engine::api::MoveValidation;
use chess_engine::search::SearchConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchConfig,
    /// Policy for moves typed by the human player
    pub validation: MoveValidation,
    /// Pause before the engine's move is shown; cosmetic only
    pub think_delay_ms: u64,
    /// Seed for the opening choice; random when unset
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            search: SearchConfig::default(),
            validation: MoveValidation::default(),
            think_delay_ms: 500,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Read a configuration file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "validation": "legal", "search": { "depth_endgame": 4 } }"#).unwrap();
        assert_eq!(config.validation, MoveValidation::Legal);
        assert_eq!(config.search.depth_endgame, 4);
        assert_eq!(config.search.max_branching, 30);
        assert_eq!(config.think_delay_ms, 500);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/folio-chess.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("folio-chess-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "think_delay_ms": 0, "seed": 11 }"#).unwrap();
        let config = EngineConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.think_delay(), Duration::ZERO);
        assert_eq!(config.seed, Some(11));
    }
}
