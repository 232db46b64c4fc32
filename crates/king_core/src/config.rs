//! Game and search configuration.
//!
//! Degenerate values are rejected when a config is built or loaded, never
//! discovered halfway through a search.
//!
//! ```toml
//! rows = 8
//! cols = 8
//! visibility = "visible"
//!
//! [search]
//! depth = 8
//! win_score = 1000000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Visibility;
use crate::error::{KingError, KingResult};
use crate::eval::WIN;
use crate::types::{MAX_BOARD_SIDE, MAX_MOBILITY, MIN_BOARD_SIDE};

/// Default board size.
pub const DEFAULT_ROWS: i32 = 8;
pub const DEFAULT_COLS: i32 = 8;
/// Default fixed search depth in plies.
pub const DEFAULT_DEPTH: u8 = 8;

/// Parameters of a single fixed-depth search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search depth in plies (half-moves)
    pub depth: u8,
    /// Magnitude of the WIN/LOSS sentinels
    pub win_score: i32,
}

impl SearchConfig {
    pub fn new(depth: u8, win_score: i32) -> KingResult<Self> {
        let config = Self { depth, win_score };
        config.validate()?;
        Ok(config)
    }

    /// Default sentinels with the given depth.
    pub fn depth(depth: u8) -> KingResult<Self> {
        Self::new(depth, WIN)
    }

    pub fn validate(&self) -> KingResult<()> {
        if self.depth == 0 {
            return Err(KingError::InvalidDepth(self.depth));
        }
        // Mobility differential lies in [-MAX_MOBILITY, MAX_MOBILITY]
        if self.win_score <= MAX_MOBILITY {
            return Err(KingError::SentinelTooSmall(self.win_score));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            win_score: WIN,
        }
    }
}

/// Board and search settings for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: i32,
    pub cols: i32,
    pub visibility: Visibility,
    pub search: SearchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            visibility: Visibility::Visible,
            search: SearchConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> KingResult<()> {
        let side = MIN_BOARD_SIDE..=MAX_BOARD_SIDE;
        if !side.contains(&self.rows) || !side.contains(&self.cols) {
            return Err(KingError::InvalidBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.search.validate()
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> KingResult<Self> {
        let config: GameConfig =
            toml::from_str(contents).map_err(|e| KingError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> KingResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> KingResult<String> {
        toml::to_string_pretty(self).map_err(|e| KingError::Config(e.to_string()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
