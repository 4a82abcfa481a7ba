//! Game configuration, fixed at construction time

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_DROP_INTERVAL_MS, MAX_BOARD_DIMENSION,
    MIN_BOARD_DIMENSION,
};

/// Board dimensions and automatic-drop interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub drop_interval_ms: u32,
}

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("board width {_0} outside 4..=64")]
    Width(#[error(not(source))] u8),
    #[display("board height {_0} outside 4..=64")]
    Height(#[error(not(source))] u8),
    #[display("drop interval must be greater than zero")]
    DropInterval,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// - `BLOCKFALL_WIDTH`: board columns (default 10)
    /// - `BLOCKFALL_HEIGHT`: board rows (default 20)
    /// - `BLOCKFALL_DROP_MS`: automatic drop interval (default 1000)
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();
        let width = env::var("BLOCKFALL_WIDTH")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);
        let height = env::var("BLOCKFALL_HEIGHT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);
        let drop_interval_ms = env::var("BLOCKFALL_DROP_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.drop_interval_ms);

        Self {
            width,
            height,
            drop_interval_ms,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_BOARD_DIMENSION..=MAX_BOARD_DIMENSION;
        if !range.contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !range.contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::DropInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.drop_interval_ms, 1000);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let narrow = GameConfig {
            width: 3,
            ..GameConfig::default()
        };
        assert_eq!(narrow.validate(), Err(ConfigError::Width(3)));

        let tall = GameConfig {
            height: 65,
            ..GameConfig::default()
        };
        assert_eq!(tall.validate(), Err(ConfigError::Height(65)));

        let frozen = GameConfig {
            drop_interval_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(frozen.validate(), Err(ConfigError::DropInterval));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::Width(2).to_string(),
            "board width 2 outside 4..=64"
        );
    }
}
