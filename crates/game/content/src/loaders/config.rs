//! Game configuration loader.

use std::path::Path;

use rift_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their built-in defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.hand_size == 0 {
            anyhow::bail!("hand_size must be at least 1");
        }
        if config.switch_countdown < 1 {
            anyhow::bail!("switch_countdown must be at least 1");
        }
        // The enemy acts inside its own turn, so its action cannot be
        // scheduled after the turn ends.
        if config.delays.enemy_action_ms > config.delays.enemy_turn_end_ms {
            anyhow::bail!(
                "delays.enemy_action_ms ({}) must not exceed delays.enemy_turn_end_ms ({})",
                config.delays.enemy_action_ms,
                config.delays.enemy_turn_end_ms
            );
        }
        Ok(config)
    }
}
