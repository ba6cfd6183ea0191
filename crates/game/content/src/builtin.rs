//! Content embedded in the binary.

use rift_core::{EncounterTemplate, GameConfig};

use crate::loaders::{ConfigLoader, EncounterLoader, LoadResult};

const CONFIG_TOML: &str = include_str!("../data/config.toml");
const ENCOUNTERS_RON: &str = include_str!("../data/encounters.ron");

/// The configuration shipped with the game.
pub fn builtin_config() -> LoadResult<GameConfig> {
    ConfigLoader::parse(CONFIG_TOML)
}

/// The encounter list shipped with the game, in play order.
pub fn builtin_encounters() -> LoadResult<Vec<EncounterTemplate>> {
    EncounterLoader::parse(ENCOUNTERS_RON)
}
