//! Content factory for loading everything a run needs from a data directory.

use std::path::{Path, PathBuf};

use rift_core::{EncounterTemplate, GameConfig};

use crate::loaders::{ConfigLoader, EncounterLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── encounters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the encounter list from `encounters.ron`.
    pub fn load_encounters(&self) -> LoadResult<Vec<EncounterTemplate>> {
        EncounterLoader::load(&self.data_dir.join("encounters.ron"))
    }
}
