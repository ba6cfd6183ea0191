//! Encounter list loader.

use std::path::Path;

use rift_core::{EncounterTemplate, EnemyTemplate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Encounter list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterCatalog {
    pub encounters: Vec<EncounterTemplate>,
}

/// Loader for the ordered encounter list from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    /// Load the encounter list from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an [`EncounterCatalog`]
    pub fn load(path: &Path) -> LoadResult<Vec<EncounterTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parses and validates an encounter list.
    ///
    /// Rejects an empty list and enemies without actions or health, since
    /// the rules treat those as malformed tables.
    pub fn parse(content: &str) -> LoadResult<Vec<EncounterTemplate>> {
        let catalog: EncounterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter RON: {}", e))?;

        if catalog.encounters.is_empty() {
            anyhow::bail!("encounter list is empty");
        }
        for encounter in &catalog.encounters {
            validate_enemy(&encounter.name, &encounter.past)?;
            validate_enemy(&encounter.name, &encounter.future)?;
        }

        debug!(
            target: "rift::content",
            encounters = catalog.encounters.len(),
            "encounter list loaded"
        );
        Ok(catalog.encounters)
    }
}

fn validate_enemy(encounter: &str, enemy: &EnemyTemplate) -> LoadResult<()> {
    if enemy.actions.is_empty() {
        anyhow::bail!(
            "enemy '{}' in encounter '{}' has no actions",
            enemy.name,
            encounter
        );
    }
    if enemy.health == 0 {
        anyhow::bail!(
            "enemy '{}' in encounter '{}' has no health",
            enemy.name,
            encounter
        );
    }
    Ok(())
}
