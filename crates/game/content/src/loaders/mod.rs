//! Content loaders for reading game data from files.
//!
//! Each loader has a `load(path)` entry point for files on disk and a
//! `parse(text)` entry point used for embedded data and tests.

pub mod config;
pub mod encounter;
pub mod factory;

pub use config::ConfigLoader;
pub use encounter::{EncounterCatalog, EncounterLoader};
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
