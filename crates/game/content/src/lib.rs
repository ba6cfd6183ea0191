//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Encounter list (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Built-in copies of both are embedded at compile time, so a run can start
//! without any files on disk.
//!
//! All loaders use rift-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod builtin;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use builtin::{builtin_config, builtin_encounters};
#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, EncounterCatalog, EncounterLoader, LoadResult};
