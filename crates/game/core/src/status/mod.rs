//! Status effects: catalog, hook dispatch and per-combatant tracking.
//!
//! [`EffectType::definition`] is the registry. [`StatusEffectTracker`] owns
//! the live instances on one combatant and runs their hooks, handing any
//! cross-combatant consequences back as [`HookEffect`]s for the battle
//! context to resolve.

mod hook;
mod kind;
mod tracker;

pub use hook::{HookEffect, HookOutcome, HookTarget};
pub use kind::{EffectType, HookSet, StatusEffectDefinition};
pub use tracker::{StatusEffectInstance, StatusEffectTracker};
