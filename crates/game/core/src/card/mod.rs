//! Cards: the static catalog, runtime instances and play resolution.
//!
//! A [`CardType`] is pure data. The player owns [`CardInstance`]s, each of
//! which tracks the pile it currently sits in. Card effects run against a
//! [`crate::combat::BattleContext`] so they see the player and the enemy of
//! the active timeline only.

pub(crate) mod effect;
mod instance;
mod kind;

pub use instance::{CardId, CardInstance, Pile};
pub use kind::{CardDefinition, CardFamily, CardType, DescriptionSegment};
