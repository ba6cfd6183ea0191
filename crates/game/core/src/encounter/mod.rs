//! Encounters: two timelines, one shared player.

mod controller;
mod template;
mod timeline;

pub use controller::{AfterEnemyTurn, BattleInstance, Encounter, TurnPhase};
pub use template::{Backdrop, EncounterTemplate};
pub use timeline::Timeline;
