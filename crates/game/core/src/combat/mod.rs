//! Combat rules shared by both sides.
//!
//! - [`Combatant`]: health, block and the damage-taking rule
//! - [`modify_attack_damage`] / [`enemy_attack_damage`]: outgoing modifiers
//! - [`BattleContext`]: the player plus the active enemy, threaded through
//!   card effects, enemy actions and status hook resolution

mod combatant;
mod context;
mod modifier;

pub use combatant::{Combatant, DamageReport, Side, Vitals};
pub use context::{BattleContext, BattleReport};
pub use modifier::{enemy_attack_damage, modify_attack_damage};
