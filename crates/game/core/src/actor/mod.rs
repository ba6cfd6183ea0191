//! The two kinds of combatant.

mod enemy;
mod player;

pub use enemy::{ActionCycle, DeathState, Enemy, EnemyAction, EnemyTemplate};
pub use player::Player;
