//! Outgoing attack damage modifiers.
//!
//! Multipliers round down after each step, so the order they are applied in
//! changes the result and is fixed per side.

use crate::status::{EffectType, StatusEffectTracker};

/// Player attacks: flat bonus, then Weak (x0.5), then Strength (x1.5).
pub fn modify_attack_damage(effects: &StatusEffectTracker, base: u32) -> u32 {
    let bonus = effects.severity(EffectType::BonusAttackDamage);
    let mut damage = base.saturating_add_signed(bonus);

    if effects.has(EffectType::Weak) {
        damage /= 2;
    }
    if effects.has(EffectType::Strength) {
        damage = damage * 3 / 2;
    }
    damage
}

/// Enemy attacks: Strength (x1.5), then Weak (x0.5).
pub fn enemy_attack_damage(effects: &StatusEffectTracker, base: u32) -> u32 {
    let mut damage = base;

    if effects.has(EffectType::Strength) {
        damage = damage * 3 / 2;
    }
    if effects.has(EffectType::Weak) {
        damage /= 2;
    }
    damage
}
