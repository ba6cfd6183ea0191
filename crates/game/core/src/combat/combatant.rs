//! Health, block and the shared damage-taking rule.

use crate::status::{EffectType, HookTarget, StatusEffectTracker};

/// One of the two participants in a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }

    /// Resolves a hook target relative to `self` as the hook owner.
    pub const fn resolve(self, target: HookTarget) -> Self {
        match target {
            HookTarget::Owner => self,
            HookTarget::Opponent => self.opponent(),
        }
    }
}

/// Health and block of a combatant.
///
/// `health` never exceeds `max_health`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    pub health: u32,
    pub max_health: u32,
    pub block: u32,
}

impl Vitals {
    pub const fn new(max_health: u32) -> Self {
        Self {
            health: max_health,
            max_health,
            block: 0,
        }
    }

    pub const fn is_depleted(&self) -> bool {
        self.health == 0
    }

    /// Restores up to `amount` health. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }
}

/// What happened to one damage call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageReport {
    /// Amount after incoming modifiers, before block.
    pub incoming: u32,
    pub absorbed: u32,
    /// Health actually lost.
    pub dealt: u32,
    pub immune: bool,
    /// This call took the combatant to zero health.
    pub defeated: bool,
}

impl DamageReport {
    /// The hit was fully soaked by block.
    pub const fn fully_blocked(&self) -> bool {
        self.absorbed > 0 && self.dealt == 0 && !self.defeated
    }
}

/// Capabilities shared by the player and enemies.
pub trait Combatant {
    fn vitals(&self) -> &Vitals;

    fn vitals_mut(&mut self) -> &mut Vitals;

    fn effects(&self) -> &StatusEffectTracker;

    fn effects_mut(&mut self) -> &mut StatusEffectTracker;

    /// Reaction to a Stun effect consuming itself at turn start.
    fn handle_stun(&mut self);

    /// Called exactly once, when health first reaches zero.
    fn on_defeated(&mut self);

    fn is_defeated(&self) -> bool {
        self.vitals().is_depleted()
    }

    fn heal(&mut self, amount: u32) -> u32 {
        self.vitals_mut().heal(amount)
    }

    /// Applies `amount` damage.
    ///
    /// Already-defeated combatants ignore damage. Immune ignores everything
    /// except `ignores_block` damage, which also bypasses block. Vulnerable
    /// raises the amount by half, rounded down, before block absorbs it.
    fn take_damage(&mut self, amount: u32, ignores_block: bool) -> DamageReport {
        let mut report = DamageReport::default();

        if self.is_defeated() {
            return report;
        }
        if !ignores_block && self.effects().has(EffectType::Immune) {
            report.immune = true;
            return report;
        }

        let mut incoming = amount;
        if self.effects().has(EffectType::Vulnerable) {
            incoming = incoming * 3 / 2;
        }
        report.incoming = incoming;

        let vitals = self.vitals_mut();
        if !ignores_block {
            if vitals.block > incoming {
                vitals.block -= incoming;
                report.absorbed = incoming;
                return report;
            }
            report.absorbed = vitals.block;
            incoming -= vitals.block;
            vitals.block = 0;
        }

        report.dealt = incoming.min(vitals.health);
        vitals.health -= report.dealt;

        if vitals.health == 0 {
            report.defeated = true;
            self.on_defeated();
        }
        report
    }
}
