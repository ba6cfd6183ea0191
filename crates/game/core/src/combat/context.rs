//! Explicit battle context passed to every rule that touches both sides.
//!
//! A context pairs the shared player with the enemy of the active timeline.
//! The inactive enemy is never reachable from here, which is what keeps it
//! frozen between switches.

use tracing::{debug, warn};

use crate::actor::{Enemy, Player};
use crate::config::GameConfig;
use crate::notify::{Notification, Outbox};
use crate::rng::GameRng;
use crate::status::{EffectType, HookEffect};

use super::combatant::{Combatant, DamageReport, Side};
use super::modifier::modify_attack_damage;

/// Defeats observed while a context was alive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BattleReport {
    pub player_defeated: bool,
    pub enemy_defeated: bool,
}

pub struct BattleContext<'a> {
    pub player: &'a mut Player,
    pub enemy: &'a mut Enemy,
    pub rng: &'a mut GameRng,
    pub outbox: &'a mut Outbox,
    pub config: &'a GameConfig,
    report: BattleReport,
}

impl<'a> BattleContext<'a> {
    pub fn new(
        player: &'a mut Player,
        enemy: &'a mut Enemy,
        rng: &'a mut GameRng,
        outbox: &'a mut Outbox,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            player,
            enemy,
            rng,
            outbox,
            config,
            report: BattleReport::default(),
        }
    }

    /// Consumes the context, returning the defeats it observed.
    pub fn finish(self) -> BattleReport {
        self.report
    }

    pub fn report(&self) -> BattleReport {
        self.report
    }

    pub fn combatant(&self, side: Side) -> &dyn Combatant {
        match side {
            Side::Player => &*self.player,
            Side::Enemy => &*self.enemy,
        }
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut dyn Combatant {
        match side {
            Side::Player => &mut *self.player,
            Side::Enemy => &mut *self.enemy,
        }
    }

    pub fn player_attack_damage(&self, base: u32) -> u32 {
        modify_attack_damage(self.player.effects(), base)
    }

    /// Deals damage to `target` and emits the matching presentation signals.
    pub fn deal_damage(&mut self, target: Side, amount: u32, ignores_block: bool) -> DamageReport {
        let report = self.combatant_mut(target).take_damage(amount, ignores_block);

        if report.fully_blocked() && target == Side::Player {
            self.outbox.push(Notification::sound_at("shield_up", 0.1));
        }
        if report.dealt > 0 {
            self.outbox.push(Notification::DamageNumber {
                target,
                amount: report.dealt,
            });
            if target == Side::Player {
                self.outbox.push(Notification::sound("player_damage"));
                self.outbox.push(Notification::ShakeCamera {
                    power: 100 * report.dealt,
                });
            }
        }

        if report.defeated {
            debug!(target: "rift::combat", side = %target, "combatant defeated");
            match target {
                Side::Player => self.report.player_defeated = true,
                Side::Enemy => {
                    self.report.enemy_defeated = true;
                    self.outbox.push(Notification::ShakeCamera { power: 1000 });
                }
            }
        }
        report
    }

    pub fn heal(&mut self, target: Side, amount: u32) -> u32 {
        self.combatant_mut(target).heal(amount)
    }

    /// Adds a status effect to `target` and resolves whatever its
    /// `on_apply` hook asks for.
    pub fn apply_effect(&mut self, target: Side, effect: EffectType, severity: i32) {
        self.apply_effect_at(target, effect, severity, 0);
    }

    /// Resolves effects produced by hooks on `owner`'s tracker.
    pub fn resolve_hooks(&mut self, owner: Side, effects: Vec<HookEffect>) {
        self.resolve_hooks_at(owner, effects, 0);
    }

    pub fn draw_cards(&mut self, count: usize) -> usize {
        self.player.draw_cards(count, self.rng)
    }

    fn apply_effect_at(&mut self, target: Side, effect: EffectType, severity: i32, depth: usize) {
        let produced = self
            .combatant_mut(target)
            .effects_mut()
            .add(effect, severity);
        self.resolve_hooks_at(target, produced, depth + 1);
    }

    fn resolve_hooks_at(&mut self, owner: Side, effects: Vec<HookEffect>, depth: usize) {
        if effects.is_empty() {
            return;
        }
        if depth > GameConfig::MAX_HOOK_DEPTH {
            warn!(
                target: "rift::status",
                owner = %owner,
                dropped = effects.len(),
                "hook chain exceeded maximum depth"
            );
            return;
        }

        for effect in effects {
            match effect {
                HookEffect::Damage {
                    target,
                    amount,
                    ignores_block,
                } => {
                    self.deal_damage(owner.resolve(target), amount, ignores_block);
                }
                HookEffect::Stun { target } => {
                    self.combatant_mut(owner.resolve(target)).handle_stun();
                }
                HookEffect::Apply {
                    target,
                    effect,
                    severity,
                } => {
                    self.apply_effect_at(owner.resolve(target), effect, severity, depth);
                }
            }
        }
    }
}
