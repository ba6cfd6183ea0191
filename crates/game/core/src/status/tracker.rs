//! Per-combatant collection of active status effects.
//!
//! Instances are kept in insertion order and there is at most one instance per
//! [`EffectType`]. Hook passes iterate over a snapshot of the types present
//! when the pass started; removals requested by hooks are applied after the
//! pass completes.

use arrayvec::ArrayVec;
use tracing::{trace, warn};

use crate::card::CardFamily;
use crate::config::GameConfig;

use super::hook::{self, HookEffect, HookOutcome};
use super::kind::{EffectType, HookSet};

/// A single active status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffectInstance {
    pub effect: EffectType,
    /// Stack count, damage bonus or trigger counter depending on the type.
    pub severity: i32,
}

impl StatusEffectInstance {
    pub const fn new(effect: EffectType, severity: i32) -> Self {
        Self { effect, severity }
    }
}

type EffectSlots<T> = ArrayVec<T, { GameConfig::MAX_STATUS_EFFECTS }>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffectTracker {
    effects: EffectSlots<StatusEffectInstance>,
}

impl StatusEffectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `severity` of `effect`.
    ///
    /// Stacking types already present accumulate severity; non-stacking types
    /// already present have their severity replaced. Neither case fires
    /// `on_apply` again. A fresh instance runs `on_apply` before it is stored.
    pub fn add(&mut self, effect: EffectType, severity: i32) -> Vec<HookEffect> {
        let definition = effect.definition();

        if let Some(existing) = self.get_mut(effect) {
            if definition.stacks {
                existing.severity += severity;
            } else {
                existing.severity = severity;
            }
            trace!(
                target: "rift::status",
                effect = ?effect,
                severity = existing.severity,
                "updated existing effect"
            );
            return Vec::new();
        }

        let mut instance = StatusEffectInstance::new(effect, severity);
        let outcome = if definition.hooks.contains(HookSet::ON_APPLY) {
            hook::on_apply(&mut instance)
        } else {
            HookOutcome::default()
        };

        if !outcome.remove_self && self.effects.try_push(instance).is_err() {
            warn!(target: "rift::status", effect = ?effect, "status effect capacity exhausted");
        }

        outcome.effects
    }

    pub fn has(&self, effect: EffectType) -> bool {
        self.effects.iter().any(|e| e.effect == effect)
    }

    pub fn get(&self, effect: EffectType) -> Option<&StatusEffectInstance> {
        self.effects.iter().find(|e| e.effect == effect)
    }

    /// Severity of `effect`, or 0 when absent.
    pub fn severity(&self, effect: EffectType) -> i32 {
        self.get(effect).map_or(0, |e| e.severity)
    }

    fn get_mut(&mut self, effect: EffectType) -> Option<&mut StatusEffectInstance> {
        self.effects.iter_mut().find(|e| e.effect == effect)
    }

    /// Removes `effect` unconditionally. Returns true if it was present.
    pub fn delete(&mut self, effect: EffectType) -> bool {
        let before = self.effects.len();
        self.effects.retain(|e| e.effect != effect);
        before != self.effects.len()
    }

    /// Runs `on_turn_start` on every instance, in insertion order.
    pub fn start_turn(&mut self) -> Vec<HookEffect> {
        self.run_pass(HookSet::ON_TURN_START, hook::on_turn_start)
    }

    /// Runs `on_turn_end` on every instance, in insertion order.
    ///
    /// Decay is a separate step ([`Self::apply_decay`]) so the hook effects
    /// returned here can be resolved while the pre-decay severities are still
    /// in place.
    pub fn end_turn_hooks(&mut self) -> Vec<HookEffect> {
        self.run_pass(HookSet::ON_TURN_END, hook::on_turn_end)
    }

    /// Adds each definition's per-turn decay and drops instances at `<= 0`.
    pub fn apply_decay(&mut self) {
        for instance in self.effects.iter_mut() {
            if let Some(decay) = instance.effect.definition().decay_per_turn {
                instance.severity += decay;
            }
        }
        self.effects.retain(|e| {
            let keep = e.effect.definition().decay_per_turn.is_none() || e.severity > 0;
            if !keep {
                trace!(target: "rift::status", effect = ?e.effect, "effect expired");
            }
            keep
        });
    }

    /// Both halves of the turn-end step, for callers without hook targets.
    pub fn end_turn(&mut self) -> Vec<HookEffect> {
        let effects = self.end_turn_hooks();
        self.apply_decay();
        effects
    }

    /// Runs `on_card_played` on every instance with the played card's family.
    pub fn card_played(&mut self, family: CardFamily) -> Vec<HookEffect> {
        self.run_pass(HookSet::ON_CARD_PLAYED, |instance| {
            hook::on_card_played(instance, family)
        })
    }

    fn run_pass(
        &mut self,
        hook: HookSet,
        mut run: impl FnMut(&mut StatusEffectInstance) -> HookOutcome,
    ) -> Vec<HookEffect> {
        let snapshot: EffectSlots<EffectType> = self
            .effects
            .iter()
            .filter(|e| e.effect.definition().hooks.contains(hook))
            .map(|e| e.effect)
            .collect();

        let mut produced = Vec::new();
        let mut removals: EffectSlots<EffectType> = ArrayVec::new();

        for effect in snapshot {
            let Some(instance) = self.get_mut(effect) else {
                continue;
            };
            let outcome = run(instance);
            produced.extend(outcome.effects);
            if outcome.remove_self {
                removals.push(effect);
            }
        }

        for effect in removals {
            self.delete(effect);
        }

        produced
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffectInstance> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::HookTarget;

    #[test]
    fn stacking_effects_accumulate_into_one_instance() {
        let mut tracker = StatusEffectTracker::new();
        tracker.add(EffectType::Burn, 2);
        tracker.add(EffectType::Burn, 3);

        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.severity(EffectType::Burn), 5);
    }

    #[test]
    fn non_stacking_effects_replace_severity() {
        let mut tracker = StatusEffectTracker::new();
        tracker.add(EffectType::Stun, 4);
        tracker.add(EffectType::Stun, 1);

        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.severity(EffectType::Stun), 1);
    }

    #[test]
    fn re_adding_a_counter_does_not_rerun_on_apply() {
        let mut tracker = StatusEffectTracker::new();
        tracker.add(EffectType::Pyromaniac, 9);
        assert_eq!(tracker.severity(EffectType::Pyromaniac), 0);

        tracker.card_played(CardFamily::Attack);
        tracker.add(EffectType::Pyromaniac, 2);
        assert_eq!(tracker.severity(EffectType::Pyromaniac), 2);
    }

    #[test]
    fn decay_to_zero_removes_after_one_turn() {
        let mut tracker = StatusEffectTracker::new();
        tracker.add(EffectType::Weak, 1);
        tracker.end_turn();
        assert!(!tracker.has(EffectType::Weak));
    }

    #[test]
    fn decay_keeps_remaining_stacks() {
        let mut tracker = StatusEffectTracker::new();
        tracker.add(EffectType::Strength, 2);
        tracker.end_turn();
        assert_eq!(tracker.severity(EffectType::Strength), 1);
    }

    #[test]
    fn non_decaying_effects_survive_turn_end() {
        let mut tracker = StatusEffectTracker::new();
        tracker.add(EffectType::BonusAttackDamage, 2);
        tracker.add(EffectType::Momentum, 0);
        tracker.end_turn();
        assert!(tracker.has(EffectType::BonusAttackDamage));
        assert!(tracker.has(EffectType::Momentum));
    }

    #[test]
    fn burn_hook_targets_owner_before_decay() {
        let mut tracker = StatusEffectTracker::new();
        tracker.add(EffectType::Burn, 1);
        tracker.add(EffectType::Vulnerable, 1);

        let effects = tracker.end_turn_hooks();
        assert_eq!(
            effects,
            vec![HookEffect::Damage {
                target: HookTarget::Owner,
                amount: 1,
                ignores_block: false,
            }]
        );
        // Vulnerable is still present while the burn damage resolves.
        assert!(tracker.has(EffectType::Vulnerable));

        tracker.apply_decay();
        assert!(tracker.is_empty());
    }

    #[test]
    fn start_turn_consumes_stun_and_immune() {
        let mut tracker = StatusEffectTracker::new();
        tracker.add(EffectType::Immune, 0);
        tracker.add(EffectType::Stun, 0);
        tracker.add(EffectType::Weak, 2);

        let effects = tracker.start_turn();
        assert_eq!(effects.len(), 1);
        assert!(!tracker.has(EffectType::Stun));
        assert!(!tracker.has(EffectType::Immune));
        assert!(tracker.has(EffectType::Weak));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut tracker = StatusEffectTracker::new();
        tracker.add(EffectType::Vulnerable, 1);
        tracker.add(EffectType::Burn, 1);
        tracker.add(EffectType::Weak, 1);
        let order: Vec<_> = tracker.iter().map(|e| e.effect).collect();
        assert_eq!(
            order,
            vec![EffectType::Vulnerable, EffectType::Burn, EffectType::Weak]
        );
    }

    #[test]
    fn delete_reports_presence() {
        let mut tracker = StatusEffectTracker::new();
        tracker.add(EffectType::Immune, 0);
        assert!(tracker.delete(EffectType::Immune));
        assert!(!tracker.delete(EffectType::Immune));
    }
}
