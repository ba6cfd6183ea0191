//! Hook behaviour for status effects, dispatched by [`EffectType`].
//!
//! Hooks never reach outside the instance they run on. Anything that touches
//! another combatant or another effect is returned as a [`HookEffect`] and
//! applied by the battle context once the tracker has finished iterating.

use crate::card::CardFamily;

use super::kind::EffectType;
use super::tracker::StatusEffectInstance;

/// Which side of the battle a hook effect lands on, relative to the owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HookTarget {
    Owner,
    Opponent,
}

/// Side effect requested by a hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HookEffect {
    Damage {
        target: HookTarget,
        amount: u32,
        ignores_block: bool,
    },
    Stun {
        target: HookTarget,
    },
    Apply {
        target: HookTarget,
        effect: EffectType,
        severity: i32,
    },
}

/// Result of running one hook on one instance.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HookOutcome {
    pub effects: Vec<HookEffect>,
    /// The instance deletes itself once the current pass completes.
    pub remove_self: bool,
}

impl HookOutcome {
    fn none() -> Self {
        Self::default()
    }

    fn consume() -> Self {
        Self {
            effects: Vec::new(),
            remove_self: true,
        }
    }

    fn emit(effect: HookEffect) -> Self {
        Self {
            effects: vec![effect],
            remove_self: false,
        }
    }
}

pub(crate) fn on_apply(instance: &mut StatusEffectInstance) -> HookOutcome {
    match instance.effect {
        // Counters always start from zero regardless of the severity passed in.
        EffectType::Pyromaniac | EffectType::Momentum => {
            instance.severity = 0;
            HookOutcome::none()
        }
        _ => HookOutcome::none(),
    }
}

pub(crate) fn on_turn_start(instance: &mut StatusEffectInstance) -> HookOutcome {
    match instance.effect {
        EffectType::Stun => HookOutcome {
            effects: vec![HookEffect::Stun {
                target: HookTarget::Owner,
            }],
            remove_self: true,
        },
        EffectType::Immune => HookOutcome::consume(),
        _ => HookOutcome::none(),
    }
}

pub(crate) fn on_turn_end(instance: &mut StatusEffectInstance) -> HookOutcome {
    match instance.effect {
        EffectType::Burn => HookOutcome::emit(HookEffect::Damage {
            target: HookTarget::Owner,
            amount: 1,
            ignores_block: false,
        }),
        _ => HookOutcome::none(),
    }
}

pub(crate) fn on_card_played(
    instance: &mut StatusEffectInstance,
    family: CardFamily,
) -> HookOutcome {
    match (instance.effect, family) {
        (EffectType::Pyromaniac, CardFamily::Attack) => {
            tick_counter(instance, EffectType::PYROMANIAC_THRESHOLD, || {
                HookEffect::Apply {
                    target: HookTarget::Opponent,
                    effect: EffectType::Burn,
                    severity: 1,
                }
            })
        }
        (EffectType::Momentum, CardFamily::Skill) => {
            tick_counter(instance, EffectType::MOMENTUM_THRESHOLD, || {
                HookEffect::Apply {
                    target: HookTarget::Owner,
                    effect: EffectType::Strength,
                    severity: 1,
                }
            })
        }
        _ => HookOutcome::none(),
    }
}

fn tick_counter(
    instance: &mut StatusEffectInstance,
    threshold: i32,
    reward: impl FnOnce() -> HookEffect,
) -> HookOutcome {
    instance.severity += 1;
    if instance.severity >= threshold {
        instance.severity = 0;
        HookOutcome::emit(reward())
    } else {
        HookOutcome::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stun_consumes_itself_and_stuns_owner() {
        let mut stun = StatusEffectInstance::new(EffectType::Stun, 0);
        let outcome = on_turn_start(&mut stun);
        assert!(outcome.remove_self);
        assert_eq!(
            outcome.effects,
            vec![HookEffect::Stun {
                target: HookTarget::Owner
            }]
        );
    }

    #[test]
    fn momentum_fires_on_fifth_skill_only() {
        let mut momentum = StatusEffectInstance::new(EffectType::Momentum, 0);
        for _ in 0..4 {
            assert!(on_card_played(&mut momentum, CardFamily::Skill).effects.is_empty());
        }
        assert!(on_card_played(&mut momentum, CardFamily::Attack).effects.is_empty());
        let outcome = on_card_played(&mut momentum, CardFamily::Skill);
        assert_eq!(outcome.effects.len(), 1);
        assert_eq!(momentum.severity, 0);
    }

    #[test]
    fn pyromaniac_burns_opponent_every_third_attack() {
        let mut pyro = StatusEffectInstance::new(EffectType::Pyromaniac, 0);
        on_card_played(&mut pyro, CardFamily::Attack);
        on_card_played(&mut pyro, CardFamily::Attack);
        let outcome = on_card_played(&mut pyro, CardFamily::Attack);
        assert_eq!(
            outcome.effects,
            vec![HookEffect::Apply {
                target: HookTarget::Opponent,
                effect: EffectType::Burn,
                severity: 1,
            }]
        );
    }

    #[test]
    fn counters_reset_on_apply() {
        let mut pyro = StatusEffectInstance::new(EffectType::Pyromaniac, 7);
        on_apply(&mut pyro);
        assert_eq!(pyro.severity, 0);
    }
}
