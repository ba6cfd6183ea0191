//! Enemies: templates, the intent cycle and the enemy turn lifecycle.

use arrayvec::ArrayVec;
use tracing::{debug, error, trace};

use crate::card::{CardType, Pile};
use crate::combat::{BattleContext, Combatant, Side, Vitals, enemy_attack_damage};
use crate::config::GameConfig;
use crate::status::{EffectType, StatusEffectTracker};

/// One entry in an enemy's fixed intent cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyAction {
    /// `hits` separate hits of `damage` each against the player.
    Attack { damage: u32, hits: u32 },
    /// Applies an effect to the enemy itself.
    Buff { effect: EffectType, severity: i32 },
    /// Applies an effect to the player.
    Debuff { effect: EffectType, severity: i32 },
    /// Shuffles dead cards into the player's used pile.
    Corrupt { card: CardType, count: u32 },
}

impl EnemyAction {
    /// One-line intent text shown to the player.
    pub fn describe(&self) -> String {
        match self {
            Self::Attack { damage, hits } => format!("Attack for {damage} x {hits} damage"),
            Self::Buff { effect, severity } => format!("Buff {effect} by {severity}"),
            Self::Debuff { effect, severity } => format!("Debuff {effect} by {severity}"),
            Self::Corrupt { card, count } => format!("Corrupt your deck with {count} {card}"),
        }
    }
}

impl core::fmt::Display for EnemyAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}

pub type ActionCycle = ArrayVec<EnemyAction, { GameConfig::MAX_ENEMY_ACTIONS }>;

/// Data needed to spawn an enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub health: u32,
    /// Sprite key for the presentation layer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sprite: String,
    pub actions: ActionCycle,
}

impl EnemyTemplate {
    pub fn new(name: impl Into<String>, health: u32, actions: &[EnemyAction]) -> Self {
        Self {
            name: name.into(),
            health,
            sprite: String::new(),
            actions: actions.iter().copied().take(GameConfig::MAX_ENEMY_ACTIONS).collect(),
        }
    }
}

/// Death sequencing of an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum DeathState {
    #[default]
    Alive,
    /// Health hit zero; the fade-out has not finished yet.
    Dying,
    /// Fade-out finished.
    Gone,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    name: String,
    sprite: String,
    vitals: Vitals,
    effects: StatusEffectTracker,
    actions: ActionCycle,
    cursor: usize,
    stunned: bool,
    death: DeathState,
}

impl Enemy {
    pub fn from_template(template: &EnemyTemplate) -> Self {
        debug_assert!(
            !template.actions.is_empty(),
            "enemy template {} has no actions",
            template.name
        );
        Self {
            name: template.name.clone(),
            sprite: template.sprite.clone(),
            vitals: Vitals::new(template.health),
            effects: StatusEffectTracker::new(),
            actions: template.actions.clone(),
            cursor: 0,
            stunned: false,
            death: DeathState::Alive,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sprite(&self) -> &str {
        &self.sprite
    }

    pub fn actions(&self) -> &[EnemyAction] {
        &self.actions
    }

    /// The action that will run on the enemy's next turn.
    pub fn intent(&self) -> Option<&EnemyAction> {
        self.actions.get(self.cursor)
    }

    pub fn is_stunned(&self) -> bool {
        self.stunned
    }

    pub fn death_state(&self) -> DeathState {
        self.death
    }

    /// Marks the fade-out as finished. Returns false if it already was.
    pub fn finish_dying(&mut self) -> bool {
        if self.death == DeathState::Dying {
            self.death = DeathState::Gone;
            true
        } else {
            false
        }
    }

    /// Returns the front action and rotates it to the back of the cycle.
    fn next_action(&mut self) -> Option<EnemyAction> {
        let action = self.actions.get(self.cursor).copied()?;
        self.cursor = (self.cursor + 1) % self.actions.len();
        Some(action)
    }

    /// Clears the stun flag, returning whether it was set.
    fn take_stun(&mut self) -> bool {
        core::mem::replace(&mut self.stunned, false)
    }
}

impl Combatant for Enemy {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn effects(&self) -> &StatusEffectTracker {
        &self.effects
    }

    fn effects_mut(&mut self) -> &mut StatusEffectTracker {
        &mut self.effects
    }

    fn handle_stun(&mut self) {
        trace!(target: "rift::enemy", enemy = %self.name, "stunned");
        self.stunned = true;
    }

    fn on_defeated(&mut self) {
        if self.death == DeathState::Alive {
            self.death = DeathState::Dying;
            debug!(target: "rift::enemy", enemy = %self.name, "enemy dying");
        }
    }
}

// ============================================================================
// Enemy turn lifecycle
// ============================================================================

impl<'a> BattleContext<'a> {
    /// Runs the enemy's turn-start hooks.
    ///
    /// Returns whether the enemy gets to act this turn. A stunned enemy has
    /// its flag cleared and skips the action; its turn still ends normally.
    pub fn start_enemy_turn(&mut self) -> bool {
        let produced = self.enemy.effects.start_turn();
        self.resolve_hooks(Side::Enemy, produced);

        if self.enemy.take_stun() {
            debug!(target: "rift::enemy", enemy = %self.enemy.name, "turn skipped (stunned)");
            return false;
        }
        true
    }

    /// Executes the enemy's queued action. Defeated enemies do nothing.
    pub fn enemy_act(&mut self) {
        if self.enemy.is_defeated() {
            return;
        }

        debug_assert!(
            !self.enemy.actions.is_empty(),
            "enemy {} has an empty action cycle",
            self.enemy.name
        );
        let Some(action) = self.enemy.next_action() else {
            error!(target: "rift::enemy", enemy = %self.enemy.name, "empty action cycle, skipping");
            return;
        };
        debug!(target: "rift::enemy", enemy = %self.enemy.name, action = %action, "enemy acts");

        match action {
            EnemyAction::Attack { damage, hits } => {
                for _ in 0..hits {
                    let amount = enemy_attack_damage(&self.enemy.effects, damage);
                    self.deal_damage(Side::Player, amount, false);
                }
            }
            EnemyAction::Buff { effect, severity } => {
                self.apply_effect(Side::Enemy, effect, severity);
            }
            EnemyAction::Debuff { effect, severity } => {
                self.apply_effect(Side::Player, effect, severity);
            }
            EnemyAction::Corrupt { card, count } => {
                for _ in 0..count {
                    self.player.add_card(card, Pile::Used);
                }
            }
        }
    }

    /// Runs the enemy's turn-end hooks and decay.
    pub fn end_enemy_turn(&mut self) {
        let produced = self.enemy.effects.end_turn_hooks();
        self.resolve_hooks(Side::Enemy, produced);
        self.enemy.effects.apply_decay();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> EnemyTemplate {
        EnemyTemplate::new(
            "Sentry",
            10,
            &[
                EnemyAction::Attack { damage: 3, hits: 2 },
                EnemyAction::Buff {
                    effect: EffectType::Strength,
                    severity: 1,
                },
            ],
        )
    }

    #[test]
    fn intents_cycle_round_robin() {
        let mut enemy = Enemy::from_template(&template());
        let first = enemy.next_action();
        let second = enemy.next_action();
        let third = enemy.next_action();
        assert_eq!(first, third);
        assert_ne!(first, second);
        assert_eq!(enemy.intent(), first.as_ref());
    }

    #[test]
    fn stun_flag_is_consumed_once() {
        let mut enemy = Enemy::from_template(&template());
        enemy.handle_stun();
        assert!(enemy.take_stun());
        assert!(!enemy.take_stun());
    }

    #[test]
    fn death_runs_alive_dying_gone() {
        let mut enemy = Enemy::from_template(&template());
        assert!(!enemy.finish_dying());
        enemy.take_damage(99, false);
        assert_eq!(enemy.death_state(), DeathState::Dying);
        assert!(enemy.finish_dying());
        assert_eq!(enemy.death_state(), DeathState::Gone);
        assert!(!enemy.finish_dying());
    }

    #[test]
    fn intent_descriptions() {
        assert_eq!(
            EnemyAction::Attack { damage: 3, hits: 2 }.describe(),
            "Attack for 3 x 2 damage"
        );
        assert_eq!(
            EnemyAction::Debuff {
                effect: EffectType::Weak,
                severity: 2
            }
            .describe(),
            "Debuff Weakness by 2"
        );
        assert_eq!(
            EnemyAction::Corrupt {
                card: CardType::Static,
                count: 2
            }
            .describe(),
            "Corrupt your deck with 2 Static"
        );
    }
}
