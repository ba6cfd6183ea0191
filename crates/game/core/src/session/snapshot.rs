//! Read-only views of a session for frontends.
//!
//! Views are plain owned data so they can cross thread boundaries and be
//! serialized without borrowing the live session.

use crate::actor::{DeathState, Enemy, Player};
use crate::card::{CardFamily, CardId, CardInstance, CardType};
use crate::combat::Combatant;
use crate::encounter::{Encounter, Timeline, TurnPhase};
use crate::equipment::EquipmentType;
use crate::reward::RewardOffer;
use crate::schedule::Millis;
use crate::status::{EffectType, StatusEffectTracker};

use super::{GameSession, Phase};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub clock: Millis,
    pub seed: u64,
    pub encounter_index: usize,
    pub encounter_count: usize,
    pub player: PlayerView,
    pub encounter: Option<EncounterView>,
    pub offer: Option<RewardOffer>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerView {
    pub health: u32,
    pub max_health: u32,
    pub block: u32,
    pub stamina: u32,
    pub max_stamina: u32,
    pub effects: Vec<EffectView>,
    pub hand: Vec<CardView>,
    pub deck_size: usize,
    pub used_size: usize,
    pub equipment: Vec<EquipmentType>,
    pub dead: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectView {
    pub effect: EffectType,
    pub name: String,
    pub severity: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardView {
    pub id: CardId,
    pub card: CardType,
    pub name: String,
    /// Description with keyword markers resolved to plain names.
    pub description: String,
    pub cost: u32,
    pub family: CardFamily,
    /// Affordable and the session currently accepts input.
    pub playable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterView {
    pub name: String,
    pub active: Timeline,
    pub countdown: i32,
    pub phase: TurnPhase,
    pub input_enabled: bool,
    pub past: EnemyView,
    pub future: EnemyView,
}

impl EncounterView {
    pub fn enemy(&self, timeline: Timeline) -> &EnemyView {
        match timeline {
            Timeline::Past => &self.past,
            Timeline::Future => &self.future,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyView {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub effects: Vec<EffectView>,
    /// Description of the action the enemy will take next.
    pub intent: Option<String>,
    pub death: DeathState,
    pub stunned: bool,
}

fn effect_views(effects: &StatusEffectTracker) -> Vec<EffectView> {
    effects
        .iter()
        .map(|instance| EffectView {
            effect: instance.effect,
            name: instance.effect.name().to_owned(),
            severity: instance.severity,
        })
        .collect()
}

impl CardView {
    fn new(instance: &CardInstance, player: &Player, accepting_input: bool) -> Self {
        let definition = instance.definition();
        Self {
            id: instance.id,
            card: instance.card,
            name: definition.name.to_owned(),
            description: definition.render(|effect| effect.name().to_owned()),
            cost: definition.stamina_cost(),
            family: definition.family,
            playable: accepting_input && player.can_afford(instance.card),
        }
    }
}

impl PlayerView {
    fn new(player: &Player, accepting_input: bool) -> Self {
        let vitals = player.vitals();
        Self {
            health: vitals.health,
            max_health: vitals.max_health,
            block: vitals.block,
            stamina: player.stamina(),
            max_stamina: player.max_stamina(),
            effects: effect_views(player.effects()),
            hand: player
                .hand()
                .iter()
                .map(|card| CardView::new(card, player, accepting_input))
                .collect(),
            deck_size: player.deck().len(),
            used_size: player.used_pile().len(),
            equipment: player.equipment().to_vec(),
            dead: player.is_dead(),
        }
    }
}

impl From<&Enemy> for EnemyView {
    fn from(enemy: &Enemy) -> Self {
        let vitals = enemy.vitals();
        Self {
            name: enemy.name().to_owned(),
            health: vitals.health,
            max_health: vitals.max_health,
            effects: effect_views(enemy.effects()),
            intent: enemy.intent().map(|action| action.describe()),
            death: enemy.death_state(),
            stunned: enemy.is_stunned(),
        }
    }
}

impl From<&Encounter> for EncounterView {
    fn from(encounter: &Encounter) -> Self {
        Self {
            name: encounter.name().to_owned(),
            active: encounter.active(),
            countdown: encounter.countdown(),
            phase: encounter.phase(),
            input_enabled: encounter.input_enabled(),
            past: encounter.enemy(Timeline::Past).into(),
            future: encounter.enemy(Timeline::Future).into(),
        }
    }
}

impl GameSession {
    /// Captures the current state for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        let accepting_input = self.ensure_player_input().is_ok();
        SessionSnapshot {
            phase: self.phase,
            clock: self.scheduler.now(),
            seed: self.rng.seed(),
            encounter_index: self.encounter_index,
            encounter_count: self.encounters.len(),
            player: PlayerView::new(&self.player, accepting_input),
            encounter: self.encounter.as_ref().map(EncounterView::from),
            offer: self.offer.clone(),
        }
    }
}
