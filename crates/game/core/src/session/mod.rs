//! Run-level facade.
//!
//! [`GameSession`] owns everything a run needs: the player, the current
//! encounter, the reward offer, the scheduler, the RNG and the notification
//! outbox. Frontends talk to the rules exclusively through it:
//!
//! - inputs: [`GameSession::select_equipment`], [`GameSession::play_card`],
//!   [`GameSession::end_turn`]
//! - time: [`GameSession::advance`] fires due continuations
//! - output: [`GameSession::drain_notifications`], [`GameSession::snapshot`]
//!
//! Every rejected input leaves the session untouched.

mod snapshot;

pub use snapshot::{CardView, EffectView, EncounterView, EnemyView, PlayerView, SessionSnapshot};

use tracing::{debug, info, trace};

use crate::actor::Player;
use crate::card::{CardId, CardType};
use crate::combat::{BattleContext, BattleReport};
use crate::config::GameConfig;
use crate::encounter::{AfterEnemyTurn, Encounter, EncounterTemplate, Timeline, TurnPhase};
use crate::equipment::EquipmentType;
use crate::error::{PlayError, SelectionError};
use crate::notify::{Notification, Outbox};
use crate::reward::RewardOffer;
use crate::rng::GameRng;
use crate::schedule::{Continuation, Millis, Scheduled, Scheduler};

/// Top-level state of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// A reward offer is open and must be answered.
    ChoosingEquipment,
    InEncounter,
    Victory,
    Defeat,
}

impl Phase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

pub struct GameSession {
    config: GameConfig,
    encounters: Vec<EncounterTemplate>,
    encounter_index: usize,
    next_encounter_id: u32,
    player: Player,
    encounter: Option<Encounter>,
    offer: Option<RewardOffer>,
    phase: Phase,
    scheduler: Scheduler,
    rng: GameRng,
    outbox: Outbox,
}

impl GameSession {
    /// Starts a run. The starting equipment offer opens immediately.
    pub fn new(config: GameConfig, encounters: Vec<EncounterTemplate>, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let offer = RewardOffer::starting(&config.rewards, &mut rng);
        info!(
            target: "rift::session",
            seed,
            encounters = encounters.len(),
            "run started"
        );

        Self {
            player: Player::new(&config),
            config,
            encounters,
            encounter_index: 0,
            next_encounter_id: 0,
            encounter: None,
            offer: Some(offer),
            phase: Phase::ChoosingEquipment,
            scheduler: Scheduler::new(),
            rng,
            outbox: Outbox::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    /// Index of the current (or next) encounter in the encounter list.
    pub fn encounter_index(&self) -> usize {
        self.encounter_index
    }

    pub fn encounter_count(&self) -> usize {
        self.encounters.len()
    }

    pub fn offer(&self) -> Option<&RewardOffer> {
        self.offer.as_ref()
    }

    pub fn now(&self) -> Millis {
        self.scheduler.now()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// True when no continuation is waiting on the clock.
    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle()
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.outbox.drain()
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Answers the open reward offer and starts the next encounter.
    pub fn select_equipment(&mut self, selection: &[EquipmentType]) -> Result<(), SelectionError> {
        let offer = self.offer.as_ref().ok_or(SelectionError::NoOfferOpen)?;
        offer.validate(selection)?;

        self.offer = None;
        self.player.add_equipment(selection);
        info!(target: "rift::session", picked = ?selection, "equipment selected");

        self.start_next_encounter();
        Ok(())
    }

    /// Plays a card from the player's hand.
    pub fn play_card(&mut self, id: CardId) -> Result<CardType, PlayError> {
        self.ensure_player_input()?;
        let result = self
            .with_battle(|ctx| ctx.play_card(id))
            .ok_or(PlayError::NoEncounter)?;
        if let Err(err) = &result {
            debug!(target: "rift::session", error = %err, "card play rejected");
        }
        result
    }

    /// Ends the player's turn and starts the active enemy's turn.
    pub fn end_turn(&mut self) -> Result<(), PlayError> {
        self.ensure_player_input()?;

        self.with_battle(|ctx| ctx.end_player_turn());
        if self.player.is_dead() {
            return Ok(());
        }

        let Some(encounter) = self.encounter.as_mut() else {
            return Err(PlayError::NoEncounter);
        };
        encounter.start_enemy_turn();
        let id = encounter.id();
        let timeline = encounter.active();

        let acts = self
            .with_battle(|ctx| ctx.start_enemy_turn())
            .unwrap_or(false);
        if acts {
            self.scheduler.schedule(
                self.config.delays.enemy_action_ms,
                id,
                Continuation::EnemyAct(timeline),
            );
        }
        self.scheduler
            .schedule(self.config.delays.enemy_turn_end_ms, id, Continuation::EnemyFinish);
        Ok(())
    }

    /// Hover feedback: tooltips for each keyword of `card`, or hide them.
    pub fn hover(&mut self, card: Option<CardId>) {
        let hovered = card.and_then(|id| self.player.find_in_hand(id).map(|c| c.card));
        match hovered {
            Some(card) => {
                for effect in card.definition().keywords {
                    self.outbox.push(Notification::ShowTooltip { effect: *effect });
                }
            }
            None => self.outbox.push(Notification::HideTooltip),
        }
    }

    // ========================================================================
    // Time
    // ========================================================================

    /// Moves the game clock forward, firing every continuation that falls
    /// due in order.
    pub fn advance(&mut self, elapsed: Millis) {
        let target = self.scheduler.now().saturating_add(elapsed);
        while let Some(item) = self.scheduler.pop_due(target) {
            self.run(item);
        }
        self.scheduler.advance_clock(target);
    }

    /// Advances until nothing is pending. Returns the time that passed.
    pub fn settle(&mut self) -> Millis {
        let start = self.scheduler.now();
        while let Some(due) = self.scheduler.next_due() {
            let wait = due.saturating_sub(self.scheduler.now());
            self.advance(wait);
        }
        self.scheduler.now() - start
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn ensure_player_input(&self) -> Result<(), PlayError> {
        if self.player.is_dead() {
            return Err(PlayError::PlayerDefeated);
        }
        if self.phase != Phase::InEncounter {
            return Err(PlayError::NoEncounter);
        }
        let encounter = self.encounter.as_ref().ok_or(PlayError::NoEncounter)?;

        match encounter.phase() {
            TurnPhase::Player if encounter.input_enabled() => Ok(()),
            TurnPhase::Player | TurnPhase::Switching => Err(PlayError::TransitionPending),
            TurnPhase::Enemy => Err(PlayError::NotPlayerTurn),
            TurnPhase::Resolved => Err(PlayError::NoEncounter),
        }
    }

    /// Runs `f` against the player and the active enemy, then reacts to any
    /// defeats it caused.
    fn with_battle<R>(&mut self, f: impl FnOnce(&mut BattleContext<'_>) -> R) -> Option<R> {
        let encounter = self.encounter.as_mut()?;
        let mut ctx = BattleContext::new(
            &mut self.player,
            encounter.active_enemy_mut(),
            &mut self.rng,
            &mut self.outbox,
            &self.config,
        );
        let result = f(&mut ctx);
        let report = ctx.finish();
        self.absorb(report);
        Some(result)
    }

    fn absorb(&mut self, report: BattleReport) {
        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        let id = encounter.id();

        if report.enemy_defeated {
            encounter.on_enemy_defeated();
            let timeline = encounter.active();
            info!(target: "rift::session", timeline = %timeline, "enemy defeated");
            self.scheduler.schedule(
                self.config.delays.enemy_death_ms,
                id,
                Continuation::EnemyDeathResolved(timeline),
            );
        }
        if report.player_defeated {
            info!(target: "rift::session", "player defeated");
            self.scheduler.schedule(
                self.config.delays.player_death_ms,
                id,
                Continuation::PlayerDeathResolved,
            );
        }
    }

    fn run(&mut self, item: Scheduled) {
        let current = self.encounter.as_ref().map(Encounter::id);
        if current != Some(item.encounter) {
            trace!(target: "rift::session", continuation = ?item.continuation, "stale continuation dropped");
            return;
        }
        if self.player.is_dead() && item.continuation != Continuation::PlayerDeathResolved {
            trace!(target: "rift::session", continuation = ?item.continuation, "player dead, continuation dropped");
            return;
        }

        trace!(target: "rift::session", at = item.due_at, continuation = ?item.continuation, "running continuation");
        match item.continuation {
            Continuation::EnemyAct(timeline) => {
                let acting = self.encounter.as_ref().is_some_and(|encounter| {
                    encounter.phase() == TurnPhase::Enemy && encounter.active() == timeline
                });
                if !acting {
                    debug!(target: "rift::session", timeline = %timeline, "enemy turn already over, action dropped");
                    return;
                }
                self.with_battle(|ctx| ctx.enemy_act());
            }
            Continuation::EnemyFinish => self.finish_enemy_turn(),
            Continuation::ApplySwitch => self.apply_switch(),
            Continuation::EnemyDeathResolved(timeline) => self.resolve_enemy_death(timeline),
            Continuation::PlayerDeathResolved => self.defeat(),
        }
    }

    fn start_next_encounter(&mut self) {
        let Some(template) = self.encounters.get(self.encounter_index) else {
            self.finish(Phase::Victory);
            return;
        };

        self.next_encounter_id += 1;
        let mut encounter =
            Encounter::new(self.next_encounter_id, template, self.config.switch_countdown);
        let music = template.backdrop.music.clone();
        encounter.begin();

        self.encounter = Some(encounter);
        self.phase = Phase::InEncounter;
        if !music.is_empty() {
            self.outbox.push(Notification::PlayMusic { track: music });
        }

        self.with_battle(|ctx| {
            ctx.begin_battle();
            ctx.start_player_turn();
        });
    }

    fn start_player_turn(&mut self) {
        self.with_battle(|ctx| ctx.start_player_turn());
    }

    fn finish_enemy_turn(&mut self) {
        self.with_battle(|ctx| ctx.end_enemy_turn());
        if self.player.is_dead() {
            return;
        }

        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        let id = encounter.id();
        let outcome = encounter.finish_enemy_turn();

        match outcome {
            AfterEnemyTurn::Continue => self.start_player_turn(),
            AfterEnemyTurn::SwitchPending => {
                self.outbox.push(Notification::TimelineSwitching);
                self.scheduler.schedule(
                    self.config.delays.timeline_switch_ms,
                    id,
                    Continuation::ApplySwitch,
                );
            }
        }
    }

    fn apply_switch(&mut self) {
        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        if !encounter.complete_switch() {
            return;
        }
        let timeline = encounter.active();
        self.outbox.push(Notification::TimelineSwitched { timeline });
        self.start_player_turn();
    }

    fn resolve_enemy_death(&mut self, timeline: Timeline) {
        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        encounter.enemy_mut(timeline).finish_dying();
        if encounter.both_defeated() {
            self.win();
        }
    }

    fn win(&mut self) {
        if self.player.is_dead() {
            return;
        }
        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        if !encounter.declare_won() {
            return;
        }

        let id = encounter.id();
        self.scheduler.cancel_encounter(id);
        self.encounter = None;
        self.encounter_index += 1;

        if self.encounter_index >= self.encounters.len() {
            self.finish(Phase::Victory);
            return;
        }

        self.offer = Some(RewardOffer::post_encounter(
            &self.config.rewards,
            self.player.equipment(),
            &mut self.rng,
        ));
        self.phase = Phase::ChoosingEquipment;
    }

    fn defeat(&mut self) {
        self.finish(Phase::Defeat);
    }

    fn finish(&mut self, phase: Phase) {
        self.phase = phase;
        self.offer = None;
        self.scheduler.clear();
        self.outbox.push(Notification::CutMusic);
        info!(target: "rift::session", outcome = %phase, "run finished");
    }
}
