//! Timeline controller.
//!
//! An [`Encounter`] owns both timelines and decides, after every enemy turn,
//! whether play continues in the active timeline or switches to the other.
//! It never waits on anything itself; the session schedules the delayed
//! continuations and calls back into the controller when they fire.

use tracing::{debug, info};

use crate::actor::Enemy;
use crate::combat::Combatant;

use super::template::EncounterTemplate;
use super::timeline::Timeline;

/// Pairs one enemy with the shared player for one timeline.
#[derive(Clone, Debug)]
pub struct BattleInstance {
    pub timeline: Timeline,
    pub enemy: Enemy,
}

/// Whose move it is inside an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    Player,
    Enemy,
    /// Timeline switch in flight; input is disabled.
    Switching,
    /// The encounter has been won.
    Resolved,
}

/// What follows a completed enemy turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterEnemyTurn {
    /// The player takes another turn in the same timeline.
    Continue,
    /// A switch was triggered and must be completed after the delay.
    SwitchPending,
}

#[derive(Clone, Debug)]
pub struct Encounter {
    id: u32,
    name: String,
    past: BattleInstance,
    future: BattleInstance,
    active: Timeline,
    countdown: i32,
    countdown_reset: i32,
    phase: TurnPhase,
    input_enabled: bool,
    won: bool,
}

impl Encounter {
    pub fn new(id: u32, template: &EncounterTemplate, switch_countdown: i32) -> Self {
        Self {
            id,
            name: template.name.clone(),
            past: BattleInstance {
                timeline: Timeline::Past,
                enemy: Enemy::from_template(&template.past),
            },
            future: BattleInstance {
                timeline: Timeline::Future,
                enemy: Enemy::from_template(&template.future),
            },
            active: Timeline::Past,
            countdown: switch_countdown,
            countdown_reset: switch_countdown,
            phase: TurnPhase::Player,
            input_enabled: true,
            won: false,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn active(&self) -> Timeline {
        self.active
    }

    pub fn countdown(&self) -> i32 {
        self.countdown
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// False while a timeline switch is in flight.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn instance(&self, timeline: Timeline) -> &BattleInstance {
        match timeline {
            Timeline::Past => &self.past,
            Timeline::Future => &self.future,
        }
    }

    pub fn enemy(&self, timeline: Timeline) -> &Enemy {
        &self.instance(timeline).enemy
    }

    pub fn enemy_mut(&mut self, timeline: Timeline) -> &mut Enemy {
        match timeline {
            Timeline::Past => &mut self.past.enemy,
            Timeline::Future => &mut self.future.enemy,
        }
    }

    pub fn active_enemy(&self) -> &Enemy {
        self.enemy(self.active)
    }

    pub fn active_enemy_mut(&mut self) -> &mut Enemy {
        self.enemy_mut(self.active)
    }

    /// Both timelines' enemies are at zero health.
    pub fn both_defeated(&self) -> bool {
        self.past.enemy.is_defeated() && self.future.enemy.is_defeated()
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Resets the encounter to its opening state: past timeline, full
    /// countdown, player to move.
    pub fn begin(&mut self) {
        self.active = Timeline::Past;
        self.countdown = self.countdown_reset;
        self.phase = TurnPhase::Player;
        self.input_enabled = true;
        info!(target: "rift::encounter", encounter = %self.name, "encounter begins");
    }

    /// The player ended their turn; the active enemy moves next.
    pub fn start_enemy_turn(&mut self) {
        self.phase = TurnPhase::Enemy;
    }

    /// Counts down after an enemy turn and decides whether to switch.
    ///
    /// A switch only happens if the other timeline's enemy is still alive.
    /// Otherwise the countdown is reset and play continues where it is.
    pub fn finish_enemy_turn(&mut self) -> AfterEnemyTurn {
        self.countdown -= 1;

        if self.countdown > 0 {
            self.phase = TurnPhase::Player;
            return AfterEnemyTurn::Continue;
        }

        if self.enemy(self.active.other()).is_defeated() {
            debug!(target: "rift::encounter", "switch suppressed, other timeline resolved");
            self.countdown = self.countdown_reset;
            self.phase = TurnPhase::Player;
            return AfterEnemyTurn::Continue;
        }

        self.phase = TurnPhase::Switching;
        self.input_enabled = false;
        debug!(target: "rift::encounter", to = %self.active.other(), "timeline switch triggered");
        AfterEnemyTurn::SwitchPending
    }

    /// Applies a pending switch. No-op if none is pending.
    pub fn complete_switch(&mut self) -> bool {
        if self.phase != TurnPhase::Switching {
            return false;
        }
        self.active = self.active.other();
        self.countdown = self.countdown_reset;
        self.phase = TurnPhase::Player;
        self.input_enabled = true;
        info!(target: "rift::encounter", timeline = %self.active, "timeline switched");
        true
    }

    /// The active enemy just hit zero health: the next completed enemy turn
    /// moves play to the surviving timeline.
    pub fn on_enemy_defeated(&mut self) {
        self.countdown = 0;
    }

    /// Marks the encounter won. Returns false if it already was.
    pub fn declare_won(&mut self) -> bool {
        if self.won {
            return false;
        }
        self.won = true;
        self.phase = TurnPhase::Resolved;
        self.input_enabled = false;
        info!(target: "rift::encounter", encounter = %self.name, "encounter won");
        true
    }
}
