//! Session worker that owns the authoritative [`rift_core::GameSession`].
//!
//! Receives commands from [`crate::RuntimeHandle`], applies them to the
//! session, advances the game clock on a real-time ticker, and publishes
//! notifications and run events to the EventBus.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use rift_core::{
    CardId, CardType, EquipmentType, GameSession, Millis, Phase, SessionSnapshot,
    Timeline,
};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, RunEvent};

/// Commands that can be sent to the session worker
pub enum Command {
    /// Answer the open equipment offer.
    SelectEquipment {
        selection: Vec<EquipmentType>,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Play a card from the hand.
    PlayCard {
        card: CardId,
        reply: oneshot::Sender<Result<CardType>>,
    },
    /// End the player's turn.
    EndTurn { reply: oneshot::Sender<Result<()>> },
    /// Hover feedback for a card, or none to hide tooltips.
    Hover { card: Option<CardId> },
    /// Query the current session state (read-only).
    QuerySnapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
}

/// What the worker last reported, used to publish only real changes.
#[derive(Clone, Copy, PartialEq)]
struct Observed {
    phase: Phase,
    encounter: Option<(usize, Timeline)>,
}

impl Observed {
    fn of(session: &GameSession) -> Self {
        Self {
            phase: session.phase(),
            encounter: session
                .encounter()
                .map(|encounter| (session.encounter_index(), encounter.active())),
        }
    }
}

/// Splits `elapsed` into whole game milliseconds and the leftover that
/// carries into the next tick.
fn whole_millis(elapsed: Duration) -> (Millis, Duration) {
    let millis = elapsed.as_millis() as Millis;
    (millis, elapsed - Duration::from_millis(millis))
}

/// Background task that processes session commands and drives the clock.
pub struct SessionWorker {
    session: GameSession,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    tick_interval: Duration,
    observed: Observed,
}

impl SessionWorker {
    /// Creates a new session worker.
    pub fn new(
        session: GameSession,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        tick_interval: Duration,
    ) -> Self {
        info!(
            target: "runtime::worker",
            seed = session.seed(),
            encounters = session.encounter_count(),
            tick_ms = tick_interval.as_millis() as u64,
            "session worker initialized"
        );

        let observed = Observed::of(&session);
        Self {
            session,
            command_rx,
            event_bus,
            tick_interval,
            observed,
        }
    }

    /// Main worker loop. Ends when every command sender has been dropped.
    pub async fn run(mut self) {
        let mut ticker = tokio::time::interval(self.tick_interval.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_tick = Instant::now();
        let mut carry = Duration::ZERO;

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                now = ticker.tick() => {
                    let elapsed = carry + now.saturating_duration_since(last_tick);
                    last_tick = now;
                    let (millis, rest) = whole_millis(elapsed);
                    carry = rest;
                    self.advance(millis);
                }
            }
        }

        debug!(target: "runtime::worker", "command channel closed, worker stopping");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SelectEquipment { selection, reply } => {
                let result = self
                    .session
                    .select_equipment(&selection)
                    .map_err(RuntimeError::from);
                self.finish_input(reply, result);
            }
            Command::PlayCard { card, reply } => {
                let result = self.session.play_card(card).map_err(RuntimeError::from);
                self.finish_input(reply, result);
            }
            Command::EndTurn { reply } => {
                let result = self.session.end_turn().map_err(RuntimeError::from);
                self.finish_input(reply, result);
            }
            Command::Hover { card } => {
                self.session.hover(card);
                self.flush();
            }
            Command::QuerySnapshot { reply } => {
                if reply.send(self.session.snapshot()).is_err() {
                    debug!(target: "runtime::worker", "QuerySnapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Publishes the outcome of an input and replies to the caller.
    fn finish_input<T>(&mut self, reply: oneshot::Sender<Result<T>>, result: Result<T>) {
        if let Err(err) = &result {
            debug!(target: "runtime::worker", error = %err, "input rejected");
            self.publish_rejection(err);
        }
        self.flush();
        if reply.send(result).is_err() {
            debug!(target: "runtime::worker", "input reply channel closed (caller dropped)");
        }
    }

    fn advance(&mut self, elapsed: Millis) {
        let busy = !self.session.is_idle();
        self.session.advance(elapsed);
        if busy {
            self.flush();
        }
    }

    fn publish_rejection(&self, err: &RuntimeError) {
        let Some(code) = err.rejection_code() else {
            return;
        };
        self.event_bus.publish(Event::Run(RunEvent::InputRejected {
            code: code.to_owned(),
            reason: err.to_string(),
            clock: self.session.now(),
        }));
    }

    /// Forwards queued notifications and any run-level changes.
    fn flush(&mut self) {
        for notification in self.session.drain_notifications() {
            self.event_bus.publish(Event::Presentation(notification));
        }

        let current = Observed::of(&self.session);
        if current == self.observed {
            return;
        }
        let previous = std::mem::replace(&mut self.observed, current);
        let clock = self.session.now();

        if previous.phase != current.phase {
            info!(
                target: "runtime::worker",
                from = %previous.phase,
                to = %current.phase,
                "run phase changed"
            );
            self.event_bus.publish(Event::Run(RunEvent::PhaseChanged {
                from: previous.phase,
                to: current.phase,
                clock,
            }));
        }

        match (previous.encounter, current.encounter) {
            (before, Some((index, _))) if before.map(|(i, _)| i) != Some(index) => {
                let name = self
                    .session
                    .encounter()
                    .map(|encounter| encounter.name().to_owned())
                    .unwrap_or_default();
                self.event_bus.publish(Event::Run(RunEvent::EncounterStarted {
                    index,
                    name,
                    clock,
                }));
            }
            (Some((_, before)), Some((_, timeline))) if before != timeline => {
                self.event_bus
                    .publish(Event::Run(RunEvent::TimelineChanged { timeline, clock }));
            }
            _ => {}
        }
    }
}
