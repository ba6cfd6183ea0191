//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! sending player input or streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use rift_core::{CardId, CardType, EquipmentType, SessionSnapshot};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Answer the open equipment offer
    pub async fn select_equipment(&self, selection: Vec<EquipmentType>) -> Result<()> {
        self.request(|reply| Command::SelectEquipment { selection, reply })
            .await?
    }

    /// Play a card from the player's hand
    pub async fn play_card(&self, card: CardId) -> Result<CardType> {
        self.request(|reply| Command::PlayCard { card, reply }).await?
    }

    /// End the player's turn
    pub async fn end_turn(&self) -> Result<()> {
        self.request(|reply| Command::EndTurn { reply }).await?
    }

    /// Show tooltips for a hovered card, or hide them with `None`
    pub async fn hover(&self, card: Option<CardId>) -> Result<()> {
        self.command_tx
            .send(Command::Hover { card })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Query the current session state (read-only snapshot)
    pub async fn snapshot(&self) -> Result<SessionSnapshot> {
        self.request(|reply| Command::QuerySnapshot { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Presentation` - Sounds, music, camera shake, tooltips, damage numbers
    /// - `Topic::Run` - Phase changes, encounter and timeline changes, rejected input
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use rift_runtime::Topic;
    ///
    /// let mut run_rx = handle.subscribe(Topic::Run);
    /// while let Ok(event) = run_rx.recv().await {
    ///     // Handle run events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
