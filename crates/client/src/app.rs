//! Line-oriented game loop over stdin.
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, warn};

use rift_core::{CardId, CardType, EquipmentType, SessionSnapshot};
use rift_runtime::{Event, RunEvent, RuntimeError, RuntimeHandle, Topic};

use crate::command::{self, Command, HELP};
use crate::render;

enum Flow {
    Continue,
    Quit,
}

pub struct App {
    handle: RuntimeHandle,
    presentation: broadcast::Receiver<Event>,
    run: broadcast::Receiver<Event>,
}

impl App {
    pub fn new(handle: RuntimeHandle) -> Self {
        let presentation = handle.subscribe(Topic::Presentation);
        let run = handle.subscribe(Topic::Run);
        Self {
            handle,
            presentation,
            run,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        self.redraw(&mut stdout).await?;
        stdout.write_all(b"type `help` for commands\n> ").await?;
        stdout.flush().await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if line.trim().is_empty() {
                        stdout.write_all(b"> ").await?;
                        stdout.flush().await?;
                        continue;
                    }
                    match line.parse::<Command>() {
                        Ok(command) => {
                            if let Flow::Quit = self.execute(command, &mut stdout).await? {
                                break;
                            }
                        }
                        Err(err) => {
                            stdout.write_all(format!("{err}\n").as_bytes()).await?;
                        }
                    }
                    stdout.write_all(b"> ").await?;
                    stdout.flush().await?;
                }
                event = self.presentation.recv() => {
                    if !Self::print_event(event, &mut stdout).await? {
                        break;
                    }
                }
                event = self.run.recv() => {
                    let redraw = matches!(
                        &event,
                        Ok(Event::Run(RunEvent::PhaseChanged { .. } | RunEvent::EncounterStarted { .. }))
                    );
                    if !Self::print_event(event, &mut stdout).await? {
                        break;
                    }
                    if redraw {
                        self.redraw(&mut stdout).await?;
                        stdout.write_all(b"> ").await?;
                        stdout.flush().await?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Prints an event; `false` once the runtime has gone away.
    async fn print_event(
        event: Result<Event, RecvError>,
        stdout: &mut tokio::io::Stdout,
    ) -> Result<bool> {
        match event {
            Ok(event) => {
                if let Some(line) = render::event(&event) {
                    stdout.write_all(format!("\n{line}\n").as_bytes()).await?;
                    stdout.flush().await?;
                }
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(target: "rift::client", skipped, "event receiver lagged");
                Ok(true)
            }
            Err(RecvError::Closed) => Ok(false),
        }
    }

    async fn redraw(&self, stdout: &mut tokio::io::Stdout) -> Result<()> {
        let snapshot = self.handle.snapshot().await?;
        stdout
            .write_all(render::snapshot(&snapshot).as_bytes())
            .await?;
        stdout.flush().await?;
        Ok(())
    }

    async fn execute(&self, command: Command, stdout: &mut tokio::io::Stdout) -> Result<Flow> {
        debug!(target: "rift::client", ?command, "command");
        let outcome = match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => {
                stdout.write_all(format!("{HELP}\n").as_bytes()).await?;
                return Ok(Flow::Continue);
            }
            Command::State => {
                self.redraw(stdout).await?;
                return Ok(Flow::Continue);
            }
            Command::Json => {
                let snapshot = self.handle.snapshot().await?;
                let json = serde_json::to_string_pretty(&snapshot)?;
                stdout.write_all(format!("{json}\n").as_bytes()).await?;
                return Ok(Flow::Continue);
            }
            Command::Inspect(position) => {
                let Some(card) = self.hand_card(position).await? else {
                    stdout.write_all(b"no card at that position\n").await?;
                    return Ok(Flow::Continue);
                };
                self.handle.hover(Some(card.0)).await?;
                stdout
                    .write_all(render::inspect(card.1).as_bytes())
                    .await?;
                self.handle.hover(None).await?;
                return Ok(Flow::Continue);
            }
            Command::Play(position) => match self.hand_card(position).await? {
                Some((id, _)) => self.handle.play_card(id).await.map(|_| ()),
                None => {
                    stdout.write_all(b"no card at that position\n").await?;
                    return Ok(Flow::Continue);
                }
            },
            Command::EndTurn => self.handle.end_turn().await,
            Command::Pick(positions) => match self.offered(&positions).await? {
                Some(selection) => self.handle.select_equipment(selection).await,
                None => {
                    stdout.write_all(b"no offer item at that position\n").await?;
                    return Ok(Flow::Continue);
                }
            },
        };

        match outcome {
            Ok(()) => self.redraw(stdout).await?,
            // Rejections are reported through the run topic.
            Err(err) if err.is_rejection() => {}
            Err(RuntimeError::CommandChannelClosed | RuntimeError::ReplyChannelClosed(_)) => {
                return Ok(Flow::Quit);
            }
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }

    /// Positions refer to the current hand, as `state` would draw it.
    async fn hand_card(&self, position: usize) -> Result<Option<(CardId, CardType)>> {
        let snapshot = self.handle.snapshot().await?;
        let hand: Vec<_> = snapshot
            .player
            .hand
            .iter()
            .map(|card| (card.id, card.card))
            .collect();
        Ok(command::nth(&hand, position))
    }

    async fn offered(&self, positions: &[usize]) -> Result<Option<Vec<EquipmentType>>> {
        let snapshot = self.handle.snapshot().await?;
        Ok(offer_positions(&snapshot, positions))
    }
}

fn offer_positions(snapshot: &SessionSnapshot, positions: &[usize]) -> Option<Vec<EquipmentType>> {
    let items: Vec<_> = snapshot.offer.as_ref()?.items().collect();
    positions
        .iter()
        .map(|&position| command::nth(&items, position))
        .collect()
}
