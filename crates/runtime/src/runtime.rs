//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive a run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use rift_content::{ConfigLoader, EncounterLoader, builtin_config, builtin_encounters};
use rift_core::{EncounterTemplate, GameConfig, GameSession};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::workers::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Run seed. A fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Encounter list file. The built-in list is used when absent.
    pub encounters_path: Option<PathBuf>,
    /// Real time between clock advances.
    pub tick_interval: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            seed: None,
            encounters_path: None,
            tick_interval: Duration::from_millis(Self::DEFAULT_TICK_MS),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_TICK_MS: u64 = 16;

    /// Reads overrides from the process environment.
    ///
    /// | variable | effect |
    /// |---|---|
    /// | `RIFT_SEED` | fixed run seed |
    /// | `RIFT_CONFIG` | TOML game configuration file |
    /// | `RIFT_ENCOUNTERS` | RON encounter list file |
    /// | `RIFT_TICK_MS` | ticker interval |
    /// | `RIFT_EVENT_BUFFER` | per-topic event capacity |
    /// | `RIFT_COMMAND_BUFFER` | command channel capacity |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        config.game_config = match lookup("RIFT_CONFIG") {
            Some(path) => ConfigLoader::load(Path::new(&path)).map_err(RuntimeError::Content)?,
            None => builtin_config().map_err(RuntimeError::Content)?,
        };
        config.encounters_path = lookup("RIFT_ENCOUNTERS").map(PathBuf::from);

        if let Some(seed) = read_env(&lookup, "RIFT_SEED")? {
            config.seed = Some(seed);
        }
        if let Some(ms) = read_env::<u64>(&lookup, "RIFT_TICK_MS")? {
            config.tick_interval = Duration::from_millis(ms);
        }
        if let Some(size) = read_env(&lookup, "RIFT_EVENT_BUFFER")? {
            config.event_buffer_size = size;
        }
        if let Some(size) = read_env(&lookup, "RIFT_COMMAND_BUFFER")? {
            config.command_buffer_size = size;
        }
        Ok(config)
    }
}

fn read_env<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| RuntimeError::InvalidEnv { key, value })
}

/// Main runtime that hosts a run
///
/// Design: Runtime owns the worker and coordinates shutdown.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    seed: u64,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Seed the run was started with, for replaying it.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every outstanding handle clone is dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    encounters: Option<Vec<EncounterTemplate>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            encounters: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the encounter list directly, bypassing file and built-in content
    pub fn encounters(mut self, encounters: Vec<EncounterTemplate>) -> Self {
        self.encounters = Some(encounters);
        self
    }

    /// Fix the run seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the runtime and start its worker
    pub async fn build(self) -> Result<Runtime> {
        let encounters = match (self.encounters, &self.config.encounters_path) {
            (Some(encounters), _) => encounters,
            (None, Some(path)) => EncounterLoader::load(path).map_err(RuntimeError::Content)?,
            (None, None) => builtin_encounters().map_err(RuntimeError::Content)?,
        };
        let seed = self.config.seed.unwrap_or_else(rand::random);

        info!(
            target: "runtime::worker",
            seed,
            encounters = encounters.len(),
            "starting runtime"
        );

        let session = GameSession::new(self.config.game_config.clone(), encounters, seed);

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let worker = SessionWorker::new(session, command_rx, event_bus, self.config.tick_interval);
        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            seed,
            worker_handle,
        })
    }
}
