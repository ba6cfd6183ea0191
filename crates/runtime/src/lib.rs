//! Async runtime around the deterministic rules engine.
//!
//! This crate wires a [`rift_core::GameSession`] into a worker task with a
//! command channel, a real-time ticker and a topic-based event bus. Consumers
//! embed [`Runtime`] to host a run and interact with it through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - `workers` keeps the session task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, RunEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
