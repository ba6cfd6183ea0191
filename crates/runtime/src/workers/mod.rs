//! Worker tasks that back the runtime orchestration.
//!
//! The session worker owns the authoritative [`rift_core::GameSession`] and
//! is the only task that mutates it.

mod session;

pub use session::{Command, SessionWorker};
