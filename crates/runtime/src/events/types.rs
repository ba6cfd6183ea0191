//! Event types for different topics.

use rift_core::{Millis, Phase, Timeline};
use serde::{Deserialize, Serialize};

/// Run-level state changes (phase changes, rejected inputs, clock progress).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunEvent {
    /// The run moved between top-level phases.
    PhaseChanged { from: Phase, to: Phase, clock: Millis },

    /// A new encounter started.
    EncounterStarted {
        index: usize,
        name: String,
        clock: Millis,
    },

    /// The active timeline changed.
    TimelineChanged { timeline: Timeline, clock: Millis },

    /// An input was refused; the session is unchanged.
    InputRejected {
        code: String,
        reason: String,
        clock: Millis,
    },
}
