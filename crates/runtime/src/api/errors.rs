//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, content loading, and rejected
//! session inputs so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use rift_core::{GameError, PlayError, SelectionError, SessionError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    /// The session refused an input.
    #[error(transparent)]
    Rejected(#[from] SessionError),

    #[error("failed to load content")]
    Content(#[source] anyhow::Error),

    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}

impl RuntimeError {
    /// True when the session refused an input and is otherwise unchanged.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Stable identifier of a rejection, if this is one.
    pub fn rejection_code(&self) -> Option<&'static str> {
        match self {
            Self::Rejected(err) => Some(err.error_code()),
            _ => None,
        }
    }
}

impl From<PlayError> for RuntimeError {
    fn from(err: PlayError) -> Self {
        Self::Rejected(err.into())
    }
}

impl From<SelectionError> for RuntimeError {
    fn from(err: SelectionError) -> Self {
        Self::Rejected(err.into())
    }
}
