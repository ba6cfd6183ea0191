//! Common error infrastructure for rift-core.
//!
//! Player input that the rules reject surfaces as a typed error at the
//! session boundary. Callers are free to treat every one of them as a no-op:
//! no state is mutated when an error is returned.

use crate::card::{CardId, CardType};
use crate::equipment::{EquipmentCategory, EquipmentType};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed later (e.g. after a transition)
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted game state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all rift-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Rejected card plays and turn endings.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("no encounter is in progress")]
    NoEncounter,

    #[error("it is not the player's turn")]
    NotPlayerTurn,

    #[error("input is disabled while the timeline switch is pending")]
    TransitionPending,

    #[error("the player has been defeated")]
    PlayerDefeated,

    #[error("card {0} is not in hand")]
    CardNotInHand(CardId),

    #[error("{card} costs {cost} stamina but only {available} is available")]
    InsufficientStamina {
        card: CardType,
        cost: u32,
        available: u32,
    },
}

impl GameError for PlayError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TransitionPending | Self::NotPlayerTurn => ErrorSeverity::Recoverable,
            Self::NoEncounter
            | Self::PlayerDefeated
            | Self::CardNotInHand(_)
            | Self::InsufficientStamina { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoEncounter => "PLAY_NO_ENCOUNTER",
            Self::NotPlayerTurn => "PLAY_NOT_PLAYER_TURN",
            Self::TransitionPending => "PLAY_TRANSITION_PENDING",
            Self::PlayerDefeated => "PLAY_PLAYER_DEFEATED",
            Self::CardNotInHand(_) => "PLAY_CARD_NOT_IN_HAND",
            Self::InsufficientStamina { .. } => "PLAY_INSUFFICIENT_STAMINA",
        }
    }
}

/// Rejected equipment selections.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no equipment offer is open")]
    NoOfferOpen,

    #[error("{0} was not offered")]
    NotOffered(EquipmentType),

    #[error("{0} was selected more than once")]
    Duplicate(EquipmentType),

    #[error("expected {expected} {category} item(s), got {actual}")]
    WrongCount {
        category: EquipmentCategory,
        expected: usize,
        actual: usize,
    },
}

impl GameError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoOfferOpen => ErrorSeverity::Recoverable,
            Self::NotOffered(_) | Self::Duplicate(_) | Self::WrongCount { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoOfferOpen => "SELECT_NO_OFFER",
            Self::NotOffered(_) => "SELECT_NOT_OFFERED",
            Self::Duplicate(_) => "SELECT_DUPLICATE",
            Self::WrongCount { .. } => "SELECT_WRONG_COUNT",
        }
    }
}

/// Umbrella error for the session facade.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Play(#[from] PlayError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Play(e) => e.severity(),
            Self::Selection(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Play(e) => e.error_code(),
            Self::Selection(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_rejections_are_recoverable() {
        assert!(PlayError::TransitionPending.severity().is_recoverable());
        assert!(!PlayError::CardNotInHand(CardId(3)).severity().is_recoverable());
    }

    #[test]
    fn session_error_delegates_codes() {
        let err = SessionError::from(SelectionError::NoOfferOpen);
        assert_eq!(err.error_code(), "SELECT_NO_OFFER");
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
    }
}
