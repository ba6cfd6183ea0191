//! Fire-and-forget presentation signals.
//!
//! The rules never read these back. A frontend that ignores every
//! notification still sees a correct game.

use crate::combat::Side;
use crate::encounter::Timeline;
use crate::status::EffectType;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Notification {
    PlaySound { name: String, volume: f32 },
    PlayMusic { track: String },
    CutMusic,
    ShakeCamera { power: u32 },
    ShowTooltip { effect: EffectType },
    HideTooltip,
    DamageNumber { target: Side, amount: u32 },
    /// Input is disabled until the matching `TimelineSwitched`.
    TimelineSwitching,
    TimelineSwitched { timeline: Timeline },
}

impl Notification {
    pub fn sound(name: impl Into<String>) -> Self {
        Self::sound_at(name, 1.0)
    }

    pub fn sound_at(name: impl Into<String>, volume: f32) -> Self {
        Self::PlaySound {
            name: name.into(),
            volume,
        }
    }
}

/// Queue of notifications awaiting delivery.
#[derive(Clone, Debug, Default)]
pub struct Outbox {
    pending: Vec<Notification>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.pending.push(notification);
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        core::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }
}
