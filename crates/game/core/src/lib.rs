//! Deterministic rules for the two-timeline card battler.
//!
//! `rift-core` defines the canonical rules (cards, status effects, combat,
//! timeline switching, rewards) and exposes pure APIs that the runtime, the
//! CLI and offline tools share. All run-level mutation flows through
//! [`session::GameSession`]; time only moves when the caller advances it.
pub mod actor;
pub mod card;
pub mod combat;
pub mod config;
pub mod encounter;
pub mod equipment;
pub mod error;
pub mod notify;
pub mod reward;
pub mod rng;
pub mod schedule;
pub mod session;
pub mod status;

pub use actor::{ActionCycle, DeathState, Enemy, EnemyAction, EnemyTemplate, Player};
pub use card::{CardDefinition, CardFamily, CardId, CardInstance, CardType, DescriptionSegment, Pile};
pub use combat::{
    BattleContext, BattleReport, Combatant, DamageReport, Side, Vitals, enemy_attack_damage,
    modify_attack_damage,
};
pub use config::{DelayConfig, GameConfig, RewardConfig};
pub use encounter::{
    AfterEnemyTurn, Backdrop, BattleInstance, Encounter, EncounterTemplate, Timeline, TurnPhase,
};
pub use equipment::{EquipmentCategory, EquipmentDefinition, EquipmentType};
pub use error::{ErrorSeverity, GameError, PlayError, SelectionError, SessionError};
pub use notify::{Notification, Outbox};
pub use reward::{OfferPool, RewardOffer};
pub use rng::GameRng;
pub use schedule::{Continuation, Millis, Scheduled, Scheduler};
pub use session::{
    CardView, EffectView, EncounterView, EnemyView, GameSession, Phase, PlayerView,
    SessionSnapshot,
};
pub use status::{
    EffectType, HookEffect, HookOutcome, HookSet, HookTarget, StatusEffectDefinition,
    StatusEffectInstance, StatusEffectTracker,
};
