//! Static status effect catalog.
//!
//! Every [`EffectType`] maps to exactly one [`StatusEffectDefinition`]. The
//! table is plain data: the hook behaviour itself lives in the `hook`
//! module and is dispatched by type, so definitions can be inspected and
//! compared in tests.

use bitflags::bitflags;

bitflags! {
    /// Which lifecycle hooks a status effect responds to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HookSet: u8 {
        const ON_APPLY       = 1 << 0;
        const ON_TURN_START  = 1 << 1;
        const ON_TURN_END    = 1 << 2;
        const ON_CARD_PLAYED = 1 << 3;
    }
}

/// Types of status effects.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::EnumCount,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectType {
    // ========================================================================
    // Debuffs
    // ========================================================================
    /// Takes 1 damage at the end of each of its owner's turns.
    Burn,
    /// Halves outgoing attack damage.
    Weak,
    /// Incoming damage is increased by 50%.
    Vulnerable,
    /// Owner skips its next turn.
    Stun,

    // ========================================================================
    // Buffs
    // ========================================================================
    /// Outgoing attack damage is increased by 50%.
    Strength,
    /// Ignores untagged incoming damage until the owner's next turn.
    Immune,
    /// Flat bonus added to every attack before multipliers.
    BonusAttackDamage,

    // ========================================================================
    // Counters (equipment passives)
    // ========================================================================
    /// Every third attack card played inflicts 1 Burn on the opponent.
    Pyromaniac,
    /// Every fifth skill card played grants 1 Strength.
    Momentum,
}

/// Static definition of a status effect type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatusEffectDefinition {
    pub effect: EffectType,
    pub name: &'static str,
    pub description: &'static str,
    /// Tooltip colour used when the effect is linked from card text.
    pub color: &'static str,
    /// Stacking effects sum severity on repeated `add`.
    pub stacks: bool,
    /// Amount added to severity after every turn end; removal at `<= 0`.
    pub decay_per_turn: Option<i32>,
    pub hooks: HookSet,
}

impl EffectType {
    /// Severity at which [`EffectType::Pyromaniac`] fires.
    pub const PYROMANIAC_THRESHOLD: i32 = 3;
    /// Severity at which [`EffectType::Momentum`] fires.
    pub const MOMENTUM_THRESHOLD: i32 = 5;

    pub const fn definition(self) -> StatusEffectDefinition {
        match self {
            Self::Burn => StatusEffectDefinition {
                effect: self,
                name: "Burn",
                description: "At the end of turn, deal 1 damage",
                color: "#990000",
                stacks: true,
                decay_per_turn: Some(-1),
                hooks: HookSet::ON_TURN_END,
            },
            Self::Weak => StatusEffectDefinition {
                effect: self,
                name: "Weakness",
                description: "Reduces damage by 50%",
                color: "#000099",
                stacks: true,
                decay_per_turn: Some(-1),
                hooks: HookSet::empty(),
            },
            Self::Vulnerable => StatusEffectDefinition {
                effect: self,
                name: "Vulnerable",
                description: "Incoming damage is increased by 50%",
                color: "#996666",
                stacks: true,
                decay_per_turn: Some(-1),
                hooks: HookSet::empty(),
            },
            Self::Stun => StatusEffectDefinition {
                effect: self,
                name: "Stun",
                description: "Skip a turn",
                color: "#ff9900",
                stacks: false,
                decay_per_turn: None,
                hooks: HookSet::ON_TURN_START,
            },
            Self::Strength => StatusEffectDefinition {
                effect: self,
                name: "Strength",
                description: "Increases damage by 50%",
                color: "#cc9900",
                stacks: true,
                decay_per_turn: Some(-1),
                hooks: HookSet::empty(),
            },
            Self::Immune => StatusEffectDefinition {
                effect: self,
                name: "Immune",
                description: "Ignore incoming damage",
                color: "#339999",
                stacks: false,
                decay_per_turn: None,
                hooks: HookSet::ON_TURN_START,
            },
            Self::BonusAttackDamage => StatusEffectDefinition {
                effect: self,
                name: "Sharpened",
                description: "Attacks deal extra damage",
                color: "#cccccc",
                stacks: true,
                decay_per_turn: None,
                hooks: HookSet::empty(),
            },
            Self::Pyromaniac => StatusEffectDefinition {
                effect: self,
                name: "Pyromaniac",
                description: "Every 3rd attack inflicts 1 Burn",
                color: "#cc3300",
                stacks: false,
                decay_per_turn: None,
                hooks: HookSet::ON_APPLY.union(HookSet::ON_CARD_PLAYED),
            },
            Self::Momentum => StatusEffectDefinition {
                effect: self,
                name: "Momentum",
                description: "Every 5th skill grants 1 Strength",
                color: "#669966",
                stacks: false,
                decay_per_turn: None,
                hooks: HookSet::ON_APPLY.union(HookSet::ON_CARD_PLAYED),
            },
        }
    }

    pub const fn name(self) -> &'static str {
        self.definition().name
    }

    /// Marker used in card descriptions (`#burn`) to link this effect.
    pub fn keyword_marker(self) -> String {
        format!("#{}", self.name().to_lowercase())
    }
}

impl core::fmt::Display for EffectType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
