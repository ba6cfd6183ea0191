//! Equipment catalog.
//!
//! Equipment is the player's persistent build: every battle the library is
//! rebuilt from the cards granted by equipped items, and each item may grant
//! a status effect when an encounter starts.

use strum::IntoEnumIterator;

use crate::card::CardType;
use crate::status::EffectType;

/// Reward pool an item belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentCategory {
    Starting,
    Arcane,
    Hitech,
}

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
pub enum EquipmentType {
    PepperSpray,
    SelfieStick,
    StunBaton,
    YogaMat,
    FryingPan,
    LaserPointer,

    Grimoire,
    FrostAmulet,
    RitualDagger,

    LaserRifle,
    NaniteKit,
    EmpGauntlet,
}

/// Static definition of an equipment item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EquipmentDefinition {
    pub equipment: EquipmentType,
    pub name: &'static str,
    pub category: EquipmentCategory,
    /// Cards added to the library, duplicates included.
    pub cards: &'static [CardType],
    /// Status effect granted to the player when an encounter starts.
    pub on_encounter_start: Option<EffectType>,
}

impl EquipmentType {
    pub const fn definition(self) -> EquipmentDefinition {
        use CardType::*;
        use EquipmentCategory::{Arcane, Hitech, Starting};

        let (name, category, cards, on_encounter_start): (
            &'static str,
            EquipmentCategory,
            &'static [CardType],
            Option<EffectType>,
        ) = match self {
            Self::PepperSpray => (
                "Pepper Spray",
                Starting,
                &[Blindshot, Blindshot],
                Some(EffectType::Pyromaniac),
            ),
            Self::SelfieStick => ("Selfie Stick", Starting, &[SweepStrike, SweepStrike], None),
            Self::StunBaton => ("Stun Baton", Starting, &[Zap, Zap], None),
            Self::YogaMat => (
                "Yoga Mat",
                Starting,
                &[Meditate, Meditate],
                Some(EffectType::Momentum),
            ),
            Self::FryingPan => ("Frying Pan", Starting, &[Slam, Slam], None),
            Self::LaserPointer => ("Laser Pointer", Starting, &[Distract, Distract], None),

            Self::Grimoire => ("Grimoire", Arcane, &[Ignite, MagicBolt], None),
            Self::FrostAmulet => ("Frost Amulet", Arcane, &[FrostShield, AncestorsCall], None),
            Self::RitualDagger => (
                "Ritual Dagger",
                Arcane,
                &[BloodthirstyBackstab, BigBang],
                None,
            ),

            Self::LaserRifle => (
                "Laser Rifle",
                Hitech,
                &[LaserBeam, AntimatterExplosion],
                None,
            ),
            Self::NaniteKit => ("Nanite Kit", Hitech, &[NaniteRepair, ElectronicField], None),
            Self::EmpGauntlet => ("EMP Gauntlet", Hitech, &[EmStrike, QuantumJump], None),
        };

        EquipmentDefinition {
            equipment: self,
            name,
            category,
            cards,
            on_encounter_start,
        }
    }

    pub const fn name(self) -> &'static str {
        self.definition().name
    }

    pub const fn category(self) -> EquipmentCategory {
        self.definition().category
    }

    /// Every item of `category`, in catalog order.
    pub fn in_category(category: EquipmentCategory) -> Vec<EquipmentType> {
        Self::iter().filter(|e| e.category() == category).collect()
    }
}

impl core::fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
