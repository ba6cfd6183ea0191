//! Static card catalog.

use crate::status::EffectType;

/// Broad card family; status hooks react to the family of a played card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CardFamily {
    Attack,
    Skill,
    /// Dead cards injected by enemies; playing them does nothing.
    Failure,
}

/// Every card the game knows about.
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
pub enum CardType {
    // ========================================================================
    // Starting equipment
    // ========================================================================
    Blindshot,
    SweepStrike,
    Zap,
    Meditate,
    Slam,
    Distract,

    // ========================================================================
    // Arcane equipment
    // ========================================================================
    Ignite,
    MagicBolt,
    FrostShield,
    AncestorsCall,
    BloodthirstyBackstab,
    BigBang,

    // ========================================================================
    // Hi-tech equipment
    // ========================================================================
    LaserBeam,
    NaniteRepair,
    EmStrike,
    AntimatterExplosion,
    ElectronicField,
    QuantumJump,

    // ========================================================================
    // Failure
    // ========================================================================
    Static,
}

/// Static definition of a card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardDefinition {
    pub card: CardType,
    pub name: &'static str,
    /// Rules text. `#keyword` markers link to entries in [`Self::keywords`].
    pub description: &'static str,
    pub family: CardFamily,
    /// Stamina cost; `None` plays for free.
    pub cost: Option<u32>,
    pub keywords: &'static [EffectType],
}

impl CardDefinition {
    pub const fn stamina_cost(&self) -> u32 {
        match self.cost {
            Some(cost) => cost,
            None => 0,
        }
    }

    /// Splits the description into plain text and linked keywords.
    ///
    /// A marker that does not resolve against this card's keywords stays in
    /// the text untouched.
    pub fn segments(&self) -> Vec<DescriptionSegment> {
        let mut segments = Vec::new();
        let mut rest = self.description;

        while let Some(start) = rest.find('#') {
            let tail = &rest[start + 1..];
            let len = tail
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(tail.len());
            let word = &tail[..len];

            let linked = self
                .keywords
                .iter()
                .copied()
                .find(|k| k.name().eq_ignore_ascii_case(word));

            match linked {
                Some(effect) => {
                    if start > 0 {
                        segments.push(DescriptionSegment::Text(&rest[..start]));
                    }
                    segments.push(DescriptionSegment::Keyword(effect));
                }
                None => segments.push(DescriptionSegment::Text(&rest[..start + 1 + len])),
            }
            rest = &tail[len..];
        }

        if !rest.is_empty() {
            segments.push(DescriptionSegment::Text(rest));
        }
        segments
    }

    /// Description with markers replaced by `style(effect)`.
    pub fn render(&self, style: impl Fn(EffectType) -> String) -> String {
        self.segments()
            .into_iter()
            .map(|segment| match segment {
                DescriptionSegment::Text(text) => text.to_owned(),
                DescriptionSegment::Keyword(effect) => style(effect),
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptionSegment {
    Text(&'static str),
    Keyword(EffectType),
}

impl CardType {
    pub const fn definition(self) -> CardDefinition {
        use CardFamily::{Attack, Failure, Skill};
        use EffectType::*;

        let (name, description, family, cost, keywords): (
            &'static str,
            &'static str,
            CardFamily,
            Option<u32>,
            &'static [EffectType],
        ) = match self {
            Self::Blindshot => (
                "Blindshot",
                "Deal 2 damage\nInflict 2 #burn\nInflict 1 #weakness",
                Attack,
                Some(2),
                &[Burn, Weak],
            ),
            Self::SweepStrike => (
                "Sweep Strike",
                "Deal 2 damage\n50% chance to inflict #stun",
                Attack,
                Some(1),
                &[Stun],
            ),
            Self::Zap => (
                "Zap",
                "Deal 3 damage\nInflict #stun",
                Attack,
                Some(2),
                &[Stun],
            ),
            Self::Meditate => (
                "Meditate",
                "Gain 5 block and draw a card",
                Skill,
                Some(1),
                &[],
            ),
            Self::Slam => (
                "Slam",
                "Deal 4 damage\nDeal 2 extra damage if the enemy has #weakness or #stun",
                Attack,
                Some(2),
                &[Stun, Weak],
            ),
            Self::Distract => (
                "Distract",
                "Inflict 2 #weakness",
                Skill,
                Some(1),
                &[Weak],
            ),
            Self::Ignite => (
                "Ignite",
                "Deal 4 damage\nIf the enemy has #burn, deal 4 extra damage\nInflict 2 #burn",
                Attack,
                Some(2),
                &[Burn],
            ),
            Self::MagicBolt => ("Magic Bolt", "Deal 4 damage", Attack, Some(1), &[]),
            Self::FrostShield => ("Frost Shield", "Gain 8 block", Skill, Some(1), &[]),
            Self::AncestorsCall => (
                "Ancestor's Call",
                "Gain 2 #strength\nInflict 1 #weakness",
                Skill,
                Some(1),
                &[Strength, Weak],
            ),
            Self::BloodthirstyBackstab => (
                "Bloodthirsty Backstab",
                "Deal 3 damage\nHeal for damage dealt",
                Attack,
                Some(1),
                &[],
            ),
            Self::BigBang => (
                "Big Bang",
                "Deal 8 damage\nTake 8 damage",
                Skill,
                Some(2),
                &[],
            ),
            Self::LaserBeam => (
                "Laser Beam",
                "Deal 6 damage, ignore defense",
                Attack,
                Some(1),
                &[],
            ),
            Self::NaniteRepair => (
                "Nanite Repair",
                "Heal 3 health\nGain 1 #strength",
                Skill,
                Some(1),
                &[Strength],
            ),
            Self::EmStrike => (
                "EM Strike",
                "Deal 3 damage\nInflict 2 #vulnerable",
                Attack,
                Some(2),
                &[Vulnerable],
            ),
            Self::AntimatterExplosion => (
                "Antimatter Explosion",
                "Deal 6 damage\nInflict 1 #vulnerable",
                Attack,
                Some(2),
                &[Vulnerable],
            ),
            Self::ElectronicField => ("Electronic Field", "Gain 4 block", Skill, Some(1), &[]),
            Self::QuantumJump => (
                "Quantum Jump",
                "Gain #immune until next turn",
                Skill,
                Some(1),
                &[Immune],
            ),
            Self::Static => ("Static", "Does nothing", Failure, None, &[]),
        };

        CardDefinition {
            card: self,
            name,
            description,
            family,
            cost,
            keywords,
        }
    }

    pub const fn name(self) -> &'static str {
        self.definition().name
    }

    pub const fn family(self) -> CardFamily {
        self.definition().family
    }

    pub const fn cost(self) -> u32 {
        self.definition().stamina_cost()
    }
}

impl core::fmt::Display for CardType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_marker_links_to_a_declared_keyword() {
        for card in CardType::iter() {
            let definition = card.definition();
            for segment in definition.segments() {
                if let DescriptionSegment::Text(text) = segment {
                    assert!(!text.contains('#'), "{card:?} has an unlinked marker");
                }
            }
        }
    }

    #[test]
    fn render_replaces_markers_with_styled_names() {
        let text = CardType::Blindshot
            .definition()
            .render(|effect| effect.name().to_uppercase());
        assert_eq!(text, "Deal 2 damage\nInflict 2 BURN\nInflict 1 WEAKNESS");
    }

    #[test]
    fn unknown_markers_are_left_in_place() {
        let definition = CardDefinition {
            description: "Gain #nothing",
            ..CardType::Meditate.definition()
        };
        assert_eq!(
            definition.segments(),
            vec![
                DescriptionSegment::Text("Gain #nothing")
            ]
        );
    }

    #[test]
    fn failure_cards_are_free() {
        assert_eq!(CardType::Static.family(), CardFamily::Failure);
        assert_eq!(CardType::Static.cost(), 0);
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!("laser_beam".parse::<CardType>(), Ok(CardType::LaserBeam));
        assert_eq!("EM_STRIKE".parse::<CardType>(), Ok(CardType::EmStrike));
    }
}
