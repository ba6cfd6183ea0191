use super::kind::{CardDefinition, CardType};

/// Stable identity of one physical card within a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardId(pub u32);

impl core::fmt::Display for CardId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pile a card currently sits in.
///
/// Discarded cards and played cards share the used pile; it is the pile that
/// is recycled into the deck once the deck runs dry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Pile {
    Deck,
    Hand,
    Used,
}

/// Runtime card owned by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInstance {
    pub id: CardId,
    pub card: CardType,
    pub pile: Pile,
}

impl CardInstance {
    pub const fn new(id: CardId, card: CardType, pile: Pile) -> Self {
        Self { id, card, pile }
    }

    pub const fn definition(&self) -> CardDefinition {
        self.card.definition()
    }

    pub(crate) fn moved_to(mut self, pile: Pile) -> Self {
        self.pile = pile;
        self
    }
}
