use crate::actor::EnemyTemplate;

/// Flavour data for the presentation layer. Has no effect on the rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Backdrop {
    pub past_background: String,
    pub future_background: String,
    pub music: String,
}

/// One entry of the ordered encounter list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterTemplate {
    pub name: String,
    pub past: EnemyTemplate,
    pub future: EnemyTemplate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub backdrop: Backdrop,
}

impl EncounterTemplate {
    pub fn new(name: impl Into<String>, past: EnemyTemplate, future: EnemyTemplate) -> Self {
        Self {
            name: name.into(),
            past,
            future,
            backdrop: Backdrop::default(),
        }
    }

    pub fn with_backdrop(mut self, backdrop: Backdrop) -> Self {
        self.backdrop = backdrop;
        self
    }
}
