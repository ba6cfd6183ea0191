//! Equipment reward offers.
//!
//! A run opens with a pick from the starting pool. Every won encounter that
//! is not the last offers a pick from the arcane and hitech pools, excluding
//! items the player already owns.

use tracing::debug;

use crate::config::RewardConfig;
use crate::equipment::{EquipmentCategory, EquipmentType};
use crate::error::SelectionError;
use crate::rng::GameRng;

/// Items offered from one pool and how many must be taken from it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OfferPool {
    pub category: EquipmentCategory,
    pub items: Vec<EquipmentType>,
    pub picks: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardOffer {
    pub pools: Vec<OfferPool>,
}

impl RewardOffer {
    /// Random sample of the starting pool.
    pub fn starting(rules: &RewardConfig, rng: &mut GameRng) -> Self {
        let pool = Self::sample_pool(
            EquipmentCategory::Starting,
            rules.starting_offer,
            rules.starting_picks,
            &[],
            rng,
        );
        Self { pools: vec![pool] }
    }

    /// Arcane and hitech samples, skipping anything in `owned`.
    pub fn post_encounter(
        rules: &RewardConfig,
        owned: &[EquipmentType],
        rng: &mut GameRng,
    ) -> Self {
        let pools = [EquipmentCategory::Arcane, EquipmentCategory::Hitech]
            .into_iter()
            .map(|category| {
                Self::sample_pool(category, rules.pool_offer, rules.picks_per_pool, owned, rng)
            })
            .collect();
        Self { pools }
    }

    fn sample_pool(
        category: EquipmentCategory,
        offer: usize,
        picks: usize,
        owned: &[EquipmentType],
        rng: &mut GameRng,
    ) -> OfferPool {
        let candidates: Vec<_> = EquipmentType::in_category(category)
            .into_iter()
            .filter(|item| !owned.contains(item))
            .collect();
        let items = rng.sample(&candidates, offer);
        // An exhausted pool requires no pick.
        let picks = picks.min(items.len());
        debug!(target: "rift::reward", category = %category, offered = items.len(), picks, "offer pool");
        OfferPool {
            category,
            items,
            picks,
        }
    }

    /// Every offered item, pool by pool.
    pub fn items(&self) -> impl Iterator<Item = EquipmentType> + '_ {
        self.pools.iter().flat_map(|p| p.items.iter().copied())
    }

    /// Total number of items the player must pick.
    pub fn required_picks(&self) -> usize {
        self.pools.iter().map(|p| p.picks).sum()
    }

    /// Checks a selection against the offer without consuming it.
    pub fn validate(&self, selection: &[EquipmentType]) -> Result<(), SelectionError> {
        for (index, item) in selection.iter().enumerate() {
            if selection[..index].contains(item) {
                return Err(SelectionError::Duplicate(*item));
            }
            if !self.items().any(|offered| offered == *item) {
                return Err(SelectionError::NotOffered(*item));
            }
        }

        for pool in &self.pools {
            let actual = selection
                .iter()
                .filter(|item| pool.items.contains(*item))
                .count();
            if actual != pool.picks {
                return Err(SelectionError::WrongCount {
                    category: pool.category,
                    expected: pool.picks,
                    actual,
                });
            }
        }
        Ok(())
    }
}
