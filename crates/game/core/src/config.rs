/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Health the player starts the run with (also the maximum).
    pub player_max_health: u32,
    /// Stamina restored at the start of every player turn.
    pub player_max_stamina: u32,
    /// Cards drawn at the start of every player turn.
    pub hand_size: usize,
    /// Completed enemy turns between forced timeline switches.
    pub switch_countdown: i32,
    pub delays: DelayConfig,
    pub rewards: RewardConfig,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// One slot per effect type is enough since instances never duplicate.
    pub const MAX_STATUS_EFFECTS: usize = 16;
    pub const MAX_ENEMY_ACTIONS: usize = 8;
    /// Nested hook resolution (a hook applying an effect whose `on_apply`
    /// triggers further effects) is cut off at this depth.
    pub const MAX_HOOK_DEPTH: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_MAX_HEALTH: u32 = 20;
    pub const DEFAULT_PLAYER_MAX_STAMINA: u32 = 3;
    pub const DEFAULT_HAND_SIZE: usize = 5;
    pub const DEFAULT_SWITCH_COUNTDOWN: i32 = 3;

    pub fn new() -> Self {
        Self {
            player_max_health: Self::DEFAULT_PLAYER_MAX_HEALTH,
            player_max_stamina: Self::DEFAULT_PLAYER_MAX_STAMINA,
            hand_size: Self::DEFAULT_HAND_SIZE,
            switch_countdown: Self::DEFAULT_SWITCH_COUNTDOWN,
            delays: DelayConfig::default(),
            rewards: RewardConfig::default(),
        }
    }

    /// Configuration with every pacing delay set to zero.
    ///
    /// Scheduled continuations still exist, they just become due immediately.
    pub fn instant() -> Self {
        Self {
            delays: DelayConfig::instant(),
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cosmetic pacing delays, in milliseconds of game clock.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DelayConfig {
    /// Between the enemy turn starting and its queued action resolving.
    pub enemy_action_ms: u64,
    /// Between the enemy turn starting and its turn ending.
    pub enemy_turn_end_ms: u64,
    /// Transition window during which ending the turn is disabled.
    pub timeline_switch_ms: u64,
    /// Fade-out of a defeated enemy before the win check runs.
    pub enemy_death_ms: u64,
    /// Fade-out of the defeated player before the run ends.
    pub player_death_ms: u64,
}

impl DelayConfig {
    pub const fn instant() -> Self {
        Self {
            enemy_action_ms: 0,
            enemy_turn_end_ms: 0,
            timeline_switch_ms: 0,
            enemy_death_ms: 0,
            player_death_ms: 0,
        }
    }
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            enemy_action_ms: 100,
            enemy_turn_end_ms: 200,
            timeline_switch_ms: 1000,
            enemy_death_ms: 500,
            player_death_ms: 600,
        }
    }
}

/// Sizes of the equipment reward offers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardConfig {
    /// Starting items offered at the beginning of a run.
    pub starting_offer: usize,
    /// Starting items the player must pick.
    pub starting_picks: usize,
    /// Items offered from each of the arcane and hitech pools after a win.
    pub pool_offer: usize,
    /// Items the player must pick from each non-empty pool.
    pub picks_per_pool: usize,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            starting_offer: 6,
            starting_picks: 3,
            pool_offer: 2,
            picks_per_pool: 1,
        }
    }
}
