//! The player: stamina, piles and the player turn lifecycle.
//!
//! One `Player` lives for the whole run. Health and status effects carry
//! over between encounters; piles are rebuilt from equipment at every
//! battle start.

use tracing::{debug, trace, warn};

use crate::card::{self, CardId, CardInstance, CardType, Pile};
use crate::combat::{BattleContext, Combatant, Side, Vitals};
use crate::config::GameConfig;
use crate::equipment::EquipmentType;
use crate::error::PlayError;
use crate::notify::Notification;
use crate::rng::GameRng;
use crate::status::StatusEffectTracker;

#[derive(Clone, Debug)]
pub struct Player {
    vitals: Vitals,
    stamina: u32,
    max_stamina: u32,
    hand_size: usize,
    effects: StatusEffectTracker,
    equipment: Vec<EquipmentType>,
    library: Vec<CardType>,
    /// Top of the deck is the end of the vector.
    deck: Vec<CardInstance>,
    hand: Vec<CardInstance>,
    used: Vec<CardInstance>,
    next_card_id: u32,
    dead: bool,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            vitals: Vitals::new(config.player_max_health),
            stamina: config.player_max_stamina,
            max_stamina: config.player_max_stamina,
            hand_size: config.hand_size,
            effects: StatusEffectTracker::new(),
            equipment: Vec::new(),
            library: Vec::new(),
            deck: Vec::new(),
            hand: Vec::new(),
            used: Vec::new(),
            next_card_id: 0,
            dead: false,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn stamina(&self) -> u32 {
        self.stamina
    }

    pub fn max_stamina(&self) -> u32 {
        self.max_stamina
    }

    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    pub fn deck(&self) -> &[CardInstance] {
        &self.deck
    }

    pub fn used_pile(&self) -> &[CardInstance] {
        &self.used
    }

    pub fn library(&self) -> &[CardType] {
        &self.library
    }

    pub fn equipment(&self) -> &[EquipmentType] {
        &self.equipment
    }

    pub fn owns(&self, item: EquipmentType) -> bool {
        self.equipment.contains(&item)
    }

    /// Set once health reaches zero; never cleared.
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn find_in_hand(&self, id: CardId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Returns true if `card` could be played with the current stamina.
    pub fn can_afford(&self, card: CardType) -> bool {
        card.cost() <= self.stamina
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    pub fn add_equipment(&mut self, items: &[EquipmentType]) {
        self.equipment.extend_from_slice(items);
    }

    pub fn gain_block(&mut self, amount: u32) {
        self.vitals.block += amount;
    }

    /// Creates a new card instance directly in `pile`.
    pub fn add_card(&mut self, card: CardType, pile: Pile) -> CardId {
        let instance = CardInstance::new(self.allocate_id(), card, pile);
        match pile {
            Pile::Deck => self.deck.push(instance),
            Pile::Hand => self.hand.push(instance),
            Pile::Used => self.used.push(instance),
        }
        instance.id
    }

    /// Clears every pile and rebuilds a shuffled deck from equipment.
    pub fn start_battle(&mut self, rng: &mut GameRng) {
        self.deck.clear();
        self.hand.clear();
        self.used.clear();
        self.next_card_id = 0;

        self.library = self
            .equipment
            .iter()
            .flat_map(|item| item.definition().cards.iter().copied())
            .collect();

        for index in 0..self.library.len() {
            let card = self.library[index];
            self.add_card(card, Pile::Deck);
        }
        rng.shuffle(&mut self.deck);

        debug!(
            target: "rift::player",
            library = self.library.len(),
            "battle started"
        );
    }

    /// Draws up to `count` cards, recycling the used pile when the deck runs
    /// dry. Returns the number of cards drawn.
    pub fn draw_cards(&mut self, count: usize, rng: &mut GameRng) -> usize {
        for drawn in 0..count {
            if self.deck.is_empty() {
                self.recycle_used_pile(rng);
            }
            let Some(card) = self.deck.pop() else {
                warn!(
                    target: "rift::player",
                    requested = count,
                    drawn,
                    "deck and used pile are both empty"
                );
                return drawn;
            };
            self.hand.push(card.moved_to(Pile::Hand));
        }
        count
    }

    fn recycle_used_pile(&mut self, rng: &mut GameRng) {
        if self.used.is_empty() {
            return;
        }
        trace!(target: "rift::player", cards = self.used.len(), "recycling used pile");
        self.deck
            .extend(self.used.drain(..).map(|c| c.moved_to(Pile::Deck)));
        rng.shuffle(&mut self.deck);
    }

    /// Moves the whole hand into the used pile.
    pub fn discard_hand(&mut self) {
        self.used
            .extend(self.hand.drain(..).map(|c| c.moved_to(Pile::Used)));
    }

    fn take_from_hand(&mut self, id: CardId) -> Option<CardInstance> {
        let index = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(index))
    }

    fn allocate_id(&mut self) -> CardId {
        let id = CardId(self.next_card_id);
        self.next_card_id += 1;
        id
    }
}

impl Combatant for Player {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn effects(&self) -> &StatusEffectTracker {
        &self.effects
    }

    fn effects_mut(&mut self) -> &mut StatusEffectTracker {
        &mut self.effects
    }

    /// Stun has no effect on the player's turn.
    fn handle_stun(&mut self) {
        trace!(target: "rift::player", "stun ignored");
    }

    fn on_defeated(&mut self) {
        if !self.dead {
            self.dead = true;
            debug!(target: "rift::player", "player defeated");
        }
    }
}

// ============================================================================
// Player turn lifecycle
// ============================================================================

impl<'a> BattleContext<'a> {
    /// Rebuilds the player's deck and grants equipment passives.
    pub fn begin_battle(&mut self) {
        self.player.start_battle(self.rng);

        let passives: Vec<_> = self
            .player
            .equipment()
            .iter()
            .filter_map(|item| item.definition().on_encounter_start)
            .collect();
        for effect in passives {
            self.apply_effect(Side::Player, effect, 0);
        }
    }

    /// Resets stamina and block, runs turn-start hooks and draws a hand.
    pub fn start_player_turn(&mut self) {
        self.player.stamina = self.player.max_stamina;
        self.player.vitals.block = 0;

        let produced = self.player.effects.start_turn();
        self.resolve_hooks(Side::Player, produced);

        let hand_size = self.player.hand_size;
        self.draw_cards(hand_size);
        self.outbox.push(Notification::sound("drawCards"));
    }

    /// Pays for and resolves the card `id` from the player's hand.
    pub fn play_card(&mut self, id: CardId) -> Result<CardType, PlayError> {
        let card = self
            .player
            .find_in_hand(id)
            .map(|c| c.card)
            .ok_or(PlayError::CardNotInHand(id))?;

        let cost = card.cost();
        if cost > self.player.stamina {
            return Err(PlayError::InsufficientStamina {
                card,
                cost,
                available: self.player.stamina,
            });
        }

        self.player.stamina -= cost;
        if let Some(instance) = self.player.take_from_hand(id) {
            self.player.used.push(instance.moved_to(Pile::Used));
        }
        debug!(target: "rift::player", card = %card, cost, "card played");

        card::effect::resolve(card, self);

        let produced = self.player.effects.card_played(card.family());
        self.resolve_hooks(Side::Player, produced);

        Ok(card)
    }

    /// Runs turn-end hooks and decay, then discards the hand.
    pub fn end_player_turn(&mut self) {
        let produced = self.player.effects.end_turn_hooks();
        self.resolve_hooks(Side::Player, produced);
        self.player.effects.apply_decay();
        self.player.discard_hand();
    }
}
