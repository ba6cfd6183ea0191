#![allow(dead_code)]

use rift_core::{
    CardFamily, CardId, CardType, EncounterTemplate, EnemyAction, EnemyTemplate, EquipmentType,
    GameConfig, GameSession, Phase,
};

/// Starting picks without encounter-start passives: Slam, Distract and Zap.
pub const PLAIN_KIT: [EquipmentType; 3] = [
    EquipmentType::FryingPan,
    EquipmentType::LaserPointer,
    EquipmentType::StunBaton,
];

pub fn enemy(name: &str, health: u32, actions: &[EnemyAction]) -> EnemyTemplate {
    EnemyTemplate::new(name, health, actions)
}

/// An enemy that pokes for 1 every turn.
pub fn dummy(name: &str, health: u32) -> EnemyTemplate {
    enemy(name, health, &[EnemyAction::Attack { damage: 1, hits: 1 }])
}

pub fn encounter(past: EnemyTemplate, future: EnemyTemplate) -> EncounterTemplate {
    EncounterTemplate::new("Test Encounter", past, future)
}

/// Pepper Spray (Pyromaniac), Selfie Stick and Laser Pointer.
pub const BURN_KIT: [EquipmentType; 3] = [
    EquipmentType::PepperSpray,
    EquipmentType::SelfieStick,
    EquipmentType::LaserPointer,
];

/// Yoga Mat (Momentum), Laser Pointer and Frying Pan.
pub const SKILL_KIT: [EquipmentType; 3] = [
    EquipmentType::YogaMat,
    EquipmentType::LaserPointer,
    EquipmentType::FryingPan,
];

pub fn session_with(config: GameConfig, encounters: Vec<EncounterTemplate>) -> GameSession {
    session_with_kit(config, &PLAIN_KIT, encounters)
}

/// A started session equipped with `kit`. The starting pool has exactly as
/// many items as the starting offer, so every starting item is offered.
pub fn session_with_kit(
    config: GameConfig,
    kit: &[EquipmentType],
    encounters: Vec<EncounterTemplate>,
) -> GameSession {
    let mut session = GameSession::new(config, encounters, 7);
    session
        .select_equipment(kit)
        .expect("starting items are always offered");
    assert_eq!(session.phase(), Phase::InEncounter);
    session.drain_notifications();
    session
}

/// A started session whose delays are all zero.
pub fn instant_session(encounters: Vec<EncounterTemplate>) -> GameSession {
    session_with(GameConfig::instant(), encounters)
}

pub fn card_in_hand(session: &GameSession, card: CardType) -> Option<CardId> {
    session
        .player()
        .hand()
        .iter()
        .find(|instance| instance.card == card)
        .map(|instance| instance.id)
}

/// Plays the cheapest affordable card of `family` from the hand.
pub fn play_cheapest(session: &mut GameSession, family: CardFamily) -> Option<CardType> {
    let player = session.player();
    let id = player
        .hand()
        .iter()
        .filter(|c| c.card.family() == family && player.can_afford(c.card))
        .min_by_key(|c| c.card.cost())
        .map(|c| c.id)?;
    session.play_card(id).ok()
}

/// Ends the player's turn and runs the enemy turn to completion.
pub fn pass_turn(session: &mut GameSession) {
    session.end_turn().expect("player may end the turn");
    session.settle();
}
