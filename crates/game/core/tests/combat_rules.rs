mod common;

use common::*;
use rift_core::{
    AfterEnemyTurn, CardType, Combatant, EffectType, Encounter, GameConfig, GameRng, Pile,
    Player, StatusEffectTracker, Timeline, modify_attack_damage,
};

#[test]
fn block_absorbs_before_health() {
    for block in 0..10u32 {
        for damage in 0..15u32 {
            let mut player = Player::new(&GameConfig::default());
            player.gain_block(block);

            player.take_damage(damage, false);

            let vitals = player.vitals();
            if block > damage {
                assert_eq!(vitals.health, 20, "block {block} damage {damage}");
                assert_eq!(vitals.block, block - damage);
            } else {
                assert_eq!(vitals.health, 20 - (damage - block), "block {block} damage {damage}");
                assert_eq!(vitals.block, 0);
            }
        }
    }
}

#[test]
fn health_clamps_at_zero() {
    let mut player = Player::new(&GameConfig::default());
    let report = player.take_damage(50, false);
    assert_eq!(report.dealt, 20);
    assert!(report.defeated);
    assert!(player.is_dead());

    // Already defeated: nothing more happens.
    let report = player.take_damage(5, false);
    assert_eq!(report.dealt, 0);
    assert!(!report.defeated);
}

#[test]
fn stacking_effects_merge_into_one_instance() {
    for effect in [
        EffectType::Burn,
        EffectType::Weak,
        EffectType::Vulnerable,
        EffectType::Strength,
    ] {
        let mut tracker = StatusEffectTracker::new();
        tracker.add(effect, 2);
        tracker.add(effect, 3);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.severity(effect), 5);
    }
}

#[test]
fn severity_one_decays_away_after_one_turn_end() {
    for effect in [
        EffectType::Burn,
        EffectType::Weak,
        EffectType::Vulnerable,
        EffectType::Strength,
    ] {
        let mut tracker = StatusEffectTracker::new();
        tracker.add(effect, 1);
        tracker.end_turn();
        assert!(!tracker.has(effect), "{effect} should have expired");
    }
}

#[test]
fn weak_applies_before_strength() {
    let mut effects = StatusEffectTracker::new();
    effects.add(EffectType::Weak, 1);
    effects.add(EffectType::Strength, 1);
    // floor(floor(10 / 2) * 1.5)
    assert_eq!(modify_attack_damage(&effects, 10), 7);
}

#[test]
fn vulnerable_amplifies_incoming_damage() {
    let mut player = Player::new(&GameConfig::default());
    player.effects_mut().add(EffectType::Vulnerable, 1);
    player.take_damage(5, false);
    assert_eq!(player.vitals().health, 13);
}

#[test]
fn immune_ignores_damage_unless_it_ignores_block() {
    let mut player = Player::new(&GameConfig::default());
    player.effects_mut().add(EffectType::Immune, 0);

    let report = player.take_damage(6, false);
    assert!(report.immune);
    assert_eq!(player.vitals().health, 20);

    player.take_damage(6, true);
    assert_eq!(player.vitals().health, 14);
}

#[test]
fn empty_deck_recycles_the_used_pile() {
    let mut player = Player::new(&GameConfig::default());
    for _ in 0..3 {
        player.add_card(CardType::MagicBolt, Pile::Used);
    }
    assert!(player.deck().is_empty());

    let drawn = player.draw_cards(5, &mut GameRng::new(3));

    assert_eq!(drawn, 3);
    assert_eq!(player.hand().len(), 3);
    assert!(player.used_pile().is_empty());
    assert!(player.deck().is_empty());
    assert!(player.hand().iter().all(|c| c.pile == Pile::Hand));
}

#[test]
fn countdown_does_not_switch_into_a_defeated_timeline() {
    let template = encounter(dummy("Warden", 10), dummy("Echo", 10));
    let mut encounter = Encounter::new(1, &template, 3);
    encounter.begin();
    encounter.enemy_mut(Timeline::Future).take_damage(10, false);

    for _ in 0..3 {
        assert_eq!(encounter.finish_enemy_turn(), AfterEnemyTurn::Continue);
    }
    assert_eq!(encounter.active(), Timeline::Past);
    assert_eq!(encounter.countdown(), 3);
}

#[test]
fn both_defeated_regardless_of_order() {
    for first in [Timeline::Past, Timeline::Future] {
        let template = encounter(dummy("Warden", 10), dummy("Echo", 10));
        let mut encounter = Encounter::new(1, &template, 3);

        encounter.enemy_mut(first).take_damage(10, false);
        assert!(!encounter.both_defeated());

        encounter.enemy_mut(first.other()).take_damage(10, false);
        assert!(encounter.both_defeated());
    }
}
