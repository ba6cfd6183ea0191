mod common;

use common::*;
use rift_core::{
    CardFamily, CardId, CardType, Combatant, DeathState, EffectType, EnemyAction, EquipmentCategory,
    GameConfig, GameSession, Notification, Phase, PlayError, SelectionError, Timeline, TurnPhase,
};

fn has_notification(notes: &[Notification], pred: impl Fn(&Notification) -> bool) -> bool {
    notes.iter().any(pred)
}

// ============================================================================
// Card play
// ============================================================================

#[test]
fn playing_a_two_cost_card_spends_stamina_and_damages_enemy() {
    let mut session = instant_session(vec![encounter(dummy("Warden", 18), dummy("Echo", 18))]);
    assert_eq!(session.player().stamina(), 3);
    assert_eq!(session.player().vitals().health, 20);

    let slam = card_in_hand(&session, CardType::Slam).expect("slam in opening hand");
    assert_eq!(session.play_card(slam), Ok(CardType::Slam));

    let encounter = session.encounter().expect("encounter running");
    assert_eq!(session.player().stamina(), 1);
    assert_eq!(encounter.enemy(Timeline::Past).vitals().health, 14);
    assert_eq!(encounter.enemy(Timeline::Future).vitals().health, 18);
    assert!(session.player().used_pile().iter().any(|c| c.id == slam));
}

#[test]
fn unaffordable_card_is_rejected_without_side_effects() {
    let mut session = instant_session(vec![encounter(dummy("Warden", 18), dummy("Echo", 18))]);
    let slam = card_in_hand(&session, CardType::Slam).expect("slam in opening hand");
    session.play_card(slam).expect("affordable");

    let expensive = session
        .player()
        .hand()
        .iter()
        .find(|c| c.card.cost() == 2)
        .map(|c| c.id)
        .expect("at least one two-cost card left");
    let before = session.snapshot();

    let err = session.play_card(expensive).unwrap_err();
    assert!(matches!(
        err,
        PlayError::InsufficientStamina {
            cost: 2,
            available: 1,
            ..
        }
    ));
    assert_eq!(session.snapshot(), before);
}

#[test]
fn card_outside_the_hand_is_rejected() {
    let mut session = instant_session(vec![encounter(dummy("Warden", 18), dummy("Echo", 18))]);
    assert_eq!(
        session.play_card(CardId(999)),
        Err(PlayError::CardNotInHand(CardId(999)))
    );
}

#[test]
fn snapshot_marks_only_affordable_cards_playable() {
    let mut session = instant_session(vec![encounter(dummy("Warden", 18), dummy("Echo", 18))]);
    let snapshot = session.snapshot();
    assert!(snapshot.player.hand.iter().all(|card| card.playable));

    let slam = card_in_hand(&session, CardType::Slam).expect("slam in opening hand");
    session.play_card(slam).expect("affordable");

    let snapshot = session.snapshot();
    for card in &snapshot.player.hand {
        assert_eq!(card.playable, card.cost <= 1, "{}", card.name);
    }
    let encounter = snapshot.encounter.expect("encounter view");
    assert_eq!(encounter.active, Timeline::Past);
    assert_eq!(encounter.countdown, 3);
    assert_eq!(
        encounter.past.intent.as_deref(),
        Some("Attack for 1 x 1 damage")
    );
}

#[test]
fn hovering_a_card_shows_its_keyword_tooltips() {
    let mut session = instant_session(vec![encounter(dummy("Warden", 18), dummy("Echo", 18))]);
    let zap = card_in_hand(&session, CardType::Zap).expect("zap in opening hand");

    session.hover(Some(zap));
    session.hover(None);
    let notes = session.drain_notifications();
    assert!(matches!(
        notes.as_slice(),
        [
            Notification::ShowTooltip {
                effect: EffectType::Stun
            },
            Notification::HideTooltip
        ]
    ));
}

#[test]
fn same_seed_replays_the_same_opening_hand() {
    let encounters = vec![encounter(dummy("Warden", 18), dummy("Echo", 18))];
    let a = instant_session(encounters.clone());
    let b = instant_session(encounters);

    let cards = |s: &GameSession| s.player().hand().iter().map(|c| c.card).collect::<Vec<_>>();
    assert_eq!(cards(&a), cards(&b));
}

// ============================================================================
// Stun
// ============================================================================

#[test]
fn stunned_enemy_skips_its_next_action() {
    let hitter = enemy("Brute", 18, &[EnemyAction::Attack { damage: 5, hits: 1 }]);
    let mut session = instant_session(vec![encounter(hitter, dummy("Echo", 18))]);

    let zap = card_in_hand(&session, CardType::Zap).expect("zap in opening hand");
    session.play_card(zap).expect("affordable");
    let past = session.encounter().expect("encounter").enemy(Timeline::Past);
    assert_eq!(past.vitals().health, 15);
    assert!(past.effects().has(EffectType::Stun));

    pass_turn(&mut session);
    let past = session.encounter().expect("encounter").enemy(Timeline::Past);
    assert_eq!(session.player().vitals().health, 20);
    assert!(!past.effects().has(EffectType::Stun));
    assert!(!past.is_stunned());

    pass_turn(&mut session);
    assert_eq!(session.player().vitals().health, 15);
}

#[test]
fn stun_on_the_player_does_not_skip_the_player_turn() {
    let stunner = enemy(
        "Hypnotist",
        18,
        &[EnemyAction::Debuff {
            effect: EffectType::Stun,
            severity: 0,
        }],
    );
    let mut session = instant_session(vec![encounter(stunner, dummy("Echo", 18))]);

    pass_turn(&mut session);

    let encounter = session.encounter().expect("encounter");
    assert_eq!(encounter.phase(), TurnPhase::Player);
    assert!(!session.player().effects().has(EffectType::Stun));
    assert_eq!(session.player().stamina(), 3);
    assert_eq!(session.player().hand().len(), 5);
    assert!(session.end_turn().is_ok());
}

#[test]
fn corrupt_adds_failure_cards_to_the_player_piles() {
    let corrupter = enemy(
        "Glitch",
        18,
        &[EnemyAction::Corrupt {
            card: CardType::Static,
            count: 2,
        }],
    );
    let mut session = instant_session(vec![encounter(corrupter, dummy("Echo", 18))]);

    pass_turn(&mut session);

    let player = session.player();
    let all: Vec<_> = player
        .hand()
        .iter()
        .chain(player.deck())
        .chain(player.used_pile())
        .collect();
    assert_eq!(all.len(), 8);
    assert_eq!(all.iter().filter(|c| c.card == CardType::Static).count(), 2);
}

// ============================================================================
// Turn gating and timeline switching
// ============================================================================

#[test]
fn input_is_rejected_during_the_enemy_turn() {
    let mut session = session_with(
        GameConfig::default(),
        vec![encounter(dummy("Warden", 30), dummy("Echo", 30))],
    );
    session.end_turn().expect("player turn");

    assert_eq!(session.end_turn(), Err(PlayError::NotPlayerTurn));
    assert_eq!(session.play_card(CardId(0)), Err(PlayError::NotPlayerTurn));

    session.advance(200);
    assert!(session.end_turn().is_ok());
}

#[test]
fn switch_waits_for_the_transition_delay() {
    let mut session = session_with(
        GameConfig::default(),
        vec![encounter(dummy("Warden", 30), dummy("Echo", 30))],
    );

    for _ in 0..3 {
        session.end_turn().expect("player turn");
        session.advance(200);
    }

    let encounter = session.encounter().expect("encounter");
    assert_eq!(encounter.phase(), TurnPhase::Switching);
    assert!(!encounter.input_enabled());
    assert_eq!(session.end_turn(), Err(PlayError::TransitionPending));
    assert_eq!(session.play_card(CardId(0)), Err(PlayError::TransitionPending));

    session.advance(999);
    assert_eq!(session.encounter().expect("encounter").active(), Timeline::Past);

    session.advance(1);
    let encounter = session.encounter().expect("encounter");
    assert_eq!(encounter.active(), Timeline::Future);
    assert_eq!(encounter.countdown(), 3);
    assert_eq!(session.player().vitals().health, 17);

    let notes = session.drain_notifications();
    assert!(has_notification(&notes, |n| matches!(
        n,
        Notification::TimelineSwitching
    )));
    assert!(has_notification(&notes, |n| matches!(
        n,
        Notification::TimelineSwitched {
            timeline: Timeline::Future
        }
    )));
}

#[test]
fn late_enemy_action_is_dropped_once_its_turn_is_over() {
    let mut config = GameConfig {
        switch_countdown: 1,
        ..GameConfig::default()
    };
    config.delays.enemy_action_ms = 300;
    config.delays.enemy_turn_end_ms = 100;
    config.delays.timeline_switch_ms = 50;
    let echo = enemy("Echo", 30, &[EnemyAction::Attack { damage: 5, hits: 1 }]);
    let mut session = session_with(config, vec![encounter(dummy("Warden", 30), echo)]);

    session.end_turn().expect("player turn");
    session.advance(150);
    let encounter = session.encounter().expect("encounter");
    assert_eq!(encounter.active(), Timeline::Future);
    assert_eq!(encounter.phase(), TurnPhase::Player);

    // The action queued for the past enemy comes due during the player's
    // turn in the future timeline.
    session.advance(1200);
    assert!(session.is_idle());
    assert_eq!(session.player().vitals().health, 20);
    let encounter = session.encounter().expect("encounter");
    assert_eq!(encounter.phase(), TurnPhase::Player);
    assert_eq!(
        encounter.enemy(Timeline::Future).intent(),
        Some(&EnemyAction::Attack { damage: 5, hits: 1 })
    );
    assert_eq!(
        encounter.enemy(Timeline::Past).intent(),
        Some(&EnemyAction::Attack { damage: 1, hits: 1 })
    );
}

#[test]
fn killing_the_active_enemy_switches_after_one_enemy_turn() {
    let mut session = instant_session(vec![encounter(dummy("Warden", 4), dummy("Echo", 30))]);
    assert_eq!(session.encounter().expect("encounter").countdown(), 3);

    let slam = card_in_hand(&session, CardType::Slam).expect("slam in hand");
    session.play_card(slam).expect("affordable");

    let encounter = session.encounter().expect("encounter");
    assert_eq!(encounter.countdown(), 0);
    assert_eq!(encounter.active(), Timeline::Past);
    assert_eq!(encounter.enemy(Timeline::Past).death_state(), DeathState::Dying);

    pass_turn(&mut session);

    let encounter = session.encounter().expect("encounter");
    assert_eq!(encounter.active(), Timeline::Future);
    assert_eq!(encounter.countdown(), 3);
    assert_eq!(encounter.phase(), TurnPhase::Player);
    assert_eq!(encounter.enemy(Timeline::Past).death_state(), DeathState::Gone);
    // The dead enemy's turn ran without an action.
    assert_eq!(session.player().vitals().health, 20);
    assert_eq!(session.phase(), Phase::InEncounter);
}

#[test]
fn burn_tick_at_turn_end_kills_the_enemy_and_forces_the_switch() {
    let mut session = session_with_kit(
        GameConfig::instant(),
        &BURN_KIT,
        vec![encounter(dummy("Warden", 3), dummy("Echo", 30))],
    );
    let blindshot = card_in_hand(&session, CardType::Blindshot).expect("blindshot in hand");
    session.play_card(blindshot).expect("affordable");

    let encounter = session.encounter().expect("encounter");
    let past = encounter.enemy(Timeline::Past);
    assert_eq!(past.vitals().health, 1);
    assert_eq!(past.effects().severity(EffectType::Burn), 2);
    assert_eq!(encounter.countdown(), 3);

    pass_turn(&mut session);

    let encounter = session.encounter().expect("encounter");
    assert_eq!(encounter.enemy(Timeline::Past).vitals().health, 0);
    assert_eq!(encounter.enemy(Timeline::Past).death_state(), DeathState::Gone);
    assert_eq!(encounter.active(), Timeline::Future);
    assert_eq!(encounter.countdown(), 3);
    assert_eq!(encounter.phase(), TurnPhase::Player);
    assert!(!encounter.is_won());
}

#[test]
fn inactive_enemy_is_frozen_until_switched_in() {
    let mut session = instant_session(vec![encounter(
        dummy("Warden", 30),
        enemy(
            "Echo",
            30,
            &[
                EnemyAction::Attack { damage: 1, hits: 1 },
                EnemyAction::Buff {
                    effect: EffectType::Strength,
                    severity: 1,
                },
            ],
        ),
    )]);

    for _ in 0..3 {
        pass_turn(&mut session);
    }
    let encounter = session.encounter().expect("encounter");
    assert_eq!(encounter.active(), Timeline::Future);
    assert_eq!(
        encounter.enemy(Timeline::Future).intent(),
        Some(&EnemyAction::Attack { damage: 1, hits: 1 })
    );
}

// ============================================================================
// Equipment passives
// ============================================================================

#[test]
fn pepper_spray_pyromaniac_burns_on_every_third_attack() {
    let mut session = session_with_kit(
        GameConfig::instant(),
        &BURN_KIT,
        vec![encounter(dummy("Warden", 60), dummy("Echo", 60))],
    );
    let pyromaniac = |s: &GameSession| {
        s.player()
            .effects()
            .get(EffectType::Pyromaniac)
            .map(|e| e.severity)
    };
    assert_eq!(pyromaniac(&session), Some(0));

    let mut attacks = 0;
    while attacks < 2 {
        match play_cheapest(&mut session, CardFamily::Attack) {
            Some(_) => attacks += 1,
            None => pass_turn(&mut session),
        }
    }
    assert_eq!(pyromaniac(&session), Some(2));

    let (third, burn_before) = loop {
        let burn = session
            .encounter()
            .expect("encounter")
            .active_enemy()
            .effects()
            .severity(EffectType::Burn);
        if let Some(card) = play_cheapest(&mut session, CardFamily::Attack) {
            break (card, burn);
        }
        pass_turn(&mut session);
    };

    assert_eq!(pyromaniac(&session), Some(0));
    let from_card = if third == CardType::Blindshot { 2 } else { 0 };
    let burn = session
        .encounter()
        .expect("encounter")
        .active_enemy()
        .effects()
        .severity(EffectType::Burn);
    assert_eq!(burn, burn_before + from_card + 1);
}

#[test]
fn yoga_mat_momentum_grants_strength_on_every_fifth_skill() {
    let mut session = session_with_kit(
        GameConfig::instant(),
        &SKILL_KIT,
        vec![encounter(dummy("Warden", 60), dummy("Echo", 60))],
    );
    let momentum = |s: &GameSession| {
        s.player()
            .effects()
            .get(EffectType::Momentum)
            .map(|e| e.severity)
    };
    assert_eq!(momentum(&session), Some(0));

    let mut skills = 0;
    while skills < 4 {
        match play_cheapest(&mut session, CardFamily::Skill) {
            Some(_) => skills += 1,
            None => pass_turn(&mut session),
        }
    }
    assert_eq!(momentum(&session), Some(4));

    while play_cheapest(&mut session, CardFamily::Skill).is_none() {
        assert!(!session.player().effects().has(EffectType::Strength));
        pass_turn(&mut session);
    }
    assert_eq!(momentum(&session), Some(0));
    assert_eq!(session.player().effects().severity(EffectType::Strength), 1);
}

// ============================================================================
// Winning and losing
// ============================================================================

#[test]
fn encounter_is_won_only_when_both_enemies_are_defeated() {
    let mut session = instant_session(vec![encounter(dummy("Warden", 4), dummy("Echo", 4))]);

    let slam = card_in_hand(&session, CardType::Slam).expect("slam in hand");
    session.play_card(slam).expect("affordable");
    pass_turn(&mut session);

    assert_eq!(session.phase(), Phase::InEncounter);
    let encounter = session.encounter().expect("encounter");
    assert_eq!(encounter.active(), Timeline::Future);
    assert_eq!(encounter.enemy(Timeline::Past).death_state(), DeathState::Gone);
    assert!(!encounter.is_won());

    let slam = card_in_hand(&session, CardType::Slam).expect("slam in hand");
    session.play_card(slam).expect("affordable");
    session.settle();

    assert_eq!(session.phase(), Phase::Victory);
    assert!(session.is_idle());
    let notes = session.drain_notifications();
    assert!(has_notification(&notes, |n| matches!(
        n,
        Notification::ShakeCamera { power: 1000 }
    )));
    assert!(has_notification(&notes, |n| matches!(n, Notification::CutMusic)));
}

#[test]
fn winning_an_encounter_opens_a_reward_offer() {
    let mut session = instant_session(vec![
        encounter(dummy("Warden", 4), dummy("Echo", 4)),
        encounter(dummy("Sentinel", 20), dummy("Shade", 20)),
    ]);

    for _ in 0..2 {
        let slam = card_in_hand(&session, CardType::Slam).expect("slam in hand");
        session.play_card(slam).expect("affordable");
        if session.encounter().is_some_and(|e| e.active() == Timeline::Past) {
            pass_turn(&mut session);
        }
    }
    session.settle();

    assert_eq!(session.phase(), Phase::ChoosingEquipment);
    assert!(session.encounter().is_none());
    assert_eq!(session.encounter_index(), 1);
    let health = session.player().vitals().health;

    let offer = session.offer().expect("post-encounter offer").clone();
    assert_eq!(offer.pools.len(), 2);
    assert_eq!(offer.pools[0].category, EquipmentCategory::Arcane);
    assert_eq!(offer.pools[1].category, EquipmentCategory::Hitech);
    assert_eq!(offer.required_picks(), 2);

    assert_eq!(
        session.select_equipment(&[]),
        Err(SelectionError::WrongCount {
            category: EquipmentCategory::Arcane,
            expected: 1,
            actual: 0,
        })
    );
    assert_eq!(session.phase(), Phase::ChoosingEquipment);

    let picks = [offer.pools[0].items[0], offer.pools[1].items[0]];
    session.select_equipment(&picks).expect("valid picks");

    assert_eq!(session.phase(), Phase::InEncounter);
    assert_eq!(session.player().equipment().len(), 5);
    assert_eq!(session.player().library().len(), 10);
    assert_eq!(session.player().vitals().health, health);
    assert_eq!(
        session.encounter().expect("second encounter").name(),
        "Test Encounter"
    );
    assert_eq!(
        session.select_equipment(&picks),
        Err(SelectionError::NoOfferOpen)
    );
}

#[test]
fn starting_selection_must_match_the_offer() {
    let mut session = GameSession::new(
        GameConfig::instant(),
        vec![encounter(dummy("Warden", 4), dummy("Echo", 4))],
        7,
    );
    assert_eq!(session.phase(), Phase::ChoosingEquipment);
    assert_eq!(session.end_turn(), Err(PlayError::NoEncounter));

    assert!(matches!(
        session.select_equipment(&PLAIN_KIT[..2]),
        Err(SelectionError::WrongCount { expected: 3, actual: 2, .. })
    ));
    assert_eq!(
        session.select_equipment(&[PLAIN_KIT[0], PLAIN_KIT[0], PLAIN_KIT[1]]),
        Err(SelectionError::Duplicate(PLAIN_KIT[0]))
    );
    assert_eq!(session.phase(), Phase::ChoosingEquipment);
    assert!(session.player().equipment().is_empty());

    assert!(session.select_equipment(&PLAIN_KIT).is_ok());
}

#[test]
fn player_defeat_cancels_pending_continuations() {
    let crusher = enemy("Crusher", 30, &[EnemyAction::Attack { damage: 30, hits: 1 }]);
    let mut session = session_with(
        GameConfig::default(),
        vec![encounter(crusher, dummy("Echo", 30))],
    );

    session.end_turn().expect("player turn");
    session.advance(100);
    assert!(session.player().is_dead());
    assert_eq!(session.phase(), Phase::InEncounter);

    session.advance(10_000);
    assert_eq!(session.phase(), Phase::Defeat);
    assert!(session.is_idle());

    // The turn-end continuation never ran.
    let encounter = session.encounter().expect("encounter kept for display");
    assert_eq!(encounter.countdown(), 3);
    assert_eq!(encounter.phase(), TurnPhase::Enemy);

    assert_eq!(session.end_turn(), Err(PlayError::PlayerDefeated));
    assert_eq!(session.play_card(CardId(0)), Err(PlayError::PlayerDefeated));
    let notes = session.drain_notifications();
    assert!(has_notification(&notes, |n| matches!(n, Notification::CutMusic)));
    assert!(!has_notification(&notes, |n| matches!(
        n,
        Notification::TimelineSwitching
    )));
}
