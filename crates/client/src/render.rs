//! Plain-text rendering of snapshots and events.

use std::fmt::Write;

use rift_core::{
    CardType, DeathState, EffectView, EncounterView, EnemyView, Notification, Phase, PlayerView,
    RewardOffer, SessionSnapshot, Timeline,
};
use rift_runtime::{Event, RunEvent};

fn effects(list: &[EffectView]) -> String {
    if list.is_empty() {
        return String::new();
    }
    let parts: Vec<_> = list
        .iter()
        .map(|e| format!("{} {}", e.name, e.severity))
        .collect();
    format!(" [{}]", parts.join(", "))
}

fn enemy_line(out: &mut String, timeline: Timeline, enemy: &EnemyView, active: bool) {
    let marker = if active { '>' } else { ' ' };
    let status = match enemy.death {
        DeathState::Alive if enemy.stunned => " (stunned)".to_owned(),
        DeathState::Alive => String::new(),
        DeathState::Dying | DeathState::Gone => " (defeated)".to_owned(),
    };
    let intent = enemy
        .intent
        .as_deref()
        .filter(|_| enemy.death == DeathState::Alive)
        .map(|i| format!("  intends: {i}"))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "{marker} {:<6} {} {}/{}{}{status}{intent}",
        timeline.to_string(),
        enemy.name,
        enemy.health,
        enemy.max_health,
        effects(&enemy.effects),
    );
}

fn encounter(out: &mut String, view: &EncounterView, index: usize, count: usize) {
    let _ = writeln!(
        out,
        "== {} ({}/{}) | switch in {} | {}{}",
        view.name,
        index + 1,
        count,
        view.countdown,
        view.phase,
        if view.input_enabled { "" } else { " (busy)" },
    );
    for timeline in [Timeline::Past, Timeline::Future] {
        enemy_line(out, timeline, view.enemy(timeline), view.active == timeline);
    }
}

fn player(out: &mut String, view: &PlayerView) {
    let _ = writeln!(
        out,
        "you: {}/{} hp, {} block, {}/{} stamina{}",
        view.health,
        view.max_health,
        view.block,
        view.stamina,
        view.max_stamina,
        effects(&view.effects),
    );
    let _ = writeln!(out, "deck {} | used {}", view.deck_size, view.used_size);
    for (position, card) in view.hand.iter().enumerate() {
        let mark = if card.playable { ' ' } else { 'x' };
        let _ = writeln!(
            out,
            " {mark}{:>2}. {} ({}) - {}",
            position + 1,
            card.name,
            card.cost,
            card.description
        );
    }
}

pub fn offer(out: &mut String, offer: &RewardOffer) {
    let mut position = 0;
    for pool in &offer.pools {
        let _ = writeln!(out, "{} pool, pick {}:", pool.category, pool.picks);
        for item in &pool.items {
            position += 1;
            let definition = item.definition();
            let cards: Vec<_> = definition.cards.iter().map(|c| c.definition().name).collect();
            let _ = writeln!(
                out,
                "  {position:>2}. {} ({})",
                definition.name,
                cards.join(", ")
            );
        }
    }
}

/// Full board for the `state` command.
pub fn snapshot(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    match snapshot.phase {
        Phase::Victory => out.push_str("*** Victory! Every encounter is won. ***\n"),
        Phase::Defeat => out.push_str("*** Defeat. ***\n"),
        Phase::ChoosingEquipment | Phase::InEncounter => {}
    }
    if let Some(view) = &snapshot.encounter {
        encounter(
            &mut out,
            view,
            snapshot.encounter_index,
            snapshot.encounter_count,
        );
    }
    player(&mut out, &snapshot.player);
    if let Some(open) = &snapshot.offer {
        offer(&mut out, open);
    }
    out
}

/// Card text followed by one line per linked keyword.
pub fn inspect(card: CardType) -> String {
    let definition = card.definition();
    let mut out = format!(
        "{} ({} stamina, {})\n  {}\n",
        definition.name,
        definition.stamina_cost(),
        definition.family,
        definition.render(|effect| effect.name().to_uppercase()),
    );
    for keyword in definition.keywords {
        let effect = keyword.definition();
        let _ = writeln!(out, "  {}: {}", effect.name, effect.description);
    }
    out
}

/// One-line summary of an event, or `None` for noise.
pub fn event(event: &Event) -> Option<String> {
    match event {
        Event::Presentation(notification) => match notification {
            Notification::DamageNumber { target, amount } => {
                Some(format!("-{amount} to {target}"))
            }
            Notification::TimelineSwitching => Some("the rift shifts...".to_owned()),
            Notification::TimelineSwitched { timeline } => {
                Some(format!("now fighting in the {timeline}"))
            }
            Notification::ShakeCamera { power } if *power >= 1000 => Some("BOOM".to_owned()),
            _ => None,
        },
        Event::Run(run) => match run {
            RunEvent::PhaseChanged { to, .. } => Some(format!("phase: {to}")),
            RunEvent::EncounterStarted { index, name, .. } => {
                Some(format!("encounter {}: {name}", index + 1))
            }
            RunEvent::TimelineChanged { .. } => None,
            RunEvent::InputRejected { reason, .. } => Some(format!("rejected: {reason}")),
        },
    }
}
