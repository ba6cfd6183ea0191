//! What each card does when played.

use tracing::trace;

use crate::combat::{BattleContext, Combatant, Side};
use crate::status::EffectType;

use super::kind::CardType;

/// Resolves `card` against the battle's player and active enemy.
///
/// Attack cards route their base damage through the player's attack
/// modifiers; flat "extra damage" riders are added after the modifiers.
pub(crate) fn resolve(card: CardType, ctx: &mut BattleContext<'_>) {
    trace!(target: "rift::card", card = ?card, "resolving card effect");

    match card {
        CardType::Blindshot => {
            strike(ctx, 2, false);
            ctx.apply_effect(Side::Enemy, EffectType::Burn, 2);
            ctx.apply_effect(Side::Enemy, EffectType::Weak, 1);
        }
        CardType::SweepStrike => {
            strike(ctx, 2, false);
            if ctx.rng.chance(50) {
                ctx.apply_effect(Side::Enemy, EffectType::Stun, 0);
            }
        }
        CardType::Zap => {
            strike(ctx, 3, false);
            ctx.apply_effect(Side::Enemy, EffectType::Stun, 0);
        }
        CardType::Meditate => {
            ctx.player.gain_block(5);
            ctx.draw_cards(1);
        }
        CardType::Slam => {
            let mut damage = ctx.player_attack_damage(4);
            let effects = ctx.enemy.effects();
            if effects.has(EffectType::Stun) || effects.has(EffectType::Weak) {
                damage += 2;
            }
            ctx.deal_damage(Side::Enemy, damage, false);
        }
        CardType::Distract => {
            ctx.apply_effect(Side::Enemy, EffectType::Weak, 2);
        }

        CardType::Ignite => {
            let mut damage = ctx.player_attack_damage(4);
            if ctx.enemy.effects().has(EffectType::Burn) {
                damage += 4;
            }
            ctx.deal_damage(Side::Enemy, damage, false);
            ctx.apply_effect(Side::Enemy, EffectType::Burn, 2);
        }
        CardType::MagicBolt => strike(ctx, 4, false),
        CardType::FrostShield => ctx.player.gain_block(8),
        CardType::AncestorsCall => {
            ctx.apply_effect(Side::Player, EffectType::Strength, 2);
            ctx.apply_effect(Side::Enemy, EffectType::Weak, 1);
        }
        CardType::BloodthirstyBackstab => {
            // Heals the modified amount even if the hit is absorbed.
            let damage = ctx.player_attack_damage(3);
            ctx.heal(Side::Player, damage);
            ctx.deal_damage(Side::Enemy, damage, false);
        }
        CardType::BigBang => {
            ctx.deal_damage(Side::Enemy, 8, false);
            ctx.deal_damage(Side::Player, 8, false);
        }

        CardType::LaserBeam => strike(ctx, 6, true),
        CardType::NaniteRepair => {
            ctx.heal(Side::Player, 3);
            ctx.apply_effect(Side::Player, EffectType::Strength, 1);
        }
        CardType::EmStrike => {
            strike(ctx, 3, false);
            ctx.apply_effect(Side::Enemy, EffectType::Vulnerable, 2);
        }
        CardType::AntimatterExplosion => {
            strike(ctx, 6, false);
            ctx.apply_effect(Side::Enemy, EffectType::Vulnerable, 1);
        }
        CardType::ElectronicField => ctx.player.gain_block(4),
        CardType::QuantumJump => {
            ctx.apply_effect(Side::Player, EffectType::Immune, 0);
        }

        CardType::Static => {}
    }
}

fn strike(ctx: &mut BattleContext<'_>, base: u32, ignores_block: bool) {
    let damage = ctx.player_attack_damage(base);
    ctx.deal_damage(Side::Enemy, damage, ignores_block);
}
