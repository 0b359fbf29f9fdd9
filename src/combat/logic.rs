//! Attrition loop between a character and one enemy.
//!
//! Damage is fixed per round from equipment and enemy stats, both sides
//! strike simultaneously, and the character bails out at 25% of the hp they
//! entered with. With the per-round damage floor of 1 the loop is bounded
//! by `max(character.hp, enemy.hp)` rounds.

use rand::Rng;

use super::types::{EncounterReport, Outcome};
use crate::character::Character;
use crate::core::constants::{FLEE_HP_FRACTION, MIN_DAMAGE_PER_ROUND};
use crate::enemy::Enemy;
use crate::progression;

/// Resolves one encounter. Mutates the character's hp, and on a win applies
/// the full reward pass (xp plus loot rolls). The enemy is consumed; it is
/// never reused across encounters.
pub fn attack(character: &mut Character, mut enemy: Enemy, rng: &mut impl Rng) -> EncounterReport {
    // Computed once from the hp the character entered with, not recomputed
    // as hp drops. An already-critical character flees before round one.
    let flee_limit = (character.hp as f64 * FLEE_HP_FRACTION).round() as u32;

    let player_damage = per_round_damage(character.body.weapon_damage(), enemy.armor);
    let enemy_damage = per_round_damage(enemy.damage, character.body.total_armor());

    let mut rounds = 0u32;
    while character.hp > flee_limit && enemy.is_alive() {
        // Simultaneous exchange: both strikes land before the next check.
        enemy.take_damage(player_damage);
        character.hp = character.hp.saturating_sub(enemy_damage);
        rounds += 1;
    }

    if !enemy.is_alive() {
        progression::award_xp(character, &enemy);
        let loot = progression::award_items(character, &enemy, rng);
        let bar = progression::progress_bar(character.current_xp, character.next_level_xp);
        EncounterReport {
            outcome: Outcome::Won,
            enemy_name: enemy.name,
            rounds,
            xp_gained: enemy.xp,
            progress: Some(bar),
            loot,
            remaining_hp: character.hp,
        }
    } else {
        EncounterReport {
            outcome: Outcome::Fled,
            enemy_name: enemy.name,
            rounds,
            xp_gained: 0,
            progress: None,
            loot: Vec::new(),
            remaining_hp: character.hp,
        }
    }
}

/// Attack minus the defender's armor, never below 1.
fn per_round_damage(attack: i32, defender_armor: i32) -> u32 {
    (attack - defender_armor).max(MIN_DAMAGE_PER_ROUND as i32) as u32
}
