//! Scales a randomly drawn monster archetype into a concrete enemy.
//!
//! Hp and level land within ±20% of the character's values; the xp award
//! grows 30% per character level on top of the monster's base. All draws
//! come from the caller's generator, so a single process-wide rng (seeded
//! once at startup) serves every spawn without correlated draws.

use rand::Rng;

use super::types::Enemy;
use crate::catalog::Catalog;
use crate::character::Character;
use crate::core::constants::{ENEMY_HP_FLOOR, ENEMY_SCALE_FRACTION, XP_PER_PLAYER_LEVEL};

/// Draws a monster uniformly from the catalog and scales it against the
/// character. The catalog guarantees at least one monster and a fully
/// resolvable loot table.
pub fn spawn_enemy(catalog: &Catalog, character: &Character, rng: &mut impl Rng) -> Enemy {
    let monsters = catalog.monsters();
    let monster = &monsters[rng.gen_range(0..monsters.len())];

    Enemy {
        name: monster.name.clone(),
        id: monster.id.to_string(),
        race: monster.race,
        cast: monster.cast,
        hp: scale_hp(character.max_hp, rng),
        loot: catalog.resolve_loot(monster),
        gold: monster.gold,
        xp: scale_xp(character.level, monster.xp),
        level: scale_level(character.level, rng),
        rareness_level: monster.rare,
        armor: monster.armor,
        damage: monster.damage,
    }
}

/// Enemy hp: uniform within ±20% of the character's max hp, floored at 100.
/// The limiter clamps to 1 so a degenerate max hp never produces an empty
/// random range.
pub fn scale_hp(player_max_hp: u32, rng: &mut impl Rng) -> u32 {
    let scaled = scale_within_band(player_max_hp as i64, rng);
    scaled.max(ENEMY_HP_FLOOR) as u32
}

/// Enemy level: the same ±20% band around the character's level, floored at
/// 0. No upper cap.
pub fn scale_level(player_level: u32, rng: &mut impl Rng) -> u32 {
    scale_within_band(player_level as i64, rng).max(0) as u32
}

fn scale_within_band(base: i64, rng: &mut impl Rng) -> i64 {
    let limiter = ((base as f64 * ENEMY_SCALE_FRACTION).round() as i64).max(1);
    (base - limiter) + rng.gen_range(0..limiter * 2)
}

/// Xp award: the monster's base xp inflated 30% per character level.
pub fn scale_xp(player_level: u32, base_xp: u64) -> u64 {
    base_xp + (base_xp as f64 * player_level as f64 * XP_PER_PLAYER_LEVEL).round() as u64
}
