//! Rewards applied after a won encounter, plus the level-up seam.
//!
//! Experience is added verbatim (the enemy factory already scaled it), loot
//! is rolled independently per table entry, and the level threshold is left
//! to a pluggable [`LevelRule`] so crossing `next_level_xp` never mutates a
//! character implicitly.

use rand::Rng;

use crate::character::Character;
use crate::core::constants::{
    LEVEL_UP_MAX_HP_MULTIPLIER, LEVEL_UP_XP_CURVE_MULTIPLIER, LOOT_ROLL_MAX, LOOT_ROLL_MIN,
    PROGRESS_BAR_WIDTH,
};
use crate::enemy::Enemy;
use crate::items::Item;

/// Adds the enemy's (already scaled) xp to the character. Does not touch
/// level or thresholds; see [`LevelRule`].
pub fn award_xp(character: &mut Character, enemy: &Enemy) {
    character.current_xp += enemy.xp;
}

/// Rolls every loot-table entry independently: a 1-100 draw at or under the
/// entry's chance drops a copy into the inventory. Returns the drops for
/// the encounter report.
pub fn award_items(character: &mut Character, enemy: &Enemy, rng: &mut impl Rng) -> Vec<Item> {
    let mut dropped = Vec::new();
    for item in &enemy.loot {
        let roll = rng.gen_range(LOOT_ROLL_MIN..=LOOT_ROLL_MAX);
        if roll <= item.chance {
            character.inventory.items.push(item.clone());
            dropped.push(item.clone());
        }
    }
    dropped
}

/// Percentage of the way to the next level, clamped to 0-100. A threshold
/// under 100 would zero the integer divisor, so it reports full progress
/// instead of faulting.
pub fn progress_percent(current_xp: u64, next_level_xp: u64) -> u64 {
    let divisor = next_level_xp / PROGRESS_BAR_WIDTH;
    if divisor == 0 {
        return PROGRESS_BAR_WIDTH;
    }
    (current_xp / divisor).min(PROGRESS_BAR_WIDTH)
}

/// A 100-character bar: `#` for earned progress, `.` for the remainder.
pub fn progress_bar(current_xp: u64, next_level_xp: u64) -> String {
    let hashes = progress_percent(current_xp, next_level_xp) as usize;
    let dots = PROGRESS_BAR_WIDTH as usize - hashes;
    let mut bar = String::with_capacity(PROGRESS_BAR_WIDTH as usize);
    bar.push_str(&"#".repeat(hashes));
    bar.push_str(&".".repeat(dots));
    bar
}

/// What happens when accumulated xp crosses `next_level_xp`. The current
/// rule set does not auto-level; callers opt in by applying a rule after
/// encounters.
pub trait LevelRule {
    fn apply(&self, character: &mut Character);
}

/// Source behavior: xp accrues past the threshold, nothing else changes.
pub struct NoAutoLevel;

impl LevelRule for NoAutoLevel {
    fn apply(&self, _character: &mut Character) {}
}

/// Rollover leveling: each threshold crossing consumes the xp, raises the
/// level, and scales max hp (x1.1) and the next threshold (x1.5). Current
/// hp is untouched; resting is still the only heal.
pub struct StandardLevelUp;

impl LevelRule for StandardLevelUp {
    fn apply(&self, character: &mut Character) {
        while character.next_level_xp > 0 && character.current_xp >= character.next_level_xp {
            character.current_xp -= character.next_level_xp;
            character.level += 1;
            character.max_hp = (character.max_hp as f64 * LEVEL_UP_MAX_HP_MULTIPLIER).round() as u32;
            character.next_level_xp =
                (character.next_level_xp as f64 * LEVEL_UP_XP_CURVE_MULTIPLIER).round() as u64;
        }
    }
}
