use serde::{Deserialize, Serialize};

use crate::items::Item;

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The enemy dropped to 0 hp; rewards were applied.
    Won,
    /// The character hit the flee threshold first. No rewards, no penalty
    /// beyond the hp already lost.
    Fled,
}

/// Structured result of one resolved encounter, handed to the presentation
/// layer to render. The core never prints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterReport {
    pub outcome: Outcome,
    pub enemy_name: String,
    pub rounds: u32,
    /// Exactly `enemy.xp` on a win, 0 on a flee.
    pub xp_gained: u64,
    /// Level-up progress bar after the xp award; only present on a win.
    pub progress: Option<String>,
    /// Items that actually dropped, already appended to the inventory.
    pub loot: Vec<Item>,
    pub remaining_hp: u32,
}

impl EncounterReport {
    pub fn won(&self) -> bool {
        self.outcome == Outcome::Won
    }
}
