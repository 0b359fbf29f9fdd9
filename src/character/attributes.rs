use serde::{Deserialize, Serialize};

/// The six base attributes of a character.
///
/// Currently data-only: combat math does not consume them yet. They are
/// tracked and persisted so a future rule set can weight damage, loot, or
/// flee thresholds without a save migration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub perception: u32,
    pub luck: u32,
    pub constitution: u32,
}

impl Stats {
    pub fn total(&self) -> u32 {
        self.strength
            + self.agility
            + self.intelligence
            + self.perception
            + self.luck
            + self.constitution
    }
}
