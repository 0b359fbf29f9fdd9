use serde::{Deserialize, Serialize};

use crate::items::Item;

/// A loot-table reference on a monster: which catalog item, and the 0-100
/// chance it drops from this particular monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterItem {
    pub id: u32,
    pub chance: u32,
}

/// A monster archetype from `monsters.json`. Read-only reference data; the
/// enemy factory scales a copy of these numbers against the character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub id: u32,
    #[serde(default)]
    pub race: u32,
    #[serde(default)]
    pub cast: u32,
    #[serde(default)]
    pub items: Vec<MonsterItem>,
    #[serde(default)]
    pub gold: u64,
    /// Rareness, 1-10 where 10 is highly rare.
    #[serde(default)]
    pub rare: u32,
    #[serde(default)]
    pub xp: u64,
    #[serde(default)]
    pub armor: i32,
    #[serde(default)]
    pub damage: i32,
}

/// On-disk shape of `monsters.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterFile {
    pub monsters: Vec<Monster>,
}

/// On-disk shape of `items.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemFile {
    pub items: Vec<Item>,
}
