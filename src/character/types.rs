use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attributes::Stats;
use crate::items::{Body, Inventory};

/// A player character. Lifecycle is owned by the surrounding service: it is
/// created at registration, loaded and saved per session through a
/// [`CharacterStore`](crate::store::CharacterStore), and mutated in place by
/// encounters, resting, and selling.
///
/// Invariant: `0 <= hp <= max_hp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub inventory: Inventory,
    pub body: Body,
    pub stats: Stats,
    pub hp: u32,
    pub max_hp: u32,
    pub current_xp: u64,
    pub next_level_xp: u64,
    pub gold: u64,
    pub level: u32,
    pub race: u32,
    pub cast: u32,
}

impl Character {
    /// A freshly registered level 1 character with a random id.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            inventory: Inventory {
                items: Vec::new(),
                capacity: 20,
            },
            body: Body::default(),
            stats: Stats::default(),
            hp: 100,
            max_hp: 100,
            current_xp: 0,
            next_level_xp: 100,
            gold: 0,
            level: 1,
            race: 0,
            cast: 0,
        }
    }

    /// Fully replenishes health. No cooldown, no cost.
    pub fn rest(&mut self) {
        self.hp = self.max_hp;
    }

    /// Liquidates the whole inventory into gold. Irreversible; there is no
    /// partial-sell mode.
    pub fn sell_items(&mut self) {
        self.gold += self.inventory.total_value();
        self.inventory.items.clear();
    }
}
