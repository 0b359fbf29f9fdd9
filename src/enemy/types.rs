use serde::{Deserialize, Serialize};

use crate::items::Item;

/// One concrete opponent, created fresh per encounter and discarded after
/// it resolves. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub id: String,
    pub race: u32,
    pub cast: u32,
    /// Scaled against the character's max hp, floored at 100.
    pub hp: u32,
    /// Loot table: catalog item copies carrying this monster's drop chances.
    pub loot: Vec<Item>,
    pub gold: u64,
    /// Already scaled by the character's level; awarded verbatim on a win.
    pub xp: u64,
    pub level: u32,
    /// 1-10 where 10 is highly rare. Copied through; not yet consumed by
    /// combat math.
    pub rareness_level: u32,
    pub armor: i32,
    pub damage: i32,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_damage_saturates_at_zero() {
        let mut enemy = Enemy {
            name: "Wisp".to_string(),
            id: "1".to_string(),
            race: 0,
            cast: 0,
            hp: 5,
            loot: Vec::new(),
            gold: 0,
            xp: 0,
            level: 0,
            rareness_level: 1,
            armor: 0,
            damage: 0,
        };
        enemy.take_damage(50);
        assert_eq!(enemy.hp, 0);
        assert!(!enemy.is_alive());
    }
}
