use serde::{Deserialize, Serialize};

/// An equipable or lootable item. Catalog entries are immutable; characters
/// and enemies hold copies once an item is acquired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub id: u32,
    #[serde(default)]
    pub dmg: i32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub armor: i32,
    #[serde(default)]
    pub value: u64,
    /// Drop probability, 0-100. On an enemy's loot table this is the
    /// monster's per-entry chance, not the catalog default.
    #[serde(default)]
    pub chance: u32,
}

/// Ordered item storage owned by one character. Capacity is recorded but
/// not enforced as a hard limit by the current rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<Item>,
    #[serde(default)]
    pub capacity: u32,
}

impl Inventory {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total sale value of everything carried.
    pub fn total_value(&self) -> u64 {
        self.items.iter().map(|item| item.value).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodySlot {
    LRing,
    RRing,
    Armor,
    Head,
    Weapon,
    Shield,
}

impl BodySlot {
    pub fn all() -> [BodySlot; 6] {
        [
            BodySlot::LRing,
            BodySlot::RRing,
            BodySlot::Armor,
            BodySlot::Head,
            BodySlot::Weapon,
            BodySlot::Shield,
        ]
    }
}

/// The six equipment slots of a character. Only the weapon contributes to
/// offense; the other five slots stack into the defensive armor total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub lring: Option<Item>,
    pub rring: Option<Item>,
    pub armor: Option<Item>,
    pub head: Option<Item>,
    pub weapon: Option<Item>,
    pub shield: Option<Item>,
}

impl Body {
    pub fn get(&self, slot: BodySlot) -> &Option<Item> {
        match slot {
            BodySlot::LRing => &self.lring,
            BodySlot::RRing => &self.rring,
            BodySlot::Armor => &self.armor,
            BodySlot::Head => &self.head,
            BodySlot::Weapon => &self.weapon,
            BodySlot::Shield => &self.shield,
        }
    }

    pub fn set(&mut self, slot: BodySlot, item: Option<Item>) {
        match slot {
            BodySlot::LRing => self.lring = item,
            BodySlot::RRing => self.rring = item,
            BodySlot::Armor => self.armor = item,
            BodySlot::Head => self.head = item,
            BodySlot::Weapon => self.weapon = item,
            BodySlot::Shield => self.shield = item,
        }
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [
            &self.lring,
            &self.rring,
            &self.armor,
            &self.head,
            &self.weapon,
            &self.shield,
        ]
        .into_iter()
        .filter_map(|item| item.as_ref())
    }

    /// Damage contributed by the weapon slot. Bare-handed is 0; the combat
    /// resolver applies its own per-round floor.
    pub fn weapon_damage(&self) -> i32 {
        self.weapon.as_ref().map_or(0, |weapon| weapon.dmg)
    }

    /// Combined armor across the five defensive slots (weapon excluded).
    pub fn total_armor(&self) -> i32 {
        [&self.head, &self.armor, &self.shield, &self.lring, &self.rring]
            .into_iter()
            .filter_map(|item| item.as_ref())
            .map(|item| item.armor)
            .sum()
    }
}
