use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use super::types::{ItemFile, Monster, MonsterFile};
use crate::items::Item;

const MONSTERS_FILE: &str = "monsters.json";
const ITEMS_FILE: &str = "items.json";

/// The loaded, validated monster and item tables.
///
/// Every `MonsterItem` reference is resolved against the item table at load
/// time, so `resolve_loot` cannot fail afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    monsters: Vec<Monster>,
    items_by_id: HashMap<u32, Item>,
}

impl Catalog {
    /// Reads `monsters.json` and `items.json` from `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref();
        let monsters = fs::read_to_string(dir.join(MONSTERS_FILE))?;
        let items = fs::read_to_string(dir.join(ITEMS_FILE))?;
        Self::from_json(&monsters, &items)
    }

    /// Parses catalog data held in memory.
    pub fn from_json(monsters_json: &str, items_json: &str) -> io::Result<Self> {
        let monster_file: MonsterFile = serde_json::from_str(monsters_json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let item_file: ItemFile = serde_json::from_str(items_json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Self::build(monster_file.monsters, item_file.items)
    }

    fn build(monsters: Vec<Monster>, items: Vec<Item>) -> io::Result<Self> {
        if monsters.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "monster catalog is empty",
            ));
        }

        let items_by_id: HashMap<u32, Item> =
            items.into_iter().map(|item| (item.id, item)).collect();

        // A loot reference that does not resolve, or a chance outside 0-100,
        // is a data-integrity problem. Fail the load, not the encounter.
        for monster in &monsters {
            for entry in &monster.items {
                if !items_by_id.contains_key(&entry.id) {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!(
                            "monster '{}' references unknown item id {}",
                            monster.name, entry.id
                        ),
                    ));
                }
                if entry.chance > 100 {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!(
                            "monster '{}' item {} has chance {} (must be 0-100)",
                            monster.name, entry.id, entry.chance
                        ),
                    ));
                }
            }
        }

        Ok(Self {
            monsters,
            items_by_id,
        })
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items_by_id.get(&id)
    }

    /// Materializes a monster's loot table: each reference becomes a copy of
    /// the catalog item carrying the monster's per-entry drop chance.
    pub fn resolve_loot(&self, monster: &Monster) -> Vec<Item> {
        monster
            .items
            .iter()
            .filter_map(|entry| self.items_by_id.get(&entry.id).cloned().map(|mut item| {
                item.chance = entry.chance;
                item
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONSTERS: &str = r#"{"monsters": [
        {"name": "Cave Rat", "id": 1, "race": 3, "cast": 0,
         "items": [{"id": 10, "chance": 100}, {"id": 11, "chance": 0}],
         "gold": 5, "rare": 1, "xp": 20, "armor": 2, "damage": 8}
    ]}"#;

    const ITEMS: &str = r#"{"items": [
        {"name": "Rat Tail", "id": 10, "dmg": 0, "weight": 1, "armor": 0, "value": 2, "chance": 50},
        {"name": "Rat Fang", "id": 11, "dmg": 1, "weight": 1, "armor": 0, "value": 4, "chance": 50}
    ]}"#;

    #[test]
    fn test_load_valid_catalog() {
        let catalog = Catalog::from_json(MONSTERS, ITEMS).unwrap();
        assert_eq!(catalog.monsters().len(), 1);
        assert_eq!(catalog.item(10).unwrap().name, "Rat Tail");
    }

    #[test]
    fn test_resolve_loot_overrides_chance_with_monster_entry() {
        let catalog = Catalog::from_json(MONSTERS, ITEMS).unwrap();
        let loot = catalog.resolve_loot(&catalog.monsters()[0]);
        assert_eq!(loot.len(), 2);
        // Catalog default is 50 on both; the monster entry wins.
        assert_eq!(loot[0].chance, 100);
        assert_eq!(loot[1].chance, 0);
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        let err = Catalog::from_json("{not json", ITEMS).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_empty_monster_table_is_rejected() {
        let err = Catalog::from_json(r#"{"monsters": []}"#, ITEMS).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_dangling_item_reference_fails_at_load() {
        let monsters = r#"{"monsters": [
            {"name": "Ghoul", "id": 2, "items": [{"id": 99, "chance": 10}],
             "gold": 0, "rare": 1, "xp": 10, "armor": 0, "damage": 1}
        ]}"#;
        let err = Catalog::from_json(monsters, ITEMS).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("unknown item id 99"));
    }

    #[test]
    fn test_out_of_range_chance_fails_at_load() {
        let monsters = r#"{"monsters": [
            {"name": "Ghoul", "id": 2, "items": [{"id": 10, "chance": 101}],
             "gold": 0, "rare": 1, "xp": 10, "armor": 0, "damage": 1}
        ]}"#;
        let err = Catalog::from_json(monsters, ITEMS).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let monsters = r#"{"monsters": [{"name": "Blob", "id": 5}]}"#;
        let catalog = Catalog::from_json(monsters, r#"{"items": []}"#).unwrap();
        let blob = &catalog.monsters()[0];
        assert_eq!(blob.damage, 0);
        assert!(blob.items.is_empty());
    }
}
