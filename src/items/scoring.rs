//! Best-in-slot comparison and auto-equip.
//!
//! Weapons are judged on damage, every other slot on armor. A candidate has
//! to be strictly better to displace the current piece; ties keep what is
//! already worn. Nothing is destroyed: the losing item always ends up in the
//! inventory.

use super::types::{Body, BodySlot, Item};
use crate::character::Character;

/// The stat a slot is judged on.
pub fn slot_stat(slot: BodySlot, item: &Item) -> i32 {
    match slot {
        BodySlot::Weapon => item.dmg,
        _ => item.armor,
    }
}

fn current_stat(body: &Body, slot: BodySlot) -> i32 {
    body.get(slot)
        .as_ref()
        .map_or(0, |worn| slot_stat(slot, worn))
}

/// Equips `item` into `slot` if it is strictly better than the current
/// piece. Returns true when the candidate was equipped.
pub fn equip_if_better(character: &mut Character, slot: BodySlot, item: Item) -> bool {
    if slot_stat(slot, &item) > current_stat(&character.body, slot) {
        if let Some(displaced) = character.body.get(slot).clone() {
            character.inventory.items.push(displaced);
        }
        character.body.set(slot, Some(item));
        true
    } else {
        character.inventory.items.push(item);
        false
    }
}

/// Sweeps the inventory for the best upgrade for `slot` and wears it,
/// returning the displaced piece to the inventory. Returns true when an
/// upgrade was found.
pub fn equip_best_from_inventory(character: &mut Character, slot: BodySlot) -> bool {
    let worn = current_stat(&character.body, slot);
    let best = character
        .inventory
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| slot_stat(slot, item) > worn)
        .max_by_key(|(_, item)| slot_stat(slot, item))
        .map(|(index, _)| index);

    match best {
        Some(index) => {
            let candidate = character.inventory.items.remove(index);
            equip_if_better(character, slot, candidate)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, dmg: i32, armor: i32) -> Item {
        Item {
            name: name.to_string(),
            id: 7,
            dmg,
            weight: 1,
            armor,
            value: 5,
            chance: 0,
        }
    }

    #[test]
    fn test_strictly_better_weapon_replaces_and_displaces_to_inventory() {
        let mut character = Character::new("Tester");
        character.body.set(BodySlot::Weapon, Some(item("Rusty Sword", 5, 0)));

        assert!(equip_if_better(
            &mut character,
            BodySlot::Weapon,
            item("Steel Sword", 9, 0)
        ));
        assert_eq!(character.body.weapon_damage(), 9);
        assert_eq!(
            character.inventory.items[0].name, "Rusty Sword",
            "displaced weapon must return to the inventory"
        );
    }

    #[test]
    fn test_tie_keeps_existing_item() {
        let mut character = Character::new("Tester");
        character.body.set(BodySlot::Head, Some(item("Old Helm", 0, 4)));

        assert!(!equip_if_better(
            &mut character,
            BodySlot::Head,
            item("New Helm", 0, 4)
        ));
        assert_eq!(
            character.body.get(BodySlot::Head).as_ref().unwrap().name,
            "Old Helm"
        );
        assert_eq!(character.inventory.items[0].name, "New Helm");
    }

    #[test]
    fn test_armor_slots_compare_on_armor_not_damage() {
        let mut character = Character::new("Tester");
        character.body.set(BodySlot::Shield, Some(item("Buckler", 0, 3)));

        // Higher damage but lower armor: not an upgrade for a shield slot.
        assert!(!equip_if_better(
            &mut character,
            BodySlot::Shield,
            item("Spiked Shield", 10, 2)
        ));
    }

    #[test]
    fn test_equip_into_empty_slot() {
        let mut character = Character::new("Tester");
        assert!(equip_if_better(
            &mut character,
            BodySlot::Armor,
            item("Leather Vest", 0, 2)
        ));
        assert!(character.inventory.is_empty());
    }

    #[test]
    fn test_equip_best_from_inventory_picks_the_highest_upgrade() {
        let mut character = Character::new("Tester");
        character.body.set(BodySlot::Weapon, Some(item("Club", 3, 0)));
        character.inventory.items = vec![
            item("Dagger", 4, 0),
            item("Greatsword", 11, 0),
            item("Mace", 6, 0),
        ];

        assert!(equip_best_from_inventory(&mut character, BodySlot::Weapon));
        assert_eq!(character.body.weapon_damage(), 11);
        // Club displaced, Dagger and Mace untouched.
        assert_eq!(character.inventory.items.len(), 3);
        assert!(character
            .inventory
            .items
            .iter()
            .any(|carried| carried.name == "Club"));
    }

    #[test]
    fn test_equip_best_from_inventory_without_upgrade_changes_nothing() {
        let mut character = Character::new("Tester");
        character.body.set(BodySlot::Weapon, Some(item("Club", 8, 0)));
        character.inventory.items = vec![item("Dagger", 4, 0)];

        assert!(!equip_best_from_inventory(&mut character, BodySlot::Weapon));
        assert_eq!(character.body.weapon_damage(), 8);
        assert_eq!(character.inventory.items.len(), 1);
    }
}
