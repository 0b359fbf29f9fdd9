//! Drives repeated encounters through the real spawn/attack/reward path.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::report::SimReport;
use crate::catalog::Catalog;
use crate::character::Character;
use crate::combat::attack;
use crate::enemy::spawn_enemy;
use crate::items::{BodySlot, Item};

/// Runs the configured number of encounters against one template character
/// and returns the aggregated report.
pub fn run_simulation(catalog: &Catalog, config: &SimConfig) -> SimReport {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut character = template_character(config);
    let mut report = SimReport::default();

    for _ in 0..config.num_encounters {
        let enemy = spawn_enemy(catalog, &character, &mut rng);
        let outcome = attack(&mut character, enemy, &mut rng);

        report.encounters += 1;
        report.total_rounds += u64::from(outcome.rounds);
        if outcome.won() {
            report.wins += 1;
            report.total_xp += outcome.xp_gained;
            for item in &outcome.loot {
                *report.drops.entry(item.name.clone()).or_insert(0) += 1;
            }
        } else {
            report.flees += 1;
        }

        if config.rest_between {
            character.rest();
        }
    }

    if config.sell_after {
        let before = character.gold;
        character.sell_items();
        report.gold_from_sales = character.gold - before;
    }
    report.final_hp = character.hp;
    report
}

fn template_character(config: &SimConfig) -> Character {
    let mut character = Character::new("Simulant");
    character.level = config.character_level;
    character.max_hp = config.character_max_hp;
    character.hp = config.character_max_hp;
    character.next_level_xp = 10_000;
    character.body.set(
        BodySlot::Weapon,
        Some(Item {
            name: "Sim Blade".to_string(),
            id: 9001,
            dmg: config.weapon_damage,
            weight: 2,
            armor: 0,
            value: 0,
            chance: 0,
        }),
    );
    character.body.set(
        BodySlot::Armor,
        Some(Item {
            name: "Sim Plate".to_string(),
            id: 9002,
            dmg: 0,
            weight: 5,
            armor: config.body_armor,
            value: 0,
            chance: 0,
        }),
    );
    character
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONSTERS: &str = r#"{"monsters": [
        {"name": "Cave Rat", "id": 1, "race": 3, "cast": 0,
         "items": [{"id": 10, "chance": 100}],
         "gold": 5, "rare": 1, "xp": 20, "armor": 2, "damage": 8}
    ]}"#;

    const ITEMS: &str = r#"{"items": [
        {"name": "Rat Tail", "id": 10, "dmg": 0, "weight": 1, "armor": 0, "value": 2, "chance": 50}
    ]}"#;

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let catalog = Catalog::from_json(MONSTERS, ITEMS).unwrap();
        let config = SimConfig {
            num_encounters: 50,
            seed: Some(42),
            ..Default::default()
        };
        let a = run_simulation(&catalog, &config);
        let b = run_simulation(&catalog, &config);
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.total_rounds, b.total_rounds);
        assert_eq!(a.total_xp, b.total_xp);
        assert_eq!(a.drops, b.drops);
    }

    #[test]
    fn test_strong_character_farms_the_rat() {
        // Weapon 50 vs armor 2, resting between fights: every encounter is
        // a win and every win drops the chance-100 tail.
        let catalog = Catalog::from_json(MONSTERS, ITEMS).unwrap();
        let config = SimConfig {
            num_encounters: 20,
            seed: Some(7),
            ..Default::default()
        };
        let report = run_simulation(&catalog, &config);
        assert_eq!(report.wins, 20);
        assert_eq!(report.flees, 0);
        assert_eq!(report.drops.get("Rat Tail"), Some(&20));
        // 20 tails at value 2 liquidated at the end.
        assert_eq!(report.gold_from_sales, 40);
    }
}
