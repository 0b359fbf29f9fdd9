//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of encounters to resolve
    pub num_encounters: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Template character level
    pub character_level: u32,

    /// Template character max hp
    pub character_max_hp: u32,

    /// Weapon damage on the template character's weapon slot
    pub weapon_damage: i32,

    /// Total armor spread across the template character's defensive slots
    pub body_armor: i32,

    /// Rest to full hp between encounters
    pub rest_between: bool,

    /// Sell the inventory after the final encounter
    pub sell_after: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_encounters: 1000,
            seed: None,
            character_level: 10,
            character_max_hp: 200,
            weapon_damage: 50,
            body_armor: 10,
            rest_between: true,
            sell_after: true,
        }
    }
}

impl SimConfig {
    /// Quick config for a no-rest attrition test.
    pub fn attrition_test(num_encounters: u32) -> Self {
        Self {
            num_encounters,
            rest_between: false,
            ..Default::default()
        }
    }
}
