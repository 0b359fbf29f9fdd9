//! Enemy instances and the factory that scales them to the character.

pub mod factory;
pub mod types;

pub use factory::{scale_hp, scale_level, scale_xp, spawn_enemy};
pub use types::Enemy;
