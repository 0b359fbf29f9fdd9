//! Questfield - encounter and progression core for a text RPG.
//!
//! The crate resolves one encounter at a time: a monster is drawn from the
//! catalog and scaled against the character, the round loop attrits both
//! sides, and a win pays out experience and loot. Login, HTTP routing, and
//! storage format decisions live outside; this crate exposes the game math
//! plus narrow seams (catalog source, character store) for those
//! collaborators.

pub mod catalog;
pub mod character;
pub mod combat;
pub mod core;
pub mod enemy;
pub mod items;
pub mod progression;
pub mod simulator;
pub mod store;

pub use catalog::Catalog;
pub use character::Character;
pub use combat::{attack, EncounterReport, Outcome};
pub use enemy::{spawn_enemy, Enemy};
