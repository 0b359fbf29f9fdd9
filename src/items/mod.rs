//! Items, the inventory, and the equipped body.

pub mod scoring;
pub mod types;

pub use scoring::{equip_best_from_inventory, equip_if_better};
pub use types::{Body, BodySlot, Inventory, Item};
