//! The round loop that resolves one encounter.

pub mod logic;
pub mod types;

pub use logic::attack;
pub use types::{EncounterReport, Outcome};
