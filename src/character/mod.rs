//! The player character: attributes, sheet, and ancillary services.

pub mod attributes;
pub mod types;

pub use attributes::Stats;
pub use types::Character;
