//! Static monster and item reference data.
//!
//! Loaded once at process start and shared read-only by every encounter.
//! A missing or malformed catalog is a hard initialization error; nothing
//! in this module retries.

pub mod loader;
pub mod types;

pub use loader::Catalog;
pub use types::{ItemFile, Monster, MonsterFile, MonsterItem};
