//! The persistence seam the surrounding service plugs into.
//!
//! The core loads a character at encounter start and saves it at the end;
//! it treats the id as an opaque key and makes no storage format decisions
//! beyond the bundled implementations here.

pub mod file;

use std::collections::HashMap;
use std::io;

use crate::character::Character;

/// Contract of the external persistence collaborator.
pub trait CharacterStore {
    /// Fetches a character by opaque id; `Ok(None)` when unknown.
    fn load(&self, id: &str) -> io::Result<Option<Character>>;
    fn save(&mut self, character: &Character) -> io::Result<()>;
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    characters: HashMap<String, Character>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharacterStore for MemoryStore {
    fn load(&self, id: &str) -> io::Result<Option<Character>> {
        Ok(self.characters.get(id).cloned())
    }

    fn save(&mut self, character: &Character) -> io::Result<()> {
        self.characters
            .insert(character.id.clone(), character.clone());
        Ok(())
    }
}

pub use file::FileStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        let mut character = Character::new("Skarl");
        store.save(&character).unwrap();

        character.gold = 99;
        store.save(&character).unwrap();

        let loaded = store.load(&character.id).unwrap().unwrap();
        assert_eq!(loaded.gold, 99);
        assert!(store.load("nobody").unwrap().is_none());
    }
}
