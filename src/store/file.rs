//! Checksummed binary character files.
//!
//! One file per character id under a caller-chosen directory:
//! version magic (8 bytes), payload length (4 bytes), bincode payload,
//! SHA-256 checksum (32 bytes) over everything before it. A failed
//! checksum or magic mismatch surfaces as `InvalidData` rather than a
//! silently corrupt character.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use super::CharacterStore;
use crate::character::Character;

const STORE_VERSION_MAGIC: u64 = 0x5146_4348_4152_0001; // "QFCHAR" v1

/// Directory-backed [`CharacterStore`].
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Uses `dir` for character files, creating it if needed.
    pub fn new(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.dat"))
    }
}

impl CharacterStore for FileStore {
    fn load(&self, id: &str) -> io::Result<Option<Character>> {
        let mut file = match fs::File::open(self.path_for(id)) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        let mut magic_bytes = [0u8; 8];
        file.read_exact(&mut magic_bytes)?;
        let magic = u64::from_le_bytes(magic_bytes);
        if magic != STORE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "bad character file magic: expected 0x{STORE_VERSION_MAGIC:016X}, got 0x{magic:016X}"
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let payload_len = u32::from_le_bytes(length_bytes);

        let mut payload = vec![0u8; payload_len as usize];
        file.read_exact(&mut payload)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(magic_bytes);
        hasher.update(length_bytes);
        hasher.update(&payload);
        if stored_checksum != hasher.finalize().as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "character file checksum mismatch",
            ));
        }

        let character = bincode::deserialize(&payload)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(character))
    }

    fn save(&mut self, character: &Character) -> io::Result<()> {
        let payload = bincode::serialize(character)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let payload_len = payload.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(STORE_VERSION_MAGIC.to_le_bytes());
        hasher.update(payload_len.to_le_bytes());
        hasher.update(&payload);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(self.path_for(&character.id))?;
        file.write_all(&STORE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&payload_len.to_le_bytes())?;
        file.write_all(&payload)?;
        file.write_all(&checksum)?;
        Ok(())
    }
}
