//! Key-value persistence for the best score.
//!
//! The tracker only needs `get` and `set` on text values. `MemoryStore` keeps
//! them in a map; `FileStore` writes the whole map to disk with bincode on
//! every `set`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::StoreError;

/// Persistence collaborator.
pub trait KeyValueStore {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store. Nothing survives the process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single bincode-encoded file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store, reading existing entries if the file exists.
    ///
    /// A missing or empty file opens as an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => BTreeMap::new(),
            Ok(bytes) => bincode::deserialize(&bytes)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, entries })
    }

    /// File backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let bytes = bincode::serialize(&self.entries)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("highscore"), None);

        store.set("highscore", "12").unwrap();
        assert_eq!(store.get("highscore"), Some("12".to_string()));

        store.set("highscore", "9").unwrap();
        assert_eq!(store.get("highscore"), Some("9".to_string()));
    }

    #[test]
    fn test_memory_store_with_entry() {
        let store = MemoryStore::new().with_entry("highscore", "7");
        assert_eq!(store.get("highscore"), Some("7".to_string()));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.bin");

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("highscore"), None);
        store.set("highscore", "14").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("highscore"), Some("14".to_string()));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.bin");
        fs::write(&path, [0xff; 3]).unwrap();

        assert!(matches!(FileStore::open(&path), Err(StoreError::Encode(_))));
    }

    #[test]
    fn test_file_store_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist
        let mut store = FileStore::open(dir.path().join("missing").join("scores.bin")).unwrap();

        assert!(matches!(store.set("highscore", "3"), Err(StoreError::Io(_))));
        assert_eq!(store.get("highscore"), Some("3".to_string()));
    }
}
