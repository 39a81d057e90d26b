//! Injected key-value storage backing the persisted collections.
//!
//! The engine never touches storage ambiently; it owns a [`Storage`]
//! implementation handed to it at construction so tests can swap in
//! [`MemoryStorage`]. [`FileStorage`] is the durable implementation: one
//! file per key, rewritten in full on every write.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Error writing to storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem write failed.
    #[error("storage write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// Durable string key-value storage.
///
/// Reads are infallible: a missing or unreadable key is simply absent.
/// Writes replace the whole value for a key.
///
/// There is no cross-process or cross-tab coordination; two writers sharing
/// the same backing store race last-write-wins.
pub trait Storage {
    /// Read the raw value for a key, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value for a key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be written.
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}

/// In-memory storage for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. with corrupt content for decode tests.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// File-backed storage: one `<key>.json` file per key under a directory.
///
/// Keys come from [`farmstand_core::CollectionKey`], so no path escaping is
/// needed.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at the given directory. The directory is created on
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_get_set() {
        let mut storage = MemoryStorage::new();
        assert!(storage.get("likes").is_none());
        storage.set("likes", "[]".to_string()).unwrap();
        assert_eq!(storage.get("likes").as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_storage_overwrites() {
        let mut storage = MemoryStorage::new();
        storage.set("k", "a".to_string()).unwrap();
        storage.set("k", "b".to_string()).unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("b"));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = std::env::temp_dir().join(format!("farmstand-storage-{}", std::process::id()));
        let mut storage = FileStorage::new(&dir);
        assert!(storage.get("preorder").is_none());
        storage.set("preorder", "[1]".to_string()).unwrap();
        assert_eq!(storage.get("preorder").as_deref(), Some("[1]"));
        fs::remove_dir_all(dir).unwrap();
    }
}
