//! Key-value storage for the unlock flag.
//!
//! The session only needs "read string by key" and "write string by key",
//! so storage is abstracted behind [`KeyValueStore`]:
//! - [`RedbStore`]: durable, a single redb file in the data directory
//! - [`MemoryStore`]: in-process, used by tests and as the fallback when the
//!   database cannot be opened

use crate::error::{NotesError, NotesResult};
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Minimal string key-value capability.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> NotesResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> NotesResult<()>;
}

/// Shared handle to any store.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Durable store backed by redb
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<RwLock<Database>>,
}

impl RedbStore {
    /// Open (or create) the database at `path`.
    ///
    /// Creates the parent directory and the key-value table if missing.
    pub fn open(path: impl AsRef<Path>) -> NotesResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Opened key-value store");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> NotesResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> NotesResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory store; contents vanish with the process.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.write().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> NotesResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> NotesResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store whose every operation fails. Exercises the fail-open paths.
#[derive(Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> NotesResult<Option<String>> {
        Err(NotesError::Storage("storage unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> NotesResult<()> {
        Err(NotesError::Storage("storage unavailable".to_string()))
    }
}

/// Open the durable store at `path`, falling back to memory on failure.
///
/// The app must never refuse to start over storage; a visitor whose flag
/// cannot be read simply sees the gate again.
pub fn open_or_fallback(path: impl AsRef<Path>) -> SharedStore {
    let path = path.as_ref();
    match RedbStore::open(path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Falling back to in-memory storage"
            );
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_redb_store_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deep").join("notes.redb");

        let _store = RedbStore::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_redb_store_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = RedbStore::open(temp_dir.path().join("notes.redb")).unwrap();
        assert_eq!(store.get("love:unlocked").unwrap(), None);
    }

    #[test]
    fn test_redb_store_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = RedbStore::open(temp_dir.path().join("notes.redb")).unwrap();

        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_redb_store_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.redb");

        {
            let store = RedbStore::open(&path).unwrap();
            store.set("love:unlocked", "true").unwrap();
        }

        let store = RedbStore::open(&path).unwrap();
        assert_eq!(store.get("love:unlocked").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        let seeded = MemoryStore::with_entry("a", "b");
        assert_eq!(seeded.get("a").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn test_unavailable_store_errors() {
        let store = UnavailableStore;
        assert!(matches!(store.get("k"), Err(NotesError::Storage(_))));
        assert!(store.set("k", "v").is_err());
    }

    #[test]
    fn test_open_or_fallback_uses_memory_when_path_is_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened as a database file
        let store = open_or_fallback(temp_dir.path());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
