//! Key-value persistence for the nickname and the leaderboard.
//!
//! Two logical keys, string values. Reads of a missing or corrupt key yield a
//! default instead of failing; durability is best-effort.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Key holding the last-used nickname.
pub const NICKNAME_KEY: &str = "nickname";

/// Key holding the JSON-encoded leaderboard array.
pub const LEADERBOARD_KEY: &str = "leaderboard";

/// Error type for store writes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write store file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode store file: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key-value persistence boundary.
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store: one JSON object, read at open, written through on every
/// `set`. Last writer wins.
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing or unparsable file starts empty.
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "corrupt store file, starting empty");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "unreadable store file, starting empty");
                HashMap::new()
            }
        };

        Self { path, values }
    }

    fn flush(&self) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the saved nickname, if any.
pub fn saved_nickname(store: &dyn Store) -> Option<String> {
    store.get(NICKNAME_KEY).filter(|n| !n.is_empty())
}

/// Saves the nickname. Failure is logged and swallowed; losing the prefill is
/// not worth interrupting the player.
pub fn save_nickname(store: &mut dyn Store, nickname: &str) {
    if let Err(err) = store.set(NICKNAME_KEY, nickname) {
        tracing::warn!(%err, "failed to persist nickname");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("quizquest-store-{}-{}.json", name, std::process::id()));
        path
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);
        store.set("nickname", "Ada").unwrap();
        assert_eq!(store.get("nickname"), Some("Ada".to_string()));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let path = temp_path("roundtrip");
        {
            let mut store = JsonFileStore::open(path.clone());
            store.set(NICKNAME_KEY, "Ada").unwrap();
        }
        let store = JsonFileStore::open(path.clone());
        assert_eq!(store.get(NICKNAME_KEY), Some("Ada".to_string()));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let store = JsonFileStore::open(temp_path("missing"));
        assert_eq!(store.get(NICKNAME_KEY), None);
    }

    #[test]
    fn test_file_store_corrupt_file_reads_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json {").unwrap();
        let store = JsonFileStore::open(path.clone());
        assert_eq!(store.get(LEADERBOARD_KEY), None);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_saved_nickname_ignores_empty() {
        let mut store = MemoryStore::new();
        store.set(NICKNAME_KEY, "").unwrap();
        assert_eq!(saved_nickname(&store), None);
        save_nickname(&mut store, "Ada");
        assert_eq!(saved_nickname(&store), Some("Ada".to_string()));
    }
}
