use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{EditorError, Result};

/// Keys used by the persistence streams. Values are plain strings;
/// `fontSize` is serialized as decimal text.
pub mod keys {
    pub const CONTENT: &str = "content";
    pub const THEME: &str = "theme";
    pub const FONT_SIZE: &str = "fontSize";
    pub const FILE_NAME: &str = "fileName";
}

/// A durable string key-value store scoped to the user session.
///
/// Injected into the editor rather than accessed as an ambient global, so
/// the persistence behavior is testable against an in-memory double.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests and for hosts that opt out of persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store keeping all entries as one pretty-printed JSON map.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at the default config location, loading any existing
    /// entries. A missing or unparseable file yields an empty store.
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    pub fn open(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("failed to parse session store {}: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, entries }
    }

    /// Store file path (cross-platform): config_dir/markpad/session.json
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("markpad");
        path.push("session.json");
        path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
            .map_err(|e| EditorError::Store(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(keys::CONTENT).unwrap(), None);
        store.set(keys::CONTENT, "# hi").unwrap();
        store.set(keys::FONT_SIZE, "16").unwrap();
        assert_eq!(store.get(keys::CONTENT).unwrap(), Some("# hi".to_string()));
        assert_eq!(store.get(keys::FONT_SIZE).unwrap(), Some("16".to_string()));
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileStore::open(path.clone());
        store.set(keys::THEME, "dark").unwrap();
        store.set(keys::FILE_NAME, "notes.md").unwrap();

        let reopened = FileStore::open(path);
        assert_eq!(reopened.get(keys::THEME).unwrap(), Some("dark".to_string()));
        assert_eq!(
            reopened.get(keys::FILE_NAME).unwrap(),
            Some("notes.md".to_string())
        );
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("session.json");
        let mut store = FileStore::open(path.clone());
        store.set(keys::CONTENT, "body").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_store_tolerates_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json {").unwrap();

        let store = FileStore::open(path);
        assert_eq!(store.get(keys::CONTENT).unwrap(), None);
    }

    #[test]
    fn test_file_store_overwrites_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut store = FileStore::open(path.clone());
        store.set(keys::CONTENT, "first").unwrap();
        store.set(keys::CONTENT, "second").unwrap();

        let reopened = FileStore::open(path);
        assert_eq!(
            reopened.get(keys::CONTENT).unwrap(),
            Some("second".to_string())
        );
    }
}
