//! File-backed local store.
//!
//! Persists a flat string map as JSON. Reads fail soft: a missing or
//! unparseable file behaves like an empty store (with a warning for the
//! latter), so a corrupted state file never takes the page down.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use sitewire_core::store::StateStore;
use sitewire_types::error::StoreError;
use tracing::warn;

/// Cross-session key-value store backed by one JSON file.
///
/// Holds the theme choice and anything else that should survive restarts.
#[derive(Debug, Clone)]
pub struct FileLocalStore {
    path: PathBuf,
}

impl FileLocalStore {
    /// Store state in `local_store.json` under `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("local_store.json"),
        }
    }

    fn read_map(&self) -> Result<HashMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(HashMap::new());
            }
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };

        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "local store unparseable, treating as empty");
                Ok(HashMap::new())
            }
        }
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }
        let content =
            serde_json::to_string_pretty(map).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| StoreError::Io(e.to_string()))
    }
}

impl StateStore for FileLocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
