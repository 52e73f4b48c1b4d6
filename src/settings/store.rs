//! Key-value backends for [`Settings`](super::Settings).

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::core::{GameError, Result};

/// Boolean key-value storage.
pub trait SettingsStore {
    fn get_bool(&self, key: &str) -> Option<bool>;

    fn set_bool(&mut self, key: &str, value: bool);

    fn has_key(&self, key: &str) -> bool {
        self.get_bool(key).is_some()
    }
}

/// In-memory store, mostly for tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct MemorySettingsStore {
    values: FxHashMap<String, bool>,
}

impl MemorySettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
    }
}

/// Store backed by a JSON object on disk.
///
/// Changes stay in memory until [`persist`](Self::persist) is called.
#[derive(Clone, Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, bool>,
}

impl JsonSettingsStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                GameError::Settings(format!("cannot parse {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(GameError::Settings(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        Ok(Self { path, values })
    }

    /// Write the current values to disk.
    pub fn persist(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.values)
            .map_err(|e| GameError::Settings(e.to_string()))?;
        fs::write(&self.path, text).map_err(|e| {
            GameError::Settings(format!("cannot write {}: {}", self.path.display(), e))
        })?;
        tracing::debug!(path = %self.path.display(), "Persisted settings");
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
    }
}
