use crate::error::PrefsResult;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// String key/value storage, the shape of browser local storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> PrefsResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> PrefsResult<()>;
}

/// Volatile store for tests and hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing encoding.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> PrefsResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PrefsResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A JSON object file of string entries, rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt one is logged and also starts empty, and is
    /// rewritten by the next `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "preference file absent, starting empty");
            return Self {
                path,
                entries: BTreeMap::new(),
            };
        }

        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "Failed to load preferences {:?}: {}. Starting from defaults.",
                    path, e
                );
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn read_entries(path: &Path) -> PrefsResult<BTreeMap<String, String>> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> PrefsResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> PrefsResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PrefsResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.write()
    }
}
