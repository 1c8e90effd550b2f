//! Preference persistence backends
//!
//! The manager talks to storage through [`PreferenceStore`], a small
//! key-value contract. [`MemoryStore`] backs tests and ephemeral sessions;
//! [`FileStore`] persists a TOML map next to the host application's other
//! configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::error::{Result, StoreError};

/// Key-value persistence contract for theme preferences
pub trait PreferenceStore: Send + Sync {
    /// Read a stored value; `Ok(None)` means no value was saved
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Persist a value under `key`, overwriting any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`; deleting an absent key succeeds
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// TOML-file-backed store
///
/// The whole map lives in memory and every mutation writes the file
/// through. A missing file reads as empty; the parent directory is created
/// on first write.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, loading existing entries
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(StoreError::Io(err)),
        };

        debug!("FileStore::open: {} entries from {}", entries.len(), path.display());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = toml::to_string(entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        if entries.remove(key).is_some() {
            return self.flush(&entries);
        }
        Ok(())
    }
}
