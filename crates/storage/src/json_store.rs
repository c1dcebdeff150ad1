use std::{collections::BTreeMap, fs, path::PathBuf, sync::Mutex};

use log::warn;
use walletwise_core::{Error, Result};

/// Plain key-value namespace persisted as a flat JSON object.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.with_entries(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.guard()?;
        let mut entries = self.load_locked()?;
        Ok(entries.remove(key))
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }

    pub fn clear(&self) -> Result<()> {
        self.with_entries(BTreeMap::clear)
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| Error::Storage("Store lock poisoned".into()))
    }

    fn with_entries<F>(&self, op: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.guard()?;
        let mut entries = self.load_locked()?;
        op(&mut entries);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }

    fn load_locked(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let raw = fs::read(&self.path)?;
        if raw.is_empty() {
            return Ok(BTreeMap::new());
        }

        // A corrupt cache is discarded rather than blocking the session.
        match serde_json::from_slice(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Ignoring unreadable store file {}: {}", self.path.display(), e);
                Ok(BTreeMap::new())
            }
        }
    }
}
