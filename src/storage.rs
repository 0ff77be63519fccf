//! Durable key-value storage for the last entered query

use fjall::Keyspace;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use crate::{Result, WeatherError};

/// Small string key-value port so the orchestrator does not care where
/// values end up.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// fjall-backed store, values are kept as plain UTF-8 bytes
pub struct FjallStore {
    store: Keyspace,
}

fn storage_error(err: impl std::fmt::Display) -> WeatherError {
    WeatherError::storage(err.to_string())
}

impl FjallStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        std::fs::create_dir_all(path)?;
        let db = fjall::Database::builder(path).open().map_err(storage_error)?;
        let items = db
            .keyspace("settings", fjall::KeyspaceCreateOptions::default)
            .map_err(storage_error)?;
        tracing::debug!("Opened storage at {}", path.display());
        Ok(FjallStore { store: items })
    }
}

impl KeyValueStore for FjallStore {
    #[tracing::instrument(name = "storage_get", level = "debug", skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>> {
        let Some(bytes) = self.store.get(key.as_bytes()).map_err(storage_error)? else {
            tracing::debug!("Key not found");
            return Ok(None);
        };
        let value = String::from_utf8(bytes.to_vec()).map_err(storage_error)?;
        Ok(Some(value))
    }

    #[tracing::instrument(name = "storage_set", level = "debug", skip(self))]
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.store
            .insert(key.as_bytes().to_vec(), value.as_bytes().to_vec())
            .map_err(storage_error)?;
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
