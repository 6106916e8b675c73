use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::AppError;

/// Key/value backend the session store persists into. The browser build
/// implements this over `window.localStorage`.
pub trait SessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;
    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for &S {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).write(key, value)
    }
}

/// In-process storage for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw entry, bypassing serialization.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self.entries.lock().map_err(|e| AppError::StorageUnavailable {
            message: e.to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().map_err(|e| AppError::StorageWriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
