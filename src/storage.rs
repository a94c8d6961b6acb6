//! Key-Value Storage
//!
//! Abstract interface over `localStorage` so the stores can run headless.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use gloo_storage::Storage;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// JSON values stored under string keys
pub trait KeyValueStorage {
    /// Load the value under `key`; `Ok(None)` when nothing is stored
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>;

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match gloo_storage::LocalStorage::get::<T>(key) {
            Ok(value) => Ok(Some(value)),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        gloo_storage::LocalStorage::set(key, value)?;
        Ok(())
    }
}

/// In-memory storage holding raw JSON strings
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn set_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.entries.borrow().get(key) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.entries.borrow_mut().insert(key.to_string(), raw);
        Ok(())
    }
}

impl<S: KeyValueStorage> KeyValueStorage for std::rc::Rc<S> {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        (**self).load(key)
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}
