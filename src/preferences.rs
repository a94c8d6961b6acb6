//! Preferences Store
//!
//! Last search term and genre, restored into the inputs on startup.

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStorage;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub search_term: String,
    pub genre: String,
}

#[derive(Debug, Clone)]
pub struct PreferencesStore<S> {
    storage: S,
    key: String,
    current: Preferences,
}

impl<S: KeyValueStorage> PreferencesStore<S> {
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match storage.load::<Preferences>(&key) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                log::warn!("Ignoring stored preferences: {}", e);
                Preferences::default()
            }
        };
        Self { storage, key, current }
    }

    pub fn get(&self) -> &Preferences {
        &self.current
    }

    /// Persist both fields as one record
    pub fn set(&mut self, search_term: &str, genre: &str) {
        self.current = Preferences {
            search_term: search_term.to_string(),
            genre: genre.to_string(),
        };
        if let Err(e) = self.storage.save(&self.key, &self.current) {
            log::warn!("Failed to save preferences: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::rc::Rc;

    const KEY: &str = "gutendexPreferences";

    #[test]
    fn test_defaults_when_nothing_stored() {
        let store = PreferencesStore::load(MemoryStorage::new(), KEY);
        assert_eq!(store.get(), &Preferences::default());
    }

    #[test]
    fn test_set_persists_single_record() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = PreferencesStore::load(storage.clone(), KEY);
        store.set("alice", "fiction");

        assert_eq!(
            storage.raw(KEY).as_deref(),
            Some(r#"{"searchTerm":"alice","genre":"fiction"}"#)
        );
        let reloaded = PreferencesStore::load(storage, KEY);
        assert_eq!(reloaded.get().search_term, "alice");
        assert_eq!(reloaded.get().genre, "fiction");
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let storage = MemoryStorage::new();
        storage.set_raw(KEY, r#"{"genre":"poetry"}"#);
        let store = PreferencesStore::load(storage, KEY);
        assert_eq!(store.get().search_term, "");
        assert_eq!(store.get().genre, "poetry");
    }
}
