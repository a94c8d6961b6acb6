//! Wishlist Store
//!
//! Set of favourited book ids, persisted as `{"<id>": true, ...}` and saved
//! on every toggle.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::storage::KeyValueStorage;

#[derive(Debug, Clone)]
pub struct WishlistStore<S> {
    storage: S,
    key: String,
    members: BTreeMap<String, bool>,
}

impl<S: KeyValueStorage> WishlistStore<S> {
    /// Load the stored set; a missing or unreadable entry gives an empty wishlist
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let members = match storage.load::<BTreeMap<String, bool>>(&key) {
            Ok(Some(stored)) => stored.into_iter().filter(|(_, on)| *on).collect(),
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                log::warn!("Ignoring stored wishlist: {}", e);
                BTreeMap::new()
            }
        };
        log::debug!("Loaded wishlist with {} ids", members.len());
        Self { storage, key, members }
    }

    pub fn is_member(&self, id: &str) -> bool {
        self.members.contains_key(id)
    }

    /// Add the id if absent, remove it if present. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_member = if self.members.remove(id).is_some() {
            false
        } else {
            self.members.insert(id.to_string(), true);
            true
        };
        self.save();
        now_member
    }

    /// Member ids, numeric ids ascending first
    pub fn list_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.members.keys().cloned().collect();
        ids.sort_by(|a, b| compare_ids(a, b));
        ids
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    fn save(&self) {
        if let Err(e) = self.storage.save(&self.key, &self.members) {
            log::warn!("Failed to save wishlist: {}", e);
        }
    }
}

fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
