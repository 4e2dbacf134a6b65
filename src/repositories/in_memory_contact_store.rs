use super::traits::ContactStore;
use crate::domain::ContactKey;
use crate::models::ContactRef;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// ContactStore backed by a `HashMap` behind a `RwLock`.
///
/// Reads share the lock; inserts take it exclusively so that the duplicate
/// check and the write cannot interleave with another insert.
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    contacts: RwLock<HashMap<ContactKey, ContactRef>>,
}

impl InMemoryContactStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // Entries are inserted whole, so a panic elsewhere cannot leave the map torn.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<ContactKey, ContactRef>> {
        self.contacts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ContactKey, ContactRef>> {
        self.contacts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContactStore for InMemoryContactStore {
    fn insert_if_absent(&self, key: ContactKey, contact: ContactRef) -> bool {
        match self.write().entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(contact);
                true
            }
        }
    }

    fn contains(&self, key: &ContactKey) -> bool {
        self.read().contains_key(key)
    }

    fn snapshot(&self) -> Vec<ContactRef> {
        self.read().values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
