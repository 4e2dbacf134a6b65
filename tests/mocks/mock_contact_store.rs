use contact_registry::models::ContactRef;
use contact_registry::repositories::ContactStore;
use contact_registry::ContactKey;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps contacts in a plain map and tracks method calls so tests can verify
/// which storage operations the registry performed.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactStore {
    contacts: Arc<Mutex<HashMap<ContactKey, ContactRef>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MockContactStore {
    fn insert_if_absent(&self, key: ContactKey, contact: ContactRef) -> bool {
        self.track_call("insert_if_absent");

        let mut contacts = self.contacts.lock().unwrap();
        if contacts.contains_key(&key) {
            return false;
        }
        contacts.insert(key, contact);
        true
    }

    fn contains(&self, key: &ContactKey) -> bool {
        self.track_call("contains");
        self.contacts.lock().unwrap().contains_key(key)
    }

    fn snapshot(&self) -> Vec<ContactRef> {
        self.track_call("snapshot");
        self.contacts.lock().unwrap().values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.track_call("len");
        self.contacts.lock().unwrap().len()
    }
}
