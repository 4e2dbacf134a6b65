//! Contact registry service.
//!
//! Validates candidate contacts, rejects duplicate keys and stores the rest.

use crate::domain::{ContactKey, PhoneRules};
use crate::error::{RegistryError, RegistryResult};
use crate::models::{Contact, ContactRef};
use crate::observability::RegistryMetrics;
use crate::repositories::{ContactStore, InMemoryContactStore};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A keyed collection of validated contacts.
///
/// The registry is `Send + Sync`; share it by reference or `Arc` between
/// threads. Every add is a single step against the current contents and
/// either stores exactly one contact or stores nothing.
///
/// # Example
///
/// ```
/// use contact_registry::ContactRegistry;
///
/// let registry = ContactRegistry::new();
/// registry.add_contact("Andreas", "Priftis", "0123456789").unwrap();
/// assert_eq!(registry.len(), 1);
/// assert!(registry.add_contact("Andreas", "Priftis", "0987654321").is_err());
/// ```
pub struct ContactRegistry {
    store: Arc<dyn ContactStore>,
    rules: PhoneRules,
    metrics: RegistryMetrics,
}

impl ContactRegistry {
    /// Create an empty registry with the default phone rules.
    pub fn new() -> Self {
        Self::with_rules(PhoneRules::default())
    }

    /// Create an empty in-memory registry with custom phone rules.
    pub fn with_rules(rules: PhoneRules) -> Self {
        Self::with_store(Arc::new(InMemoryContactStore::new()), rules)
    }

    /// Create a registry writing through the given store.
    pub fn with_store(store: Arc<dyn ContactStore>, rules: PhoneRules) -> Self {
        Self {
            store,
            rules,
            metrics: RegistryMetrics::new(),
        }
    }

    /// Validate and store a contact built from three present fields.
    ///
    /// # Errors
    ///
    /// - `RegistryError::Validation` if any field fails validation
    /// - `RegistryError::DuplicateContact` if a contact with the same
    ///   first and last name is already stored
    pub fn add_contact(
        &self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> RegistryResult<ContactKey> {
        self.register(Contact::from_parts(first_name, last_name, phone_number))
    }

    /// Validate and store a caller-built contact, which may have absent fields.
    ///
    /// Returns the key the contact was stored under.
    pub fn register(&self, candidate: Contact) -> RegistryResult<ContactKey> {
        if let Err(err) = candidate.validate_with(&self.rules) {
            self.metrics.track_validation_failure();
            debug!(field = %err.field, error = %err, "Contact rejected by validation");
            return Err(err.into());
        }

        let key = candidate.key();
        let contact = Arc::new(candidate);
        if !self.store.insert_if_absent(key.clone(), contact) {
            self.metrics.track_duplicate();
            debug!(key = %key, "Contact rejected as duplicate");
            return Err(RegistryError::DuplicateContact { key });
        }

        self.metrics.track_added();
        debug!(key = %key, "Contact added");
        Ok(key)
    }

    /// A snapshot of every stored contact, in no particular order.
    ///
    /// The returned vector is detached from the registry.
    pub fn get_all_contacts(&self) -> Vec<ContactRef> {
        self.store.snapshot()
    }

    /// Whether a contact is stored under `key`.
    pub fn contains(&self, key: &ContactKey) -> bool {
        self.store.contains(key)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn rules(&self) -> &PhoneRules {
        &self.rules
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}

impl Default for ContactRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContactRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactRegistry")
            .field("len", &self.len())
            .field("rules", &self.rules)
            .finish()
    }
}
