//! ContactKey value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The key a contact is stored under in the registry.
///
/// Built from the first and last name joined by a hyphen. The phone number
/// takes no part in it, so two people sharing a name share a key.
///
/// # Example
///
/// ```
/// use contact_registry::domain::ContactKey;
///
/// let key = ContactKey::from_names("Andreas", "Priftis");
/// assert_eq!(key.as_str(), "Andreas-Priftis");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactKey(String);

impl ContactKey {
    /// Build the key for a first and last name.
    pub fn from_names(first_name: &str, last_name: &str) -> Self {
        Self(format!("{}-{}", first_name, last_name))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
