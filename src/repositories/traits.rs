use crate::domain::ContactKey;
use crate::models::ContactRef;

/// Storage for registered contacts.
///
/// Provides abstraction over where contacts are kept, enabling different
/// implementations (in-memory, mock). Implementations must be safe to share
/// across threads without an external lock.
pub trait ContactStore: Send + Sync {
    /// Store `contact` under `key` unless the key is already taken.
    ///
    /// The check and the insert are one atomic step. Returns `true` when the
    /// contact was stored and `false` when the key was already present.
    fn insert_if_absent(&self, key: ContactKey, contact: ContactRef) -> bool;

    /// Whether a contact is stored under `key`.
    fn contains(&self, key: &ContactKey) -> bool;

    /// A copy of every stored contact, in no particular order.
    fn snapshot(&self) -> Vec<ContactRef>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
