mod in_memory_contact_store;
mod traits;

pub use in_memory_contact_store::InMemoryContactStore;
pub use traits::ContactStore;
