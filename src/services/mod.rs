//! Application service layer.
//!
//! Services hold the business rules and write through the storage seam in
//! `repositories`.

mod contact_registry;

pub use contact_registry::ContactRegistry;
