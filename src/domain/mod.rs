//! Domain value objects and types.
//!
//! This module contains the pieces of contact validation that do not depend on
//! storage: the registry key, the phone number rules, and the typed validation
//! errors callers branch on.

pub mod contact_key;
pub mod errors;
pub mod phone;

pub use contact_key::ContactKey;
pub use errors::{ContactField, ValidationError, ValidationErrorKind};
pub use phone::PhoneRules;
