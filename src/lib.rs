//! Contact Registry - an in-memory registry of validated contacts.
//!
//! Contacts are added with a first name, last name and phone number. Each
//! field is validated, the contact is keyed by `"<first>-<last>"`, and a
//! second contact with the same key is rejected.
//!
//! # Architecture
//!
//! - **domain**: Registry key, phone number rules and typed validation errors
//! - **models**: The `Contact` record and its validation methods
//! - **repositories**: The `ContactStore` storage seam and its in-memory implementation
//! - **services**: `ContactRegistry`, the add/enumerate API
//! - **observability**: Counters for add outcomes
//! - **import**: JSON-lines bulk import and JSON export of the registry
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod import;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::{ContactField, ContactKey, PhoneRules, ValidationError, ValidationErrorKind};
pub use error::{ConfigError, ImportError, RegistryError, RegistryResult};
pub use import::{import_contacts, write_contacts, ImportReport};
pub use models::{Contact, ContactRef};
pub use observability::RegistryMetrics;
pub use repositories::{ContactStore, InMemoryContactStore};
pub use services::ContactRegistry;
