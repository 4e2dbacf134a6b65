//! Error types for the contact registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactKey, ValidationError};
use thiserror::Error;

/// Errors that can occur when adding a contact to the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A field failed validation
    #[error("Invalid contact: {0}")]
    Validation(#[from] ValidationError),

    /// A contact with the same key is already stored
    #[error("Contact already exists: {key}")]
    DuplicateContact { key: ContactKey },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can stop a bulk contact import.
///
/// Bad lines are skipped, not reported here; only the input or output
/// streams failing ends an import.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the contact list
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ImportError
pub type ImportResult<T> = Result<T, ImportError>;
