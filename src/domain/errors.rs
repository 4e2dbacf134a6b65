//! Domain validation errors.

use std::fmt;

/// The contact field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstName => write!(f, "First Name"),
            Self::LastName => write!(f, "Last Name"),
            Self::PhoneNumber => write!(f, "Phone Number"),
        }
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The field was not supplied at all.
    MissingField,

    /// The field is empty or whitespace only.
    BlankField,

    /// The phone number does not have the required number of characters.
    WrongLength { expected: usize, actual: usize },

    /// The phone number does not start with the required prefix.
    BadPrefix { expected: String },
}

/// Errors that can occur while validating a contact's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub field: ContactField,
}

impl ValidationError {
    pub fn new(field: ContactField, kind: ValidationErrorKind) -> Self {
        Self { kind, field }
    }

    pub fn missing(field: ContactField) -> Self {
        Self::new(field, ValidationErrorKind::MissingField)
    }

    pub fn blank(field: ContactField) -> Self {
        Self::new(field, ValidationErrorKind::BlankField)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidationErrorKind::MissingField => write!(f, "{} cannot be null", self.field),
            ValidationErrorKind::BlankField => write!(f, "{} cannot be empty", self.field),
            ValidationErrorKind::WrongLength { expected, actual } => write!(
                f,
                "{} must include {} digits, got {}",
                self.field, expected, actual
            ),
            ValidationErrorKind::BadPrefix { expected } => {
                write!(f, "{} must start with {}", self.field, expected)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
