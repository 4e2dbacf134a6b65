//! Phone number rules.

use super::errors::{ContactField, ValidationError, ValidationErrorKind};

/// Required shape of a contact's phone number.
///
/// The defaults describe a ten character number starting with `0`.
///
/// # Example
///
/// ```
/// use contact_registry::domain::PhoneRules;
///
/// let rules = PhoneRules::default();
/// assert!(rules.check("0123456789").is_ok());
/// assert!(rules.check("1123456789").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRules {
    length: usize,
    prefix: String,
}

impl PhoneRules {
    pub const DEFAULT_LENGTH: usize = 10;
    pub const DEFAULT_PREFIX: &'static str = "0";

    pub fn new(length: usize, prefix: impl Into<String>) -> Self {
        Self {
            length,
            prefix: prefix.into(),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Check a present phone number against these rules.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty or whitespace only
    /// - Trimmed value must be exactly `length` characters
    /// - Trimmed value must start with `prefix`
    ///
    /// Checks run in that order and stop at the first failure.
    pub fn check(&self, phone: &str) -> Result<(), ValidationError> {
        let trimmed = phone.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::blank(ContactField::PhoneNumber));
        }

        let actual = trimmed.chars().count();
        if actual != self.length {
            return Err(ValidationError::new(
                ContactField::PhoneNumber,
                ValidationErrorKind::WrongLength {
                    expected: self.length,
                    actual,
                },
            ));
        }

        if !trimmed.starts_with(self.prefix.as_str()) {
            return Err(ValidationError::new(
                ContactField::PhoneNumber,
                ValidationErrorKind::BadPrefix {
                    expected: self.prefix.clone(),
                },
            ));
        }

        Ok(())
    }
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LENGTH, Self::DEFAULT_PREFIX)
    }
}
