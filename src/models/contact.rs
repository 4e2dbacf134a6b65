//! Contact model representing a person in the registry.

use crate::domain::{ContactField, ContactKey, PhoneRules, ValidationError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared reference to a stored Contact.
///
/// Stored contacts never change, so the registry hands out shared references
/// instead of cloning the strings on every enumeration.
pub type ContactRef = Arc<Contact>;

/// A contact: first name, last name and phone number.
///
/// Fields are stored exactly as supplied. Construction never validates; call
/// [`Contact::validate`] (or register the contact) to check them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Contact {
    first_name: Option<String>,
    last_name: Option<String>,
    phone_number: Option<String>,
}

impl Contact {
    /// Create a contact from possibly absent fields.
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            phone_number,
        }
    }

    /// Create a contact where every field is present.
    pub fn from_parts(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self::new(
            Some(first_name.into()),
            Some(last_name.into()),
            Some(phone_number.into()),
        )
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Check that the first name is present and not blank.
    pub fn validate_first_name(&self) -> Result<(), ValidationError> {
        require_text(self.first_name(), ContactField::FirstName).map(|_| ())
    }

    /// Check that the last name is present and not blank.
    pub fn validate_last_name(&self) -> Result<(), ValidationError> {
        require_text(self.last_name(), ContactField::LastName).map(|_| ())
    }

    /// Check the phone number against the default [`PhoneRules`].
    pub fn validate_phone_number(&self) -> Result<(), ValidationError> {
        self.validate_phone_number_with(&PhoneRules::default())
    }

    /// Check the phone number against the given rules.
    ///
    /// Absent is reported before blank, blank before length, length before
    /// prefix.
    pub fn validate_phone_number_with(&self, rules: &PhoneRules) -> Result<(), ValidationError> {
        let phone = self
            .phone_number()
            .ok_or_else(|| ValidationError::missing(ContactField::PhoneNumber))?;
        rules.check(phone)
    }

    /// Validate every field with the default phone rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with(&PhoneRules::default())
    }

    /// Validate first name, last name, then phone number; the first failure wins.
    pub fn validate_with(&self, rules: &PhoneRules) -> Result<(), ValidationError> {
        self.validate_first_name()?;
        self.validate_last_name()?;
        self.validate_phone_number_with(rules)
    }

    /// The registry key for this contact.
    ///
    /// Absent names contribute an empty string; validated contacts always have both.
    pub fn key(&self) -> ContactKey {
        ContactKey::from_names(
            self.first_name().unwrap_or_default(),
            self.last_name().unwrap_or_default(),
        )
    }
}

fn require_text(value: Option<&str>, field: ContactField) -> Result<&str, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::missing(field))?;
    if value.trim().is_empty() {
        return Err(ValidationError::blank(field));
    }
    Ok(value)
}
