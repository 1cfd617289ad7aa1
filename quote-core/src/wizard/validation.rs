//! Contact-step validation.
//!
//! Every field is checked so all problems can be shown at once.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{FormField, WizardFormState};

// local@domain.tld with no whitespace and a single '@'.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("this field is required")]
    RequiredField,

    #[error("please enter a valid email address")]
    InvalidFormat,
}

/// Per-field validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn insert(
        &mut self,
        field: FormField,
        error: FieldError,
    ) {
        self.errors.insert(field, error);
    }

    /// Drops the error for `field`, typically once the user edits it.
    pub fn clear(
        &mut self,
        field: FormField,
    ) {
        self.errors.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Checks a display name: required, whitespace does not count.
pub fn check_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError::RequiredField);
    }
    Ok(())
}

/// Checks an email address: required, then shape.
pub fn check_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        return Err(FieldError::RequiredField);
    }
    if !is_valid_email(email) {
        return Err(FieldError::InvalidFormat);
    }
    Ok(())
}

/// Validates the fields collected on the contact step.
pub fn validate_contact(form: &WizardFormState) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Err(e) = check_name(&form.name) {
        errors.insert(FormField::Name, e);
    }
    if let Err(e) = check_email(&form.email) {
        errors.insert(FormField::Email, e);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
