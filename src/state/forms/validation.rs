//! Field validation rules for the sign-up form
//!
//! Each field is checked by its own predicate and every failing field is
//! reported, so the UI can show all messages at once.

use super::field::FieldName;
use super::form_state::FormValues;
use std::collections::BTreeMap;
use thiserror::Error;

/// Minimum number of characters accepted for the name field
pub const NAME_MIN_LEN: usize = 3;

/// A user-input problem attached to a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(FieldName),
    #[error("Name must be at least {min} characters")]
    TooShort { min: usize },
    #[error("Passwords do not match")]
    Mismatch,
}

/// Validation outcome for one set of values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    errors: BTreeMap<FieldName, FieldError>,
}

impl ValidationState {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Fields with an active error, in display order
    #[cfg(test)]
    pub fn invalid_fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.errors.keys().copied()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Validate every field of `values`
pub fn validate(values: &FormValues) -> ValidationState {
    let checks = [
        (FieldName::Name, check_name(&values.name)),
        (FieldName::Password, check_password(&values.password)),
        (
            FieldName::ConfirmPassword,
            check_confirm_password(&values.password, &values.confirm_password),
        ),
    ];

    let errors = checks
        .into_iter()
        .filter_map(|(field, result)| result.err().map(|e| (field, e)))
        .collect();

    ValidationState { errors }
}

// Empty takes priority over the length rule
fn check_name(name: &str) -> Result<(), FieldError> {
    if name.is_empty() {
        return Err(FieldError::Required(FieldName::Name));
    }
    if name.chars().count() < NAME_MIN_LEN {
        return Err(FieldError::TooShort { min: NAME_MIN_LEN });
    }
    Ok(())
}

fn check_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(FieldError::Required(FieldName::Password));
    }
    Ok(())
}

fn check_confirm_password(password: &str, confirm: &str) -> Result<(), FieldError> {
    if confirm.is_empty() {
        return Err(FieldError::Required(FieldName::ConfirmPassword));
    }
    if password != confirm {
        return Err(FieldError::Mismatch);
    }
    Ok(())
}
