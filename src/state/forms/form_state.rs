//! Form state management for the sign-up form

use super::field::{Country, FieldName, FormField};
use super::validation::{validate, FieldError, ValidationState};
use crate::state::SubmissionState;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Values entered into the sign-up form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,
    pub password: String,
    pub confirm_password: String,
    pub country: Option<Country>,
}

impl FormValues {
    /// Raw text of a field as typed (country yields its label or "")
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::Country => self.country.map(|c| c.label()).unwrap_or(""),
        }
    }

    /// Copy safe for logging, with secrets blanked
    pub fn redacted(&self) -> Self {
        Self {
            name: self.name.clone(),
            password: "<redacted>".to_string(),
            confirm_password: "<redacted>".to_string(),
            country: self.country,
        }
    }
}

/// Misuse of the form controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form has {0} invalid field(s)")]
    Invalid(usize),
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("unknown country: {0}")]
    UnknownCountry(String),
}

/// Owns the sign-up values, their validation and the submit lifecycle
#[derive(Debug, Clone)]
pub struct SignupForm {
    values: FormValues,
    validation: ValidationState,
    submission: SubmissionState,
    success_until: Option<Instant>,
    success_window: Duration,
    fields: [FormField; 4],
    /// Fields 0..=3, then 4 for the submit button
    pub active_field_index: usize,
    submit_attempted: bool,
}

impl SignupForm {
    /// Index of the submit button in the focus cycle
    pub const SUBMIT_INDEX: usize = 4;

    pub fn new(success_window: Duration) -> Self {
        let values = FormValues::default();
        Self {
            validation: validate(&values),
            values,
            submission: SubmissionState::Idle,
            success_until: None,
            success_window,
            fields: FieldName::ALL.map(FormField::new),
            active_field_index: 0,
            submit_attempted: false,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[name.index()]
    }

    /// Whether the submit button accepts presses
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submission.is_submitting()
    }

    /// Error to show beneath a field; hidden until the field is touched or a
    /// submit was attempted
    pub fn visible_error(&self, name: FieldName) -> Option<&FieldError> {
        if self.field(name).touched || self.submit_attempted {
            self.validation.error(name)
        } else {
            None
        }
    }

    /// Field under the cursor, `None` when the submit button is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    /// Replace the value of one field and re-derive validation.
    ///
    /// For the country field `value` is a display name or "" for no selection.
    pub fn set_field(
        &mut self,
        field: FieldName,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let value = value.into();
        match field {
            FieldName::Name => self.values.name = value,
            FieldName::Password => self.values.password = value,
            FieldName::ConfirmPassword => self.values.confirm_password = value,
            FieldName::Country => {
                self.values.country = if value.is_empty() {
                    None
                } else {
                    Some(value.parse().map_err(FormError::UnknownCountry)?)
                };
            }
        }
        self.fields[field.index()].touched = true;
        self.revalidate();
        Ok(())
    }

    pub fn set_country(&mut self, country: Option<Country>) {
        self.values.country = country;
        self.fields[FieldName::Country.index()].touched = true;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.validation = validate(&self.values);
        tracing::trace!(errors = self.validation.error_count(), "form revalidated");
    }

    /// Append a character to the active text field
    pub fn push_char(&mut self, c: char) {
        let Some(field) = self.active_field_name().filter(|f| !f.is_select()) else {
            return;
        };
        let mut value = self.values.get(field).to_string();
        value.push(c);
        // text fields never reject a value
        let _ = self.set_field(field, value);
    }

    /// Remove the last character of the active text field
    pub fn pop_char(&mut self) {
        let Some(field) = self.active_field_name().filter(|f| !f.is_select()) else {
            return;
        };
        let mut value = self.values.get(field).to_string();
        if value.pop().is_some() {
            let _ = self.set_field(field, value);
        }
    }

    pub fn next_country(&mut self) {
        self.set_country(Country::cycle_next(self.values.country));
    }

    pub fn prev_country(&mut self) {
        self.set_country(Country::cycle_prev(self.values.country));
    }

    /// Toggle masking of the active password field
    pub fn toggle_reveal(&mut self) {
        if let Some(field) = self.active_field_name() {
            self.fields[field.index()].toggle_reveal();
        }
    }

    /// Start a submission, returning the values to hand to the backend
    pub fn begin_submit(&mut self) -> Result<FormValues, FormError> {
        self.submit_attempted = true;
        if self.submission.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        if !self.is_valid() {
            return Err(FormError::Invalid(self.validation.error_count()));
        }
        self.submission = SubmissionState::Submitting;
        self.success_until = None;
        Ok(self.values.clone())
    }

    /// Finish an in-flight submission: clear the form and open the success window.
    ///
    /// Returns false if no submission was in flight.
    pub fn complete_submit(&mut self, now: Instant) -> bool {
        if !self.submission.is_submitting() {
            return false;
        }
        self.values = FormValues::default();
        for field in &mut self.fields {
            field.touched = false;
        }
        self.submit_attempted = false;
        self.revalidate();
        self.submission = SubmissionState::Succeeded;
        self.success_until = Some(now + self.success_window);
        true
    }

    /// Abandon an in-flight submission, keeping the entered values
    pub fn fail_submit(&mut self) -> bool {
        if !self.submission.is_submitting() {
            return false;
        }
        self.submission = SubmissionState::Idle;
        true
    }

    /// Close the success window once it has elapsed
    pub fn tick(&mut self, now: Instant) {
        if self.submission == SubmissionState::Succeeded
            && self.success_until.is_some_and(|until| now >= until)
        {
            self.submission = SubmissionState::Idle;
            self.success_until = None;
        }
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        5 // four fields plus the submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
}
