//! Form domain layer
//!
//! Values, validation rules and the submit lifecycle of the sign-up form.

mod field;
mod form_state;
mod validation;

#[cfg(test)]
pub use field::Country;
pub use field::FieldName;
pub use form_state::{Form, FormValues, SignupForm};
