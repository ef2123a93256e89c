//! Form rendering module
//!
//! - `field_renderer`: text, password and select field rendering
//! - `signup_form`: the sign-up form screen

mod field_renderer;
mod signup_form;

pub use signup_form::draw_signup;
