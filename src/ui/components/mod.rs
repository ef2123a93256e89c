//! Reusable UI components

mod button;
mod dialog;
mod toast;

pub use button::{render_primary_button, BUTTON_HEIGHT};
pub use dialog::render_error_dialog;
pub use toast::render_success_toast;
