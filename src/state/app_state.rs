//! Application state definitions

use super::forms::SignupForm;
use std::collections::VecDeque;
use std::time::Duration;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Skeleton placeholder while the page "loads"
    #[default]
    Loading,
    /// The sign-up form
    Form,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Form
    pub form: SignupForm,

    // Modal error messages, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(success_window: Duration) -> Self {
        Self {
            current_view: View::Loading,
            form: SignupForm::new(success_window),
            errors: VecDeque::new(),
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
