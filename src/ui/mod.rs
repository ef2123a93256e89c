//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod skeleton;

use crate::app::App;
use crate::state::{SubmissionState, View};
use ratatui::Frame;

/// Message shown while the success window is open
pub const SUCCESS_MESSAGE: &str = "Successfully Submitted";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    // Draw main content based on current view
    match app.state.current_view {
        View::Loading => {
            if let Some(ref loading) = app.loading_state {
                skeleton::draw(frame, main_area, loading);
            }
        }
        View::Form => forms::draw_signup(frame, main_area, app),
    }

    if app.state.form.submission() == SubmissionState::Succeeded {
        components::render_success_toast(frame, main_area, SUCCESS_MESSAGE);
    }

    // Draw status bar
    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlays everything
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SimulatedBackend;
    use crate::state::{FieldName, Form};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;

    fn app(loading: Duration) -> App {
        App::with_backend(
            Arc::new(SimulatedBackend::new(Duration::from_millis(2000))),
            loading,
            Duration::from_millis(1200),
        )
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_loading_view_renders_skeleton() {
        let app = app(Duration::from_millis(2000));
        let screen = render(&app);
        assert!(screen.contains('█'));
        assert!(!screen.contains("Sign Up"));
    }

    #[test]
    fn test_form_view_renders_fields() {
        let mut app = app(Duration::ZERO);
        app.tick();
        let screen = render(&app);
        assert!(screen.contains("Sign Up"));
        assert!(screen.contains("Confirm Password"));
        assert!(screen.contains("Enter your Name"));
        assert!(screen.contains("Submit"));
    }

    #[test]
    fn test_touched_field_shows_error() {
        let mut app = app(Duration::ZERO);
        app.tick();
        app.state.form.set_field(FieldName::Name, "Al").unwrap();
        let screen = render(&app);
        assert!(screen.contains("Name must be at least 3 characters"));
        assert!(!screen.contains("Password is required"));
    }

    #[test]
    fn test_success_toast_while_succeeded() {
        let mut app = app(Duration::ZERO);
        app.tick();
        let form = &mut app.state.form;
        form.set_field(FieldName::Name, "Alice").unwrap();
        form.set_field(FieldName::Password, "pw").unwrap();
        form.set_field(FieldName::ConfirmPassword, "pw").unwrap();
        form.set_active_field(FieldName::Name.index());
        form.begin_submit().unwrap();
        form.complete_submit(std::time::Instant::now());
        let screen = render(&app);
        assert!(screen.contains(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_error_dialog_overlays_form() {
        let mut app = app(Duration::ZERO);
        app.tick();
        app.push_error("Submission failed: boom");
        let screen = render(&app);
        assert!(screen.contains("Submission failed: boom"));
        assert!(screen.contains("to dismiss"));
    }
}
