//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and the bottom status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", view_hints(&app.state.current_view)),
        Style::default().fg(Color::White),
    )];

    if matches!(app.state.current_view, View::Form) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            app.state.form.submission().label(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Status message
    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: area.height,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn view_hints(view: &View) -> String {
    match view {
        View::Loading => "Loading...  Press any key to skip".to_string(),
        View::Form => format!(
            "Tab:next  ←/→:country  {}:show password  {}:submit",
            REVEAL_SHORTCUT, SUBMIT_SHORTCUT
        ),
    }
}
