//! Transient notification shown above the status bar

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Where a toast of `message` goes inside `area` (bottom-left, one row up)
pub fn toast_area(area: Rect, message: &str) -> Rect {
    let width = (message.chars().count() as u16 + 4).min(area.width);
    Rect {
        x: area.x + 1u16.min(area.width.saturating_sub(width)),
        y: area.y + area.height.saturating_sub(2),
        width,
        height: 1u16.min(area.height),
    }
}

/// Render a success toast
pub fn render_success_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);
    frame.render_widget(Clear, toast_area);
    let toast = Paragraph::new(format!(" ✔ {message} ")).style(
        Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(toast, toast_area);
}
