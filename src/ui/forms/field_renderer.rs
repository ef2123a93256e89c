//! Field rendering utilities for forms

use crate::platform::REVEAL_SHORTCUT;
use crate::state::{FieldName, SignupForm};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the error line
pub const FIELD_HEIGHT: u16 = 4;

/// Block title with a red asterisk for required fields
fn field_title(name: FieldName) -> Line<'static> {
    let mut spans = vec![Span::raw(format!(" {}", name.label()))];
    if name.is_required() {
        spans.push(Span::styled("*", Style::default().fg(Color::Red)));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

/// Text shown inside the input box
fn field_content(form: &SignupForm, name: FieldName, is_active: bool) -> Line<'static> {
    let raw = form.values().get(name);
    let cursor = if is_active { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    if name.is_select() {
        let arrow_style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let (text, style) = if raw.is_empty() {
            (name.placeholder(), Style::default().fg(Color::DarkGray))
        } else {
            (raw, Style::default())
        };
        return Line::from(vec![
            Span::styled("◀ ", arrow_style),
            Span::styled(text.to_string(), style),
            Span::styled(" ▶", arrow_style),
        ]);
    }

    if raw.is_empty() {
        return Line::from(vec![
            cursor_span,
            Span::styled(
                name.placeholder(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]);
    }

    Line::from(vec![
        Span::raw(form.field(name).display_value(raw)),
        cursor_span,
    ])
}

/// Draw one form field with its inline error beneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    form: &SignupForm,
    name: FieldName,
    is_active: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Error text
        ])
        .split(area);

    let error = form.visible_error(name);
    let border_style = match (error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let mut block = Block::default()
        .title(field_title(name))
        .borders(Borders::ALL)
        .border_style(border_style);

    if name.is_secret() {
        let action = if form.field(name).revealed { "hide" } else { "show" };
        block = block.title(
            Line::from(Span::styled(
                format!(" {REVEAL_SHORTCUT}:{action} "),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(
        Paragraph::new(field_content(form, name, is_active)).block(block),
        chunks[0],
    );

    if let Some(error) = error {
        let message = Paragraph::new(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(message, chunks[1]);
    }
}

/// Draw a line of muted help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn form() -> SignupForm {
        SignupForm::new(Duration::from_millis(1200))
    }

    #[test]
    fn test_required_fields_get_asterisk() {
        assert_eq!(line_text(&field_title(FieldName::Name)), " Name* ");
        assert_eq!(line_text(&field_title(FieldName::Country)), " Country ");
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let form = form();
        let text = line_text(&field_content(&form, FieldName::Name, false));
        assert_eq!(text, "Enter your Name");
    }

    #[test]
    fn test_password_is_masked() {
        let mut form = form();
        form.set_field(FieldName::Password, "abc").unwrap();
        let text = line_text(&field_content(&form, FieldName::Password, false));
        assert_eq!(text, "•••");
    }

    #[test]
    fn test_active_field_has_cursor() {
        let mut form = form();
        form.set_field(FieldName::Name, "Bob").unwrap();
        let text = line_text(&field_content(&form, FieldName::Name, true));
        assert_eq!(text, "Bob▌");
    }

    #[test]
    fn test_select_shows_unselected_option() {
        let form = form();
        let text = line_text(&field_content(&form, FieldName::Country, false));
        assert_eq!(text, "◀ Select ▶");
    }

    #[test]
    fn test_select_shows_country() {
        let mut form = form();
        form.set_field(FieldName::Country, "Brazil").unwrap();
        let text = line_text(&field_content(&form, FieldName::Country, true));
        assert_eq!(text, "◀ Brazil ▶");
    }
}
