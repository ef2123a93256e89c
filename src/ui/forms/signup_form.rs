//! Sign-up form rendering

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FieldName, SubmissionState};
use crate::ui::components::{render_primary_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Minimum inner width for laying the fields out in two columns
const TWO_COLUMN_MIN_WIDTH: u16 = 60;

/// Widest the form card grows
const MAX_FORM_WIDTH: u16 = 100;

/// Screen regions of the form content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub fields: [Rect; 4],
    pub button: Rect,
    pub help: Rect,
}

/// Number of field columns that fit in `width`
pub fn column_count(width: u16) -> usize {
    if width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Lay out the four fields in a grid, then the submit button and a help line
pub fn form_layout(inner: Rect) -> FormLayout {
    let columns = column_count(inner.width);
    let rows = FieldName::ALL.len().div_ceil(columns);

    let mut constraints: Vec<Constraint> = (0..rows)
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0)); // Remaining space

    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut fields = [Rect::default(); 4];
    for (row, row_area) in row_chunks.iter().take(rows).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .spacing(2)
            .split(*row_area);
        for (col, cell) in cells.iter().enumerate() {
            if let Some(slot) = fields.get_mut(row * columns + col) {
                *slot = *cell;
            }
        }
    }

    FormLayout {
        fields,
        button: row_chunks[rows],
        help: row_chunks[rows + 1],
    }
}

/// Center the form card horizontally and cap its width
fn card_area(area: Rect) -> Rect {
    let width = area.width.min(MAX_FORM_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Draw the sign-up form
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let area = card_area(area);

    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area).inner(ratatui::layout::Margin::new(1, 1));
    frame.render_widget(block, area);

    let layout = form_layout(inner);

    for name in FieldName::ALL {
        let is_active = form.active_field_name() == Some(name);
        draw_field(frame, layout.fields[name.index()], form, name, is_active);
    }

    let loading_tick = form
        .submission()
        .is_submitting()
        .then_some(app.frame_count);
    render_primary_button(
        frame,
        layout.button,
        "Submit",
        form.is_submit_active(),
        form.can_submit(),
        loading_tick,
    );

    let help = match form.submission() {
        SubmissionState::Submitting => "Submitting...".to_string(),
        _ if !form.is_valid() => "Fill in the required fields to enable Submit".to_string(),
        _ => format!("Press Enter on Submit or {SUBMIT_SHORTCUT}"),
    };
    draw_help_text(frame, layout.help, &help);
}
