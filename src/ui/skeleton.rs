//! Loading placeholder: skeleton bars with a shimmer wave

use crate::state::LoadingState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fraction of a bar covered by the shimmer highlight
const WAVE_WIDTH: f32 = 0.25;

/// Build one skeleton bar of `width` cells with the highlight at `wave_position`
pub fn skeleton_line(width: u16, wave_position: f32) -> Line<'static> {
    let width = width as usize;
    if width == 0 {
        return Line::default();
    }

    let band = ((width as f32 * WAVE_WIDTH).round() as usize).max(1);
    // Let the band travel fully off both edges
    let travel = width + band;
    let start = (wave_position.clamp(0.0, 1.0) * travel as f32) as usize;
    let band_start = start.saturating_sub(band).min(width);
    let band_end = start.min(width);

    let base = Style::default().fg(Color::DarkGray);
    let shine = Style::default().fg(Color::Gray);
    Line::from(vec![
        Span::styled("█".repeat(band_start), base),
        Span::styled("█".repeat(band_end - band_start), shine),
        Span::styled("█".repeat(width - band_end), base),
    ])
}

fn draw_bar(frame: &mut Frame, area: Rect, height: u16, wave_position: f32) {
    let lines: Vec<Line> = (0..height.min(area.height))
        .map(|_| skeleton_line(area.width, wave_position))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the loading placeholder
pub fn draw(frame: &mut Frame, area: Rect, loading: &LoadingState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area).inner(Margin::new(1, 1));
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // First field row
            Constraint::Length(3), // Second field row
            Constraint::Length(1), // Gap
            Constraint::Length(3), // Button
            Constraint::Min(0),
        ])
        .split(inner);

    let wave = loading.wave_position;
    for row in &rows[..2] {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .spacing(2)
            .split(*row);
        for cell in cells.iter() {
            // A text-height bar centred in each field slot
            let bar = Rect {
                y: cell.y + cell.height / 2,
                height: 1u16.min(cell.height),
                ..*cell
            };
            draw_bar(frame, bar, 1, wave);
        }
    }
    draw_bar(frame, rows[3], 3, wave);
}
