use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

use super::layout::LayoutOutcome;
use super::{cell_width, chrome, fit_width, status};

/// Render the complete UI.
///
/// The layout is negotiated first and the buffer's scroll reclamped to the
/// negotiated text height, so nothing below ever draws outside the frame.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    // The message lifetime counts render calls, including skipped ones.
    let message = model.status.tick();

    let geometry = match model.chrome.negotiate(area, model.buffer.line_count()) {
        LayoutOutcome::Ready(geometry) => geometry,
        LayoutOutcome::TooSmall => {
            tracing::debug!(
                width = area.width,
                height = area.height,
                "terminal below size floor, skipping frame"
            );
            status::render_too_small(frame, area);
            return;
        }
    };
    model.buffer.reclamp_scroll(usize::from(geometry.text_rows()));

    chrome::render_top(frame, geometry.top_chrome_area());
    render_text(model, frame, geometry.text_area());
    if let Some(status_area) = geometry.status_area() {
        status::render_status_bar(model, frame, status_area);
    }
    if let Some(message_area) = geometry.message_area() {
        status::render_message_bar(message.as_deref(), frame, message_area);
    }
    chrome::render_bottom(frame, geometry.bottom_chrome_area());
    status::render_help_bar(frame, geometry.help_area());
    place_cursor(model, frame, geometry.text_area());
}

/// Control characters (tabs, mostly) show as a single blank cell.
fn display_text(line: &str) -> String {
    line.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn render_text(model: &Model, frame: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }
    let width = usize::from(area.width);
    let content: Vec<Line> = model
        .buffer
        .visible_lines(usize::from(area.height))
        .iter()
        .map(|line| Line::from(fit_width(&display_text(line), width)))
        .collect();
    frame.render_widget(Paragraph::new(content), area);
}

/// Put the terminal cursor on the cursor cell when it is on screen.
/// Columns past the right edge pin the cursor to the last cell.
fn place_cursor(model: &Model, frame: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }
    let cursor = model.buffer.cursor();
    let Some(rel_row) = cursor.row.checked_sub(model.buffer.scroll()) else {
        return;
    };
    let Ok(rel_row) = u16::try_from(rel_row) else {
        return;
    };
    if rel_row >= area.height {
        return;
    }

    let line = model.buffer.line_at(cursor.row).unwrap_or_default();
    let x: usize = line.chars().take(cursor.col).map(cell_width).sum();
    let x = u16::try_from(x)
        .unwrap_or(u16::MAX)
        .min(area.width.saturating_sub(1));
    frame.set_cursor_position(Position::new(area.x + x, area.y + rel_row));
}
