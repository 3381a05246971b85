use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

use super::fit_width;

pub const HELP_TEXT: &str = " ^X: Exit | ^S: Save | ^Q: Quit | arrows: Move";
pub const TOO_SMALL_TEXT: &str = "Terminal too small. Please resize.";

fn bar_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// ` name * | Line r/N | Col c ` with 1-based positions.
pub fn status_text(model: &Model) -> String {
    let cursor = model.buffer.cursor();
    let modified = if model.is_modified() { "* " } else { "  " };
    format!(
        " {} {modified}| Line {}/{} | Col {} ",
        model.file_label(),
        cursor.row + 1,
        model.buffer.line_count(),
        cursor.col + 1
    )
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let text = fit_width(&status_text(model), usize::from(area.width));
    frame.render_widget(Paragraph::new(text).style(bar_style()), area);
}

pub fn render_message_bar(message: Option<&str>, frame: &mut Frame, area: Rect) {
    let text = fit_width(message.unwrap_or_default(), usize::from(area.width));
    frame.render_widget(Paragraph::new(text), area);
}

pub fn render_help_bar(frame: &mut Frame, area: Rect) {
    let text = fit_width(HELP_TEXT, usize::from(area.width));
    frame.render_widget(Paragraph::new(text).style(bar_style()), area);
}

pub fn render_too_small(frame: &mut Frame, area: Rect) {
    let row = Rect {
        height: area.height.min(1),
        ..area
    };
    let text = fit_width(TOO_SMALL_TEXT, usize::from(row.width));
    frame.render_widget(Paragraph::new(text), row);
}
