//! The cat that frames the editor.
//!
//! Head and paws sit above the editor region, belly and legs below it.
//! Every row is cut to the area it is drawn into.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HEAD: [&str; 2] = ["  ∧＿∧  ", " ( ･ω･) "];
const PAWS: &str = "∪――――∪―";
const PAW_FILL: char = '―';
const BELLY: &str = "________";
const BELLY_FILL: char = '_';
const LEGS: [&str; 3] = [" |    | ", " |    | ", "  U  U  "];

/// `core` centered in a row of `width` cells, the rest filled with `fill`.
///
/// A row narrower than `core` gets `core` cut down to fit.
pub fn spanning_row(core: &str, fill: char, width: u16) -> String {
    let width = usize::from(width);
    let core_width = core.width();
    if width <= core_width {
        return super::fit_width(core, width);
    }
    let left = (width - core_width) / 2;
    let right = width - core_width - left;
    let mut row = String::with_capacity(width + core.len());
    row.extend(std::iter::repeat_n(fill, left));
    row.push_str(core);
    row.extend(std::iter::repeat_n(fill, right));
    row
}

fn centered(text: &'static str) -> Line<'static> {
    Line::from(text).alignment(Alignment::Center)
}

/// Rows of the top chrome: the head, then the paw line across the width.
pub fn top_rows(width: u16) -> Vec<Line<'static>> {
    let mut rows: Vec<Line> = HEAD.into_iter().map(centered).collect();
    rows.push(Line::from(spanning_row(PAWS, PAW_FILL, width)));
    rows
}

/// Rows of the bottom chrome: the belly across the width, then the legs.
pub fn bottom_rows(width: u16) -> Vec<Line<'static>> {
    let mut rows = vec![Line::from(spanning_row(BELLY, BELLY_FILL, width))];
    rows.extend(LEGS.into_iter().map(centered));
    rows
}

/// Draw the head so the paw line lands on the area's last row.
pub fn render_top(frame: &mut Frame, area: Rect) {
    let area = area.intersection(frame.area());
    if area.is_empty() {
        return;
    }
    let rows = top_rows(area.width);
    let skip = rows.len().saturating_sub(usize::from(area.height));
    let visible: Vec<Line> = rows.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(visible), area);
}

/// Draw the belly and as many legs as fit.
pub fn render_bottom(frame: &mut Frame, area: Rect) {
    let area = area.intersection(frame.area());
    if area.is_empty() {
        return;
    }
    let visible: Vec<Line> = bottom_rows(area.width)
        .into_iter()
        .take(usize::from(area.height))
        .collect();
    frame.render_widget(Paragraph::new(visible), area);
}
