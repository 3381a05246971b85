//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Row negotiation between the chrome and the editor
//! - [`chrome`]: The cat drawn around the editor
//! - status, message and help lines

pub mod chrome;
pub mod layout;

mod render;
mod status;

pub use render::render;
pub use status::{HELP_TEXT, TOO_SMALL_TEXT, status_text};

use unicode_width::UnicodeWidthChar;

/// Terminal cells a character occupies once drawn. Control characters are
/// shown as a blank cell.
pub fn cell_width(c: char) -> usize {
    if c.is_control() {
        1
    } else {
        c.width().unwrap_or(0)
    }
}

/// Cut `text` to at most `width` cells and pad it with spaces to exactly
/// `width`, so a row never spills past the edge and always clears what was
/// there before.
pub fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = cell_width(ch);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}
