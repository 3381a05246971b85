//! Layout negotiation between the cat chrome and the editor region.
//!
//! [`Chrome::negotiate`] splits the terminal into:
//! - the top chrome (head and paws)
//! - the editor region: text rows, then a status row and a message row
//! - the bottom chrome (body and feet)
//! - the help line on the terminal's last row
//!
//! The result depends only on the terminal size and the document length,
//! so it is recomputed every frame instead of being cached.

use ratatui::layout::Rect;

/// Rows at the bottom of the editor region used by the status and message
/// lines.
pub const STATUS_ROWS: u16 = 2;

/// Fixed sizes and limits the negotiation works with.
///
/// # Example
///
/// ```
/// use nyan::ui::layout::Chrome;
///
/// let chrome = Chrome::default();
/// assert_eq!(chrome.editor_height(20, 2), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    /// Rows above the editor (head + paw line).
    pub top: u16,
    /// Rows below the editor (body + legs + feet).
    pub bottom: u16,
    /// Rows reserved for the help line.
    pub help: u16,
    /// Extra rows requested beyond the document length.
    pub padding: u16,
    /// The editor region never asks for fewer rows than this.
    pub min_editor: u16,
    /// Below this width nothing but a notice is drawn.
    pub min_width: u16,
    /// Below this height nothing but a notice is drawn.
    pub min_height: u16,
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            top: 3,
            bottom: 4,
            help: 1,
            padding: 5,
            min_editor: 5,
            min_width: 50,
            min_height: 10,
        }
    }
}

/// Outcome of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutOutcome {
    /// The terminal is below the size floor; skip this frame.
    TooSmall,
    /// Rows were allocated.
    Ready(Geometry),
}

/// Row allocation for one frame. Every area lies inside the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    area: Rect,
    top_chrome_height: u16,
    editor_start: u16,
    editor_end: u16,
    bottom_chrome_height: u16,
}

impl Chrome {
    /// Rows granted to the editor region before clamping to the terminal.
    ///
    /// `max(min(line_count + padding, height - top - bottom - help), min_editor)`
    pub fn editor_height(&self, terminal_height: u16, line_count: usize) -> u16 {
        let max_available = terminal_height
            .saturating_sub(self.top)
            .saturating_sub(self.bottom)
            .saturating_sub(self.help);
        let desired = u16::try_from(line_count)
            .unwrap_or(u16::MAX)
            .saturating_add(self.padding);
        desired.min(max_available).max(self.min_editor)
    }

    /// Whether `area` is below the size floor.
    pub const fn is_too_small(&self, area: Rect) -> bool {
        area.width < self.min_width || area.height < self.min_height
    }

    /// Allocate rows for a terminal of `area` showing `line_count` lines.
    pub fn negotiate(&self, area: Rect, line_count: usize) -> LayoutOutcome {
        if self.is_too_small(area) {
            return LayoutOutcome::TooSmall;
        }

        let requested = self.editor_height(area.height, line_count);
        let limit = area.height.saturating_sub(self.bottom);
        let editor_start = self.top.min(limit);
        // The minimum height can overshoot on short terminals; the bottom
        // chrome boundary wins.
        let editor_end = editor_start.saturating_add(requested).min(limit);
        if editor_end - editor_start < requested {
            tracing::debug!(
                requested,
                granted = editor_end - editor_start,
                height = area.height,
                "editor region clamped"
            );
        }

        LayoutOutcome::Ready(Geometry {
            area,
            top_chrome_height: editor_start,
            editor_start,
            editor_end,
            bottom_chrome_height: self.bottom.min(area.height - editor_end),
        })
    }
}

impl Geometry {
    /// First row of the editor region (relative to the terminal area).
    pub const fn editor_start(&self) -> u16 {
        self.editor_start
    }

    /// One past the last row of the editor region.
    pub const fn editor_end(&self) -> u16 {
        self.editor_end
    }

    /// `editor_end - editor_start`.
    pub const fn editor_height(&self) -> u16 {
        self.editor_end - self.editor_start
    }

    pub const fn top_chrome_height(&self) -> u16 {
        self.top_chrome_height
    }

    pub const fn bottom_chrome_height(&self) -> u16 {
        self.bottom_chrome_height
    }

    /// Rows that show document lines. This is the viewport height handed
    /// to the buffer's scroll reclamp.
    pub const fn text_rows(&self) -> u16 {
        self.editor_height().saturating_sub(STATUS_ROWS)
    }

    pub const fn top_chrome_area(&self) -> Rect {
        self.row_span(0, self.top_chrome_height)
    }

    pub const fn text_area(&self) -> Rect {
        self.row_span(self.editor_start, self.text_rows())
    }

    /// The status row, when the editor region has room for one.
    pub const fn status_area(&self) -> Option<Rect> {
        if self.editor_height() < STATUS_ROWS {
            return None;
        }
        Some(self.row_span(self.editor_end - STATUS_ROWS, 1))
    }

    /// The transient message row.
    pub const fn message_area(&self) -> Option<Rect> {
        if self.editor_height() == 0 {
            return None;
        }
        Some(self.row_span(self.editor_end - 1, 1))
    }

    pub const fn bottom_chrome_area(&self) -> Rect {
        self.row_span(self.editor_end, self.bottom_chrome_height)
    }

    /// The help line, always the terminal's last row.
    pub const fn help_area(&self) -> Rect {
        self.row_span(self.area.height.saturating_sub(1), 1)
    }

    const fn row_span(&self, row: u16, height: u16) -> Rect {
        Rect {
            x: self.area.x,
            y: self.area.y + row,
            width: self.area.width,
            height,
        }
    }
}
