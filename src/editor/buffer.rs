use ropey::Rope;

/// Cursor position in the line buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based line index.
    pub row: usize,
    /// Zero-based column, counted in characters. May equal the line length.
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at a specific position.
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

/// An ordered sequence of lines with a single cursor and a scroll offset.
///
/// The buffer always holds at least one line. Lines are stored in a rope
/// joined by `\n`, with no newline after the last line, so rope lines and
/// document lines are the same thing.
///
/// The buffer knows nothing about the screen: callers negotiate a viewport
/// height each frame and hand it to [`LineBuffer::reclamp_scroll`].
#[derive(Clone)]
pub struct LineBuffer {
    rope: Rope,
    cursor: Cursor,
    scroll: usize,
    modified: bool,
}

impl LineBuffer {
    /// Create a buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: Cursor::default(),
            scroll: 0,
            modified: false,
        }
    }

    /// Create a buffer from file contents.
    ///
    /// Each newline-terminated record becomes one line. `\r\n` and lone `\r`
    /// count as newlines, and a single trailing newline does not produce an
    /// extra empty line.
    pub fn from_text(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let body = normalized.strip_suffix('\n').unwrap_or(&normalized);
        Self {
            rope: Rope::from_str(body),
            ..Self::new()
        }
    }

    /// Create a buffer from already split lines. An empty slice yields one
    /// empty line.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let joined = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            rope: Rope::from_str(&joined),
            ..Self::new()
        }
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Index of the first line shown in the viewport.
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    /// Whether the text changed since the buffer was created or last saved.
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clear the modified flag after a successful save.
    pub const fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Total number of lines. Never zero.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, row: usize) -> Option<String> {
        if row >= self.line_count() {
            return None;
        }
        let line = self.rope.line(row);
        Some(line.chars().take(self.line_len(row)).collect())
    }

    /// Length of a line in characters (without trailing newline).
    pub fn line_len(&self, row: usize) -> usize {
        if row >= self.line_count() {
            return 0;
        }
        let line = self.rope.line(row);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// All lines in order.
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|row| self.line_at(row))
            .collect()
    }

    /// Lines visible in a viewport of `height` rows starting at the scroll
    /// offset, clipped to the end of the document.
    pub fn visible_lines(&self, height: usize) -> Vec<String> {
        let start = self.scroll.min(self.line_count());
        let end = start.saturating_add(height).min(self.line_count());
        (start..end).filter_map(|row| self.line_at(row)).collect()
    }

    /// The full text, lines joined by `\n` with no trailing newline.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Insert a character at the cursor position.
    ///
    /// Newlines go through [`LineBuffer::insert_newline`]; passing one here
    /// splits the line the same way.
    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.insert_newline();
            return;
        }
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, ch);
        self.cursor.col += 1;
        self.modified = true;
    }

    /// Split the current line at the cursor (Enter key).
    pub fn insert_newline(&mut self) {
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, '\n');
        self.cursor.row += 1;
        self.cursor.col = 0;
        self.modified = true;
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// At the start of a line the line is joined onto the previous one.
    /// Returns `true` if anything was deleted.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor.col == 0 && self.cursor.row == 0 {
            return false;
        }

        let char_idx = self.cursor_char_idx();
        if self.cursor.col == 0 {
            // Join with previous line by removing its newline
            let prev_len = self.line_len(self.cursor.row - 1);
            self.rope.remove(char_idx - 1..char_idx);
            self.cursor.row -= 1;
            self.cursor.col = prev_len;
        } else {
            self.rope.remove(char_idx - 1..char_idx);
            self.cursor.col -= 1;
        }
        self.modified = true;
        true
    }

    /// The Delete key. Accepted but intentionally does nothing.
    #[allow(clippy::unused_self, clippy::needless_pass_by_ref_mut)]
    pub const fn delete_forward(&mut self) -> bool {
        false
    }

    /// Move the cursor in the given direction.
    ///
    /// Motion past a buffer edge leaves the cursor where it is.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
            Direction::Home => self.cursor.col = 0,
            Direction::End => self.cursor.col = self.line_len(self.cursor.row),
        }
    }

    /// Move cursor to a specific line and column, clamped to the document.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.cursor = Cursor::at(row, col);
        self.clamp_cursor();
    }

    /// Pull the cursor back inside the document.
    pub fn clamp_cursor(&mut self) {
        let max_row = self.line_count().saturating_sub(1);
        self.cursor.row = self.cursor.row.min(max_row);
        self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.row));
    }

    /// Adjust the scroll offset so the cursor row lies in
    /// `[scroll, scroll + viewport_height)`.
    ///
    /// A zero-height viewport pins the scroll to the cursor row.
    pub const fn reclamp_scroll(&mut self, viewport_height: usize) {
        let row = self.cursor.row;
        if viewport_height == 0 {
            self.scroll = row;
            return;
        }

        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + viewport_height {
            self.scroll = row + 1 - viewport_height;
        }
    }

    // --- Private helpers ---

    /// Convert cursor position to a ropey char index.
    fn cursor_char_idx(&self) -> usize {
        let line_start = self.rope.line_to_char(self.cursor.row);
        line_start + self.cursor.col.min(self.line_len(self.cursor.row))
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = self.line_len(self.cursor.row);
        }
    }

    fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.row) {
            self.cursor.col += 1;
        } else if self.cursor.row + 1 < self.line_count() {
            self.cursor.row += 1;
            self.cursor.col = 0;
        }
    }

    fn move_up(&mut self) {
        if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.row));
        }
    }

    fn move_down(&mut self) {
        if self.cursor.row + 1 < self.line_count() {
            self.cursor.row += 1;
            self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.row));
        }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("cursor", &self.cursor)
            .field("scroll", &self.scroll)
            .field("modified", &self.modified)
            .finish()
    }
}
