use std::path::PathBuf;

use ratatui::layout::Rect;

use crate::editor::{Loaded, LineBuffer, persist};
use crate::ui::layout::{Chrome, LayoutOutcome};

/// Frames a status message stays visible by default.
pub const DEFAULT_STATUS_TTL: u16 = 5;
/// Frames the exit confirmation prompt stays visible.
pub const PROMPT_TTL: u16 = 100;

/// A short message shown on the message row for a number of frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    frames_left: u16,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>, ttl: u16) {
        self.text = text.into();
        self.frames_left = ttl;
    }

    /// The message, if it still has frames left.
    pub fn visible(&self) -> Option<&str> {
        (self.frames_left > 0).then_some(self.text.as_str())
    }

    pub const fn frames_left(&self) -> u16 {
        self.frames_left
    }

    /// Consume one frame. Returns the text to draw for this frame.
    pub fn tick(&mut self) -> Option<String> {
        let shown = self.visible().map(ToOwned::to_owned);
        self.frames_left = self.frames_left.saturating_sub(1);
        shown
    }
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// The document being edited
    pub buffer: LineBuffer,
    /// Destination for saves; `None` for an unnamed buffer
    pub file_path: Option<PathBuf>,
    /// Transient message line
    pub status: StatusMessage,
    /// Frames a regular status message lives
    pub status_ttl: u16,
    /// Set while the "save modified buffer?" prompt waits for an answer
    pub exit_prompt: bool,
    /// Chrome sizes used for layout negotiation
    pub chrome: Chrome,
    /// Last known terminal size (width, height)
    pub terminal_size: (u16, u16),
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(LineBuffer::new(), None, (80, 24))
    }
}

impl Model {
    /// Create a model around an existing buffer.
    pub fn new(buffer: LineBuffer, file_path: Option<PathBuf>, terminal_size: (u16, u16)) -> Self {
        Self {
            buffer,
            file_path,
            status: StatusMessage::default(),
            status_ttl: DEFAULT_STATUS_TTL,
            exit_prompt: false,
            chrome: Chrome::default(),
            terminal_size,
            should_quit: false,
        }
    }

    /// Create a model by loading `file_path`.
    pub fn open(file_path: Option<PathBuf>, terminal_size: (u16, u16)) -> Self {
        let mut model = Self::new(LineBuffer::new(), None, terminal_size);
        model.load(file_path);
        model
    }

    /// Replace the buffer with the contents of `file_path`.
    ///
    /// A missing file starts a new buffer under that name. Any other read
    /// failure is reported on the message line and the session continues
    /// with an unnamed empty buffer, so a later save cannot clobber a file
    /// that was never loaded.
    pub fn load(&mut self, file_path: Option<PathBuf>) {
        let Some(path) = file_path else {
            self.buffer = LineBuffer::new();
            self.file_path = None;
            self.show_status("New buffer");
            return;
        };

        match persist::load(&path) {
            Ok(loaded) => {
                let message = match &loaded {
                    Loaded::Existing(_) => format!("Read file: {}", path.display()),
                    Loaded::NewFile(_) => format!("New file: {}", path.display()),
                };
                self.buffer = loaded.into_buffer();
                self.file_path = Some(path);
                self.show_status(message);
            }
            Err(err) => {
                tracing::warn!(error = %err, "load failed");
                self.buffer = LineBuffer::new();
                self.file_path = None;
                self.show_status(format!("Error reading: {err}"));
            }
        }
    }

    #[must_use]
    pub const fn with_chrome(mut self, chrome: Chrome) -> Self {
        self.chrome = chrome;
        self
    }

    #[must_use]
    pub const fn with_status_ttl(mut self, ttl: u16) -> Self {
        self.status_ttl = ttl;
        self
    }

    pub const fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    /// Show a message for the configured number of frames.
    pub fn show_status(&mut self, message: impl Into<String>) {
        let ttl = self.status_ttl;
        self.status.set(message, ttl);
    }

    /// Name shown in the status bar.
    pub fn file_label(&self) -> String {
        self.file_path
            .as_ref()
            .map_or_else(|| "Untitled".to_string(), |p| p.display().to_string())
    }

    pub const fn set_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Negotiate the layout for the current terminal size and document.
    pub fn layout(&self) -> LayoutOutcome {
        let (width, height) = self.terminal_size;
        self.chrome
            .negotiate(Rect::new(0, 0, width, height), self.buffer.line_count())
    }

    /// Restore the cursor and scroll invariants for the current layout.
    ///
    /// On a terminal below the size floor the scroll is left alone; the
    /// next frame with room for the editor reclamps it.
    pub fn sync_scroll(&mut self) {
        self.buffer.clamp_cursor();
        if let LayoutOutcome::Ready(geometry) = self.layout() {
            self.buffer.reclamp_scroll(usize::from(geometry.text_rows()));
        }
    }

    /// Write the buffer to its file.
    ///
    /// Returns `false` without touching the disk when the buffer has no
    /// file name, and on write failure. Both cases leave a message.
    pub fn save(&mut self) -> bool {
        let Some(path) = self.file_path.clone() else {
            self.show_status("No file name; start nyan with a path to save");
            return false;
        };
        match persist::save(&mut self.buffer, &path) {
            Ok(()) => {
                self.show_status(format!("Saved: {}", path.display()));
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "save failed");
                self.show_status(format!("Error saving: {err}"));
                false
            }
        }
    }
}
