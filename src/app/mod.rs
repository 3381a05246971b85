//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{DEFAULT_STATUS_TTL, Model, PROMPT_TTL, StatusMessage};
pub use update::{ExitAnswer, Message, update};

use std::path::PathBuf;

use crate::ui::layout::Chrome;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    chrome: Chrome,
    status_ttl: u16,
}

impl App {
    /// Create a new application for the given file, or an unnamed buffer.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            chrome: Chrome::default(),
            status_ttl: DEFAULT_STATUS_TTL,
        }
    }

    /// Override the layout constants.
    #[must_use]
    pub const fn with_chrome(mut self, chrome: Chrome) -> Self {
        self.chrome = chrome;
        self
    }

    /// Set how many frames a status message stays visible.
    #[must_use]
    pub const fn with_status_ttl(mut self, ttl: u16) -> Self {
        self.status_ttl = ttl;
        self
    }
}
