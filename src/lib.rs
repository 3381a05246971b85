// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::persist::PersistError)
    clippy::module_name_repetitions
)]

//! # nyan
//!
//! A small terminal text editor drawn inside an ASCII-art cat.
//!
//! The cat's head and paws sit above the text, its belly and legs below
//! it. The editor region grows with the document until the terminal runs
//! out of rows, then the text scrolls to follow the cursor.
//!
//! ## Architecture
//!
//! nyan uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: Line buffer, cursor and file persistence
//! - [`ui`]: Layout negotiation and rendering
//! - [`config`]: Saved defaults and flag parsing

pub mod app;
pub mod config;
pub mod editor;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Cursor, Direction, LineBuffer};
    pub use crate::ui::layout::{Chrome, Geometry, LayoutOutcome};
}
