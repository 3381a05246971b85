//! Line-buffer editing model.
//!
//! Provides a rope-backed line buffer with cursor management and scroll
//! tracking, plus loading and saving to disk.

mod buffer;
pub mod persist;

pub use buffer::{Cursor, Direction, LineBuffer};
pub use persist::{Loaded, PersistError};
