//! Reading and writing a [`LineBuffer`] to disk.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use super::LineBuffer;

/// Errors from loading or saving a document.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file exists but could not be read (permissions, directory, ...).
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of a successful [`load`].
#[derive(Debug)]
pub enum Loaded {
    /// The file existed and was read.
    Existing(LineBuffer),
    /// The path does not exist yet; the buffer is a single empty line.
    NewFile(LineBuffer),
}

impl Loaded {
    pub fn into_buffer(self) -> LineBuffer {
        match self {
            Self::Existing(buf) | Self::NewFile(buf) => buf,
        }
    }
}

/// Load a document, one line per newline-terminated record.
///
/// A missing file is not an error: it yields [`Loaded::NewFile`].
///
/// # Errors
///
/// Returns [`PersistError::Read`] for any other I/O failure, including
/// content that is not valid UTF-8.
pub fn load(path: &Path) -> Result<Loaded, PersistError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let buf = LineBuffer::from_text(&text);
            tracing::debug!(path = %path.display(), lines = buf.line_count(), "loaded file");
            Ok(Loaded::Existing(buf))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file absent, starting new buffer");
            Ok(Loaded::NewFile(LineBuffer::new()))
        }
        Err(source) => Err(PersistError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Serialize a buffer: every line followed by a single `\n`, including an
/// empty last line.
pub fn serialize(buf: &LineBuffer) -> String {
    let mut out = buf.text();
    out.push('\n');
    out
}

/// Write the buffer to `path` and clear its modified flag.
///
/// # Errors
///
/// Returns [`PersistError::Write`] if the file cannot be written; the
/// buffer stays modified and the file on disk is left as it was.
pub fn save(buf: &mut LineBuffer, path: &Path) -> Result<(), PersistError> {
    replace_file(path, serialize(buf).as_bytes()).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    buf.mark_saved();
    tracing::info!(path = %path.display(), lines = buf.line_count(), "saved file");
    Ok(())
}

/// Write `contents` to a temp file beside `path`, then rename it over
/// `path`. Readers see either the old file or the complete new one.
fn replace_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
