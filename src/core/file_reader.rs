//! Whole-file text reading
//!
//! Files are read in one call and must decode as UTF-8. The bytes are kept
//! verbatim: no newline translation, no lossy replacement, no size limit.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Why a file could not be read as text
#[derive(Debug, Error)]
pub enum ReadError {
    /// Open or read failed (missing file, permission denied, is a directory, ...)
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Content is not valid UTF-8
    #[error("invalid UTF-8 at byte {offset}")]
    Encoding { offset: usize },

    /// Path cannot be written into the dump as UTF-8
    #[error("path is not valid UTF-8")]
    PathEncoding,
}

/// Read an entire file as UTF-8 text
///
/// The file handle lives only for the duration of the call, so it is closed
/// on both the success and the error path.
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| ReadError::Encoding {
        offset: e.utf8_error().valid_up_to(),
    })
}
