//! Error types for file-backed exercises

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from [`crate::meaningful_line_count`] and friends
#[derive(Debug, Error)]
pub enum LineCountError {
    #[error("No such file: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    InvalidUtf8 { path: PathBuf },
}

impl LineCountError {
    /// Classify an I/O failure on `path`, keeping "not found" distinct
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => LineCountError::NotFound { path },
            io::ErrorKind::InvalidData => LineCountError::InvalidUtf8 { path },
            _ => LineCountError::Io { path, source },
        }
    }

    /// Check whether the path did not resolve to a file
    pub fn is_not_found(&self) -> bool {
        matches!(self, LineCountError::NotFound { .. })
    }
}

/// Result type for file-backed exercises
pub type Result<T> = std::result::Result<T, LineCountError>;
