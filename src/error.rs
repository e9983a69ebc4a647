use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all textfile operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Target file does not exist (for operations requiring one).
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Target path is a directory, not a regular file.
    #[error("is a directory: {}", .path.display())]
    IsADirectory { path: PathBuf },

    /// Caller lacks read or write permission on the target.
    #[error("permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Insertion line resolved outside `[0, N]` for an `N`-line file.
    #[error("line {line} is out of range for a file with {count} lines")]
    LineOutOfRange { line: i64, count: usize },

    /// Any other I/O failure.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Classify an `io::Error` from an operation on `path` into the taxonomy.
    pub(crate) fn from_io(err: io::Error, path: &Path) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path },
            io::ErrorKind::IsADirectory => Error::IsADirectory { path },
            _ => Error::Io { path, source: err },
        }
    }
}
