use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads the whole file into a string.
pub fn read(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::from_io(e, path))
}

/// Like [`read`], but an absent file yields an empty string instead of
/// [`Error::NotFound`]. Every other failure still surfaces.
pub fn read_silent(path: impl AsRef<Path>) -> Result<String> {
    match read(path) {
        Err(Error::NotFound { .. }) => Ok(String::new()),
        other => other,
    }
}
