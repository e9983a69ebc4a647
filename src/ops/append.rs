use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Appends `s` to the end of the file, creating the file if it is absent.
pub fn append(path: impl AsRef<Path>, s: &str) -> Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::from_io(e, path))?;

    file.write_all(s.as_bytes())
        .map_err(|e| Error::from_io(e, path))
}
