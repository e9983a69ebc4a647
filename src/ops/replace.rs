use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Replaces all occurrences of `old` with `new` in the file's content.
///
/// # Arguments
///
/// * `path` - The path to the file to edit.
/// * `old` - The substring to be replaced.
/// * `new` - The replacement text.
///
pub fn replace(path: impl AsRef<Path>, old: &str, new: &str) -> Result<()> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| Error::from_io(e, path))?;

    let new_content = content.replace(old, new);

    fs::write(path, new_content).map_err(|e| Error::from_io(e, path))
}
