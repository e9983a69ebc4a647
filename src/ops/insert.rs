use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Inserts text at a line position in a file.
///
/// # Arguments
///
/// * `path` - The path to the file.
/// * `s` - The text to insert, verbatim; supply your own trailing newline.
/// * `line` - Zero-based line position. `0..=N` counts from the front, with
///   `N` appending after the last line. Negative values count back from the
///   end: `-1` appends, `-2` lands before the last line, `-(N+1)` before the
///   first.
///
pub fn insert(path: impl AsRef<Path>, s: &str, line: i64) -> Result<()> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| Error::from_io(e, path))?;

    // Every line keeps its own terminator, so a plain concat restores the
    // original byte sequence.
    let mut lines: Vec<&str> = content.split_inclusive('\n').collect();

    let idx = resolve_line(line, lines.len())?;
    debug!(line, idx, path = %path.display(), "inserting line");

    lines.insert(idx, s);

    fs::write(path, lines.concat()).map_err(|e| Error::from_io(e, path))
}

// Maps `line` onto an index in `0..=count`. Negative positions resolve as
// `count + line + 1`, so -1 means "after the last line".
fn resolve_line(line: i64, count: usize) -> Result<usize> {
    let idx = if line >= 0 {
        line
    } else {
        count as i64 + line + 1
    };

    if idx < 0 || idx > count as i64 {
        return Err(Error::LineOutOfRange { line, count });
    }

    Ok(idx as usize)
}
