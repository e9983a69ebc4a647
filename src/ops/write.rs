use std::fs;
use std::path::Path;

use tracing::trace;

use crate::error::{Error, Result};

pub fn write(path: impl AsRef<Path>, s: &str) -> Result<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), bytes = s.len(), "rewriting file");
    fs::write(path, s).map_err(|e| Error::from_io(e, path))
}
