//! Easily manipulate text files.
//!
//! Every function performs one whole-file operation synchronously and
//! returns; no handle outlives a call. Content is always UTF-8.
//!
//! ```no_run
//! fn main() -> textfile::Result<()> {
//!     textfile::write("notes.txt", "line 1\nline 2\n")?;
//!     textfile::insert("notes.txt", "line 0\n", 0)?;
//!     assert_eq!(textfile::read("notes.txt")?, "line 0\nline 1\nline 2\n");
//!     Ok(())
//! }
//! ```

pub use crate::error::{Error, Result};
pub use crate::ops::{append, insert, read, read_silent, replace, write};

mod error;
mod ops;
