//! Trace Loading.
//!
//! Opens a trace file for line-by-line replay. Failing to open it is the only
//! I/O failure the tool distinguishes; the CLI exits non-zero with the message.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::common::SimError;

/// Opens `path` as a buffered trace reader.
///
/// # Errors
///
/// Returns [`SimError::Io`] carrying the path when the file cannot be opened.
pub fn open_trace(path: impl AsRef<Path>) -> Result<BufReader<File>, SimError> {
    let path = path.as_ref();
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })
}
