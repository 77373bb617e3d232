//! Loading the file being viewed into memory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::StartupError;

/// Read `path` into lines of raw bytes.
///
/// Lines are split on `\n` with one trailing `\r` stripped, so CRLF files load the
/// same as LF files. A terminating newline does not produce a trailing empty line.
pub fn load_lines(path: &Path) -> Result<Vec<Vec<u8>>, StartupError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => StartupError::FileNotFound(path.to_path_buf()),
        _ => StartupError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).split(b'\n') {
        let mut line = line.map_err(|source| StartupError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        lines.push(line);
    }

    tracing::info!("Loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
