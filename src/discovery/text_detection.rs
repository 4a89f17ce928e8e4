//! File classification: executability and first-line text detection.
//!
//! A file qualifies for annotation extraction when it has any execute bit
//! and its first line decodes as UTF-8. Only the first line is inspected.

use crate::error::{Result, ScanError};
use std::fs::{File, Metadata};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Owner, group and other execute bits.
const EXECUTE_BITS: u32 = 0o111;

/// Check whether a raw mode carries any execute bit.
pub fn mode_is_executable(mode: u32) -> bool {
    mode & EXECUTE_BITS != 0
}

/// Check whether file metadata carries any execute bit.
#[cfg(unix)]
pub fn is_executable(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    mode_is_executable(metadata.permissions().mode())
}

/// Check whether file metadata carries any execute bit.
///
/// Platforms without POSIX modes have no execute bits to inspect.
#[cfg(not(unix))]
pub fn is_executable(_metadata: &Metadata) -> bool {
    false
}

/// Check whether the first line of the file at `path` is valid UTF-8.
///
/// At most `limit` bytes are read. Empty files count as text. A file that
/// is not UTF-8 is a normal negative answer; only open and read failures
/// are errors.
pub fn is_text_file(path: &Path, limit: usize) -> Result<bool> {
    let file = File::open(path).map_err(|e| ScanError::open(path, e))?;
    first_line_is_utf8(BufReader::new(file), limit).map_err(|e| ScanError::read(path, e))
}

/// Check whether the first line produced by `reader` is valid UTF-8.
///
/// When the line is cut off by `limit`, an incomplete multi-byte sequence
/// at the cut is tolerated.
pub fn first_line_is_utf8<R: BufRead>(reader: R, limit: usize) -> io::Result<bool> {
    let mut line = Vec::new();
    reader.take(limit as u64).read_until(b'\n', &mut line)?;

    let truncated = line.last() != Some(&b'\n') && line.len() >= limit;
    strip_line_ending(&mut line);

    Ok(match std::str::from_utf8(&line) {
        Ok(_) => true,
        Err(e) => truncated && e.error_len().is_none(),
    })
}

/// Remove a trailing `\n` or `\r\n`.
pub(crate) fn strip_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}
