//! Idempotent README writes.
//!
//! The generated document is compared byte-for-byte against the existing
//! file and written only on difference, so repeated runs (e.g. from a
//! pre-commit hook) leave timestamps and diffs untouched. Writes go through
//! a temp file in the target directory followed by an atomic rename; temp
//! files are cleaned up on failure.

use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// What the write step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No file existed; the document was created.
    Created,
    /// The existing file differed and was replaced.
    Updated,
    /// The existing file was byte-identical; nothing was written.
    Unchanged,
}

/// Write `content` to `path` only if it differs from the current file.
///
/// # Errors
///
/// Returns an `io::Error` if the existing file cannot be read, the temp
/// file cannot be created or written, or the atomic rename fails.
pub fn write_if_changed(path: &Path, content: &str) -> io::Result<WriteOutcome> {
    let existed = path.exists();
    if existed {
        let current = std::fs::read(path)?;
        if current == content.as_bytes() {
            return Ok(WriteOutcome::Unchanged);
        }
    }
    atomic_write(path, content)?;
    Ok(if existed {
        WriteOutcome::Updated
    } else {
        WriteOutcome::Created
    })
}

/// Whether the file at `path` already equals `content`, byte-for-byte.
///
/// # Errors
///
/// Returns an `io::Error` if an existing file cannot be read.
pub fn is_up_to_date(path: &Path, content: &str) -> io::Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    Ok(std::fs::read(path)? == content.as_bytes())
}

/// Temp file in the same directory as the target, then an atomic rename.
fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory")
    })?;
    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
