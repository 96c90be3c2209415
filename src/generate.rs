//! The scan → render → assemble pipeline.

use crate::assemble::{self, AssembleError};
use crate::descriptions::DescriptionTable;
use crate::scan::{self, ScanError};
use crate::tree;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Directory scanned for template content, relative to the root.
pub const GITHUB_DIR: &str = ".github";
/// Output document, relative to the root.
pub const README_FILE: &str = "README.md";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Assemble error: {0}")]
    Assemble(#[from] AssembleError),
}

/// Generate the complete README content for the repository at `root`.
///
/// # Errors
///
/// Returns [`GenerateError`] when `<root>/.github` or one of its required
/// subdirectories cannot be enumerated. Per-file extraction problems are
/// recovered during the scan and never surface here.
pub fn generate_readme(root: &Path, table: &DescriptionTable) -> Result<String, GenerateError> {
    let github_dir = root.join(GITHUB_DIR);
    debug!("Scanning {}", github_dir.display());
    let dirs = scan::scan_root(&github_dir, table)?;
    let structure = tree::render_structure(&dirs);
    let document = assemble::assemble_document(&dirs, &structure)?;
    Ok(document)
}
