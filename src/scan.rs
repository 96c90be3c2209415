//! Enumeration of the template content tree.
//!
//! The scan walks the non-hidden immediate subdirectories of the `.github`
//! folder and their markdown files, both in lexicographic order so the
//! rendered output is deterministic. Per-file read failures are recovered
//! with filename-derived defaults; only failures to enumerate directories
//! are reported to the caller.

use crate::descriptions::DescriptionTable;
use crate::resolve::{self, ResolvedTitle};
use std::path::Path;
use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Scan root '{0}' does not exist or is not a directory")]
    MissingRoot(String),

    #[error("Failed to enumerate directory tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// One markdown file discovered during the scan. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub file_name: String,
    pub title: ResolvedTitle,
    /// Short description shown as the trailing comment, already resolved
    /// through the lookup table and its fallbacks.
    pub description: Option<String>,
}

/// A non-hidden subdirectory of the scan root and its markdown files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDir {
    pub name: String,
    pub files: Vec<FileEntry>,
}

/// Enumerate `github_dir` into scanned directories, lexicographically
/// ordered at both levels.
pub fn scan_root(
    github_dir: &Path,
    table: &DescriptionTable,
) -> Result<Vec<ScannedDir>, ScanError> {
    if !github_dir.is_dir() {
        return Err(ScanError::MissingRoot(github_dir.display().to_string()));
    }
    let mut dirs = Vec::new();
    for entry in WalkDir::new(github_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        let files = scan_dir(entry.path(), table)?;
        dirs.push(ScannedDir { name, files });
    }
    Ok(dirs)
}

fn scan_dir(dir: &Path, table: &DescriptionTable) -> Result<Vec<FileEntry>, ScanError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().to_string();
        if !file_name.ends_with(".md") {
            continue;
        }
        files.push(read_entry(entry.path(), file_name, table));
    }
    Ok(files)
}

/// Build one [`FileEntry`], recovering from a read failure with the
/// filename-derived default instead of failing the scan.
fn read_entry(path: &Path, file_name: String, table: &DescriptionTable) -> FileEntry {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!(
                "Failed to read {}: {e}; using filename-derived title",
                path.display()
            );
            None
        }
    };
    let resolved = resolve::resolve_file(&file_name, content.as_deref());
    let description = table.short_description(
        &file_name,
        &resolved.title.text,
        resolved.frontmatter_description.as_deref(),
    );
    FileEntry {
        file_name,
        title: resolved.title,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::TitleSource;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = scan_root(&temp_dir.path().join(".github"), &DescriptionTable::built_in());
        assert!(matches!(result, Err(ScanError::MissingRoot(_))));
    }

    #[test]
    fn test_directories_and_files_sorted_lexicographically() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for dir in ["prompts", "chatmodes", "instructions"] {
            std::fs::create_dir(root.join(dir)).unwrap();
        }
        write(&root.join("prompts"), "zeta.prompt.md", "z\n");
        write(&root.join("prompts"), "alpha.prompt.md", "a\n");
        write(&root.join("instructions"), "commit.instructions.md", "c\n");

        let dirs = scan_root(root, &DescriptionTable::built_in()).unwrap();
        let names: Vec<&str> = dirs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["chatmodes", "instructions", "prompts"]);

        let prompts = dirs.iter().find(|d| d.name == "prompts").unwrap();
        let files: Vec<&str> = prompts.files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(files, ["alpha.prompt.md", "zeta.prompt.md"]);
    }

    #[test]
    fn test_hidden_directories_and_non_markdown_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir(root.join(".hidden")).unwrap();
        std::fs::create_dir(root.join("prompts")).unwrap();
        write(&root.join("prompts"), "notes.txt", "not markdown\n");
        write(&root.join("prompts"), "real.prompt.md", "ok\n");

        let dirs = scan_root(root, &DescriptionTable::built_in()).unwrap();
        assert_eq!(dirs.len(), 1);
        let files: Vec<&str> = dirs
            .first()
            .unwrap()
            .files
            .iter()
            .map(|f| f.file_name.as_str())
            .collect();
        assert_eq!(files, ["real.prompt.md"]);
    }

    #[test]
    fn test_entry_carries_resolved_title_and_description() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir(root.join("instructions")).unwrap();
        write(
            &root.join("instructions"),
            "commit.instructions.md",
            "---\ntitle: \"Commit Messages\"\n---\n",
        );

        let dirs = scan_root(root, &DescriptionTable::built_in()).unwrap();
        let entry = dirs.first().unwrap().files.first().unwrap();
        assert_eq!(entry.title.text, "Commit Messages");
        assert_eq!(entry.title.source, TitleSource::Frontmatter);
        assert_eq!(entry.description, Some("Git commit message standards".to_string()));
    }
}
