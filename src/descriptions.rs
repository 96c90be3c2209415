//! The short-description table shown next to file entries in the rendered
//! structure tree.
//!
//! The table is read-only configuration data: built-in defaults for the
//! files the pack has always shipped, optionally merged with a
//! `readme-gen.toml` at the repository root so new files can be annotated
//! without touching this crate.

use crate::kind::FileKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Overrides filename, resolved relative to the repository root.
pub const OVERRIDES_FILENAME: &str = "readme-gen.toml";

/// Hand-authored annotations for well-known files.
const BUILT_IN: &[(&str, &str)] = &[
    ("commit.instructions.md", "Git commit message standards"),
    ("copilot.instructions.md", "Code generation guidelines"),
    ("debug.instructions.md", "Error handling and debugging"),
    ("pr.instructions.md", "Pull request documentation"),
    ("review.instructions.md", "Code review standards"),
    ("security-and-owasp.instructions.md", "Security best practices"),
    ("performance-optimization.instructions.md", "Performance guidelines"),
    ("clean.prompt.md", "Code cleanup workflows"),
    ("debug.prompt.md", "Debugging assistance"),
    ("doc.prompt.md", "Documentation generation"),
    ("review.prompt.md", "Code review assistance"),
    ("security.prompt.md", "Security analysis"),
    ("think.prompt.md", "Problem analysis"),
    ("debug.chatmode.md", "Debugging assistance mode"),
    ("prd.chatmode.md", "Product requirements mode"),
];

#[derive(Debug, Error)]
pub enum OverridesError {
    #[error("Failed to read description overrides: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse description overrides TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// User-supplied additions to the built-in table, deserialized from the
/// `[descriptions]` table of `readme-gen.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DescriptionOverrides {
    /// `filename = "short description"` pairs, merged over the built-ins.
    #[serde(default)]
    pub descriptions: HashMap<String, String>,
}

/// Resolve the canonical path for the overrides file.
#[must_use]
pub fn overrides_path(root: &Path) -> PathBuf {
    root.join(OVERRIDES_FILENAME)
}

/// Load description overrides from `<root>/readme-gen.toml`.
///
/// Returns `Ok(DescriptionOverrides::default())` if the file does not exist
/// so callers never need to handle the "absent file" case specially.
///
/// # Errors
///
/// Returns [`OverridesError`] if the file exists but cannot be read or
/// parsed.
pub fn load_overrides(root: &Path) -> Result<DescriptionOverrides, OverridesError> {
    let path = overrides_path(root);
    if !path.exists() {
        debug!("No overrides file at {}; using built-ins", path.display());
        return Ok(DescriptionOverrides::default());
    }
    let content = std::fs::read_to_string(&path)?;
    let overrides: DescriptionOverrides = toml::from_str(&content)?;
    debug!(
        "Loaded {} description overrides from {}",
        overrides.descriptions.len(),
        path.display()
    );
    Ok(overrides)
}

/// The resolved short-description table. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct DescriptionTable {
    entries: HashMap<String, String>,
}

impl DescriptionTable {
    /// The built-in table with no overrides applied.
    #[must_use]
    pub fn built_in() -> Self {
        let entries = BUILT_IN
            .iter()
            .map(|(name, text)| ((*name).to_string(), (*text).to_string()))
            .collect();
        Self { entries }
    }

    /// The built-in table with `overrides` merged on top.
    #[must_use]
    pub fn with_overrides(overrides: &DescriptionOverrides) -> Self {
        let mut table = Self::built_in();
        for (name, text) in &overrides.descriptions {
            table.entries.insert(name.clone(), text.clone());
        }
        table
    }

    /// Resolve the short description for one file entry.
    ///
    /// Exact filename matches win. Unknown instruction and chat-mode files
    /// fall back to a wording derived from the resolved title; unknown
    /// prompt files get no annotation; other markdown files fall back to
    /// their frontmatter description.
    #[must_use]
    pub fn short_description(
        &self,
        file_name: &str,
        title: &str,
        frontmatter_description: Option<&str>,
    ) -> Option<String> {
        if let Some(text) = self.entries.get(file_name) {
            return Some(text.clone());
        }
        match FileKind::of(file_name) {
            FileKind::Instructions => {
                let last_word = title.split_whitespace().next_back()?;
                Some(format!("{} specific standards", last_word.to_lowercase()))
            }
            FileKind::ChatMode => Some(format!("{} mode", title.to_lowercase())),
            FileKind::Prompt => None,
            FileKind::Other => frontmatter_description.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_known_filenames_use_table_entries() {
        let table = DescriptionTable::built_in();
        assert_eq!(
            table.short_description("commit.instructions.md", "Commit Messages", None),
            Some("Git commit message standards".to_string())
        );
        assert_eq!(
            table.short_description("prd.chatmode.md", "PRD", None),
            Some("Product requirements mode".to_string())
        );
    }

    #[test]
    fn test_unknown_instructions_derive_from_title() {
        let table = DescriptionTable::built_in();
        assert_eq!(
            table.short_description("rust.instructions.md", "Rust Coding Conventions", None),
            Some("conventions specific standards".to_string())
        );
    }

    #[test]
    fn test_unknown_chatmode_derives_from_title() {
        let table = DescriptionTable::built_in();
        assert_eq!(
            table.short_description("plan.chatmode.md", "Planning", None),
            Some("planning mode".to_string())
        );
    }

    #[test]
    fn test_unknown_prompt_has_no_annotation() {
        let table = DescriptionTable::built_in();
        assert_eq!(
            table.short_description("scaffold.prompt.md", "Scaffold", Some("ignored")),
            None
        );
    }

    #[test]
    fn test_other_files_fall_back_to_frontmatter_description() {
        let table = DescriptionTable::built_in();
        assert_eq!(
            table.short_description("style-guide.md", "Style Guide", Some("House style notes")),
            Some("House style notes".to_string())
        );
        assert_eq!(table.short_description("style-guide.md", "Style Guide", None), None);
    }

    #[test]
    fn test_overrides_replace_and_extend() {
        let mut overrides = DescriptionOverrides::default();
        overrides
            .descriptions
            .insert("debug.prompt.md".to_string(), "Step-through debugging".to_string());
        overrides
            .descriptions
            .insert("deploy.prompt.md".to_string(), "Deployment checklists".to_string());
        let table = DescriptionTable::with_overrides(&overrides);
        assert_eq!(
            table.short_description("debug.prompt.md", "Debug", None),
            Some("Step-through debugging".to_string())
        );
        assert_eq!(
            table.short_description("deploy.prompt.md", "Deploy", None),
            Some("Deployment checklists".to_string())
        );
    }

    #[test]
    fn test_load_overrides_absent_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let overrides = load_overrides(temp_dir.path()).unwrap();
        assert_eq!(overrides, DescriptionOverrides::default());
    }

    #[test]
    fn test_load_overrides_parses_descriptions_table() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            overrides_path(temp_dir.path()),
            "[descriptions]\n\"deploy.prompt.md\" = \"Deployment checklists\"\n",
        )
        .unwrap();
        let overrides = load_overrides(temp_dir.path()).unwrap();
        assert_eq!(
            overrides.descriptions.get("deploy.prompt.md"),
            Some(&"Deployment checklists".to_string())
        );
    }

    #[test]
    fn test_load_overrides_malformed_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(overrides_path(temp_dir.path()), "[descriptions\nbroken").unwrap();
        assert!(load_overrides(temp_dir.path()).is_err());
    }
}
