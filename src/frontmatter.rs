//! Frontmatter extraction for template-pack markdown files.
//!
//! Recognizes a leading block bounded by two lines equal to `---` and pulls
//! the `title` and `description` fields out of it. Extraction is deliberately
//! tolerant: it is line-based, the first match wins, and anything malformed
//! simply yields no fields. Nothing here validates the block as YAML.

use std::sync::LazyLock;

/// Fields recovered from a frontmatter block.
///
/// Absence of a field (or of the whole block) is not an error; both fields
/// are simply `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Matches `description: |`, the opener of a multi-line block scalar.
#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static BLOCK_SCALAR_OPENER: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^description:\s*\|\s*$")
        .expect("BLOCK_SCALAR_OPENER is a valid regex literal")
});

/// Matches a single-line `description:` value with optional quotes.
#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static SINGLE_LINE_DESCRIPTION: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r#"^description:\s*['"]?(.+?)['"]?\s*$"#)
        .expect("SINGLE_LINE_DESCRIPTION is a valid regex literal")
});

impl Frontmatter {
    /// Extract the `title` and `description` fields from `content`.
    ///
    /// Returns `Frontmatter::default()` when the content has no leading
    /// frontmatter block or the block is unterminated.
    #[must_use]
    pub fn extract(content: &str) -> Self {
        let Some(block) = leading_block(content) else {
            return Self::default();
        };
        Self {
            title: extract_title(&block),
            description: extract_description(&block),
        }
    }
}

/// The lines between the two `---` delimiters of a leading frontmatter
/// block, or `None` when the block is absent or never closed.
fn leading_block(content: &str) -> Option<Vec<&str>> {
    let mut lines = content.lines();
    if lines.next() != Some("---") {
        return None;
    }
    let mut block = Vec::new();
    for line in lines {
        if line == "---" {
            return Some(block);
        }
        block.push(line);
    }
    None
}

fn extract_title(block: &[&str]) -> Option<String> {
    block
        .iter()
        .find_map(|line| {
            let value = line.trim_start().strip_prefix("title:")?;
            Some(strip_quotes(value.trim()).to_string())
        })
        .filter(|title| !title.is_empty())
}

fn extract_description(block: &[&str]) -> Option<String> {
    let mut scalar_lines: Option<Vec<&str>> = None;
    for line in block {
        if let Some(collected) = scalar_lines.as_mut() {
            // Two-space-indented lines continue the block scalar; anything
            // else (including a new key) ends it.
            if let Some(rest) = line.strip_prefix("  ") {
                collected.push(rest);
                continue;
            }
            break;
        }
        if BLOCK_SCALAR_OPENER.is_match(line) {
            scalar_lines = Some(Vec::new());
            continue;
        }
        if let Some(captures) = SINGLE_LINE_DESCRIPTION.captures(line) {
            return Some(captures.get(1)?.as_str().to_string());
        }
    }
    let joined = scalar_lines?.join(" ").trim().to_string();
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Strip one leading and one trailing quote character, independently.
fn strip_quotes(value: &str) -> &str {
    let value = value
        .strip_prefix('"')
        .or_else(|| value.strip_prefix('\''))
        .unwrap_or(value);
    value
        .strip_suffix('"')
        .or_else(|| value.strip_suffix('\''))
        .unwrap_or(value)
}
