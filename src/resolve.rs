//! Title and description resolution.
//!
//! Titles fall through an ordered chain of resolvers until one yields a
//! value; the winning resolver is recorded on the result so callers and
//! tests can tell a real value from a recovered default.

use crate::frontmatter::Frontmatter;
use crate::kind::FileKind;
use std::path::Path;

/// Which resolver produced a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// The `title:` field of the frontmatter block.
    Frontmatter,
    /// The first `# ` heading considered for the file's kind.
    Heading,
    /// Derived from the filename because no better source existed.
    Filename,
    /// The file could not be read; the filename default was used.
    ReadFailure,
}

/// A resolved title and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTitle {
    pub text: String,
    pub source: TitleSource,
}

/// Everything resolved from one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub title: ResolvedTitle,
    /// The frontmatter `description` field, verbatim (after block-scalar
    /// joining). Not yet a short description; see the lookup table.
    pub frontmatter_description: Option<String>,
}

/// Resolve a file's title and frontmatter description.
///
/// `content` is `None` when the file could not be read; resolution then
/// falls back to the filename-derived title and reports
/// [`TitleSource::ReadFailure`] instead of propagating the error.
#[must_use]
pub fn resolve_file(file_name: &str, content: Option<&str>) -> ResolvedFile {
    let Some(content) = content else {
        return ResolvedFile {
            title: ResolvedTitle {
                text: title_from_filename(file_name),
                source: TitleSource::ReadFailure,
            },
            frontmatter_description: None,
        };
    };
    let fm = Frontmatter::extract(content);
    ResolvedFile {
        title: resolve_title(file_name, content, &fm),
        frontmatter_description: fm.description,
    }
}

/// Priority order, first success wins: frontmatter `title:`, then a heading
/// (after a closed frontmatter block for the recognized suffixes, anywhere
/// otherwise), then the normalized filename.
fn resolve_title(file_name: &str, content: &str, fm: &Frontmatter) -> ResolvedTitle {
    if let Some(title) = fm.title.clone() {
        return ResolvedTitle {
            text: title,
            source: TitleSource::Frontmatter,
        };
    }
    let heading = if FileKind::of(file_name).suffix().is_some() {
        heading_after_frontmatter(content)
    } else {
        first_heading(content)
    };
    if let Some(text) = heading {
        return ResolvedTitle {
            text,
            source: TitleSource::Heading,
        };
    }
    ResolvedTitle {
        text: title_from_filename(file_name),
        source: TitleSource::Filename,
    }
}

/// First `# ` heading after a closed leading frontmatter block. A file
/// without such a block yields `None` even if it contains headings.
fn heading_after_frontmatter(content: &str) -> Option<String> {
    let mut lines = content.lines();
    if lines.next() != Some("---") {
        return None;
    }
    let mut closed = false;
    for line in lines.by_ref() {
        if line == "---" {
            closed = true;
            break;
        }
    }
    if !closed {
        return None;
    }
    lines.find_map(heading_text)
}

fn first_heading(content: &str) -> Option<String> {
    content.lines().find_map(heading_text)
}

fn heading_text(line: &str) -> Option<String> {
    line.strip_prefix("# ").map(|rest| rest.trim().to_string())
}

/// Filename heuristic: strip the recognized suffix (or the extension),
/// replace `-`/`_` with spaces, capitalize each word's first letter.
/// `code-review.prompt.md` becomes `Code Review`.
#[must_use]
pub fn title_from_filename(file_name: &str) -> String {
    let stem = match FileKind::of(file_name).suffix() {
        Some(suffix) => file_name.strip_suffix(suffix).unwrap_or(file_name),
        None => Path::new(file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file_name),
    };
    stem.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontmatter_title_wins() {
        let content = "---\ntitle: \"Alpha\"\n---\n\n# Not This\n";
        let resolved = resolve_file("a.instructions.md", Some(content));
        assert_eq!(resolved.title.text, "Alpha");
        assert_eq!(resolved.title.source, TitleSource::Frontmatter);
    }

    #[test]
    fn test_heading_after_frontmatter_for_suffixed_file() {
        let content = "---\nmode: agent\n---\n\n# Beta Prompt\n\nBody.\n";
        let resolved = resolve_file("b.prompt.md", Some(content));
        assert_eq!(resolved.title.text, "Beta Prompt");
        assert_eq!(resolved.title.source, TitleSource::Heading);
    }

    #[test]
    fn test_suffixed_file_without_frontmatter_ignores_heading() {
        let content = "# Beta Prompt\n\nBody.\n";
        let resolved = resolve_file("b.prompt.md", Some(content));
        assert_eq!(resolved.title.text, "B");
        assert_eq!(resolved.title.source, TitleSource::Filename);
    }

    #[test]
    fn test_plain_file_takes_first_heading_anywhere() {
        let content = "Intro text.\n\n# Architecture Notes\n";
        let resolved = resolve_file("architecture.md", Some(content));
        assert_eq!(resolved.title.text, "Architecture Notes");
        assert_eq!(resolved.title.source, TitleSource::Heading);
    }

    #[test]
    fn test_filename_fallback_normalization() {
        let content = "no headings here\n";
        let resolved = resolve_file("code-review.prompt.md", Some(content));
        assert_eq!(resolved.title.text, "Code Review");
        assert_eq!(resolved.title.source, TitleSource::Filename);
    }

    #[test]
    fn test_read_failure_is_observable() {
        let resolved = resolve_file("security-and-owasp.instructions.md", None);
        assert_eq!(resolved.title.text, "Security And Owasp");
        assert_eq!(resolved.title.source, TitleSource::ReadFailure);
        assert_eq!(resolved.frontmatter_description, None);
    }

    #[test]
    fn test_title_from_filename_underscores_and_extension() {
        assert_eq!(title_from_filename("release_notes.md"), "Release Notes");
        assert_eq!(title_from_filename("prd.chatmode.md"), "Prd");
    }

    #[test]
    fn test_description_carried_through() {
        let content = "---\ndescription: |\n  One\n  two\n---\n";
        let resolved = resolve_file("x.prompt.md", Some(content));
        assert_eq!(resolved.frontmatter_description, Some("One two".to_string()));
    }
}
