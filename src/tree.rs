//! Rendering of the repository structure block.
//!
//! Produces the indented tree listing embedded in the README header, with
//! box-drawing prefixes marking last-vs-not-last siblings and trailing
//! `# <short description>` comments aligned to one column across the whole
//! tree.

use crate::scan::ScannedDir;

/// Minimum filename column width before the trailing comment.
pub const MIN_ALIGN_WIDTH: usize = 30;

const ROOT_LABEL: &str = ".github/";

/// Render the structure tree for the scanned directories.
#[must_use]
pub fn render_structure(dirs: &[ScannedDir]) -> String {
    let width = alignment_width(dirs);
    let mut lines = vec![ROOT_LABEL.to_string()];
    for (dir_index, dir) in dirs.iter().enumerate() {
        let last_dir = dir_index.saturating_add(1) == dirs.len();
        let dir_prefix = if last_dir { "└── " } else { "├── " };
        lines.push(format!("{dir_prefix}{}/", dir.name));
        for (file_index, file) in dir.files.iter().enumerate() {
            let last_file = file_index.saturating_add(1) == dir.files.len();
            let file_prefix = match (last_dir, last_file) {
                (true, true) => "    └── ",
                (true, false) => "    ├── ",
                (false, true) => "│   └── ",
                (false, false) => "│   ├── ",
            };
            // Pad only when a comment follows; bare entries stay unpadded
            // so the output carries no trailing whitespace.
            let line = match file.description.as_deref() {
                Some(description) => format!(
                    "{file_prefix}{:<width$} # {description}",
                    file.file_name,
                    width = width
                ),
                None => format!("{file_prefix}{}", file.file_name),
            };
            lines.push(line);
        }
    }
    lines.join("\n")
}

/// Comment column: the longest filename across the entire tree, with a
/// floor of [`MIN_ALIGN_WIDTH`].
fn alignment_width(dirs: &[ScannedDir]) -> usize {
    dirs.iter()
        .flat_map(|dir| dir.files.iter())
        .map(|file| file.file_name.len())
        .max()
        .map_or(MIN_ALIGN_WIDTH, |longest| longest.max(MIN_ALIGN_WIDTH))
}
