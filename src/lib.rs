// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod assemble;
pub mod descriptions;
pub mod frontmatter;
pub mod generate;
pub mod kind;
pub mod logging;
pub mod output;
pub mod resolve;
pub mod scan;
pub mod templates;
pub mod tree;

// Re-export commonly used types
pub use assemble::{assemble_document, AssembleError};
pub use descriptions::{load_overrides, DescriptionOverrides, DescriptionTable, OverridesError};
pub use frontmatter::Frontmatter;
pub use generate::{generate_readme, GenerateError, GITHUB_DIR, README_FILE};
pub use kind::FileKind;
pub use output::{is_up_to_date, write_if_changed, WriteOutcome};
pub use resolve::{resolve_file, ResolvedFile, ResolvedTitle, TitleSource};
pub use scan::{scan_root, FileEntry, ScanError, ScannedDir};
pub use tree::render_structure;
