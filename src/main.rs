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

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use readme_gen::descriptions::{self, DescriptionOverrides, DescriptionTable};
use readme_gen::generate::{generate_readme, GenerateError, README_FILE};
use readme_gen::logging::{init_logging, parse_level, LogConfig};
use readme_gen::output::{self, WriteOutcome};
use readme_gen::{AssembleError, ScanError};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Regenerate the template-pack README from the `.github/` content tree.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository root containing `.github/` and `README.md`
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Verify the README is up to date without writing anything
    #[arg(long)]
    check: bool,

    /// Enable JSON log format (for log aggregation)
    #[arg(long, default_value = "false")]
    log_json: bool,

    /// Log level: error, warn, info, debug, or trace
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn report_generate_error(root: &Path, e: &GenerateError) {
    eprintln!();
    eprintln!("Error: Failed to generate README.md: {e}");
    eprintln!();
    match e {
        GenerateError::Scan(ScanError::MissingRoot(_)) => {
            eprintln!(
                "No .github directory was found under {}.",
                root.display()
            );
            eprintln!("Run from the repository root, or pass --root <dir>.");
        }
        GenerateError::Assemble(AssembleError::MissingDirectory(dir)) => {
            eprintln!(
                "The template pack requires {}/{dir}/ to exist.",
                root.join(readme_gen::GITHUB_DIR).display()
            );
        }
        GenerateError::Scan(_) => {}
    }
    eprintln!();
}

fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let args = Args::parse();

    let log_config = LogConfig {
        log_level: parse_level(&args.log_level),
        json_format: args.log_json,
    };
    init_logging(&log_config)?;

    info!("Generating README.md from scratch...");

    // The overrides file is optional configuration; a broken one falls back
    // to the built-in table.
    let overrides = descriptions::load_overrides(&args.root).unwrap_or_else(|e| {
        warn!("Failed to load description overrides, using built-ins: {e}");
        DescriptionOverrides::default()
    });
    let table = DescriptionTable::with_overrides(&overrides);

    let readme_path = args.root.join(README_FILE);
    info!("Writing README to: {}", readme_path.display());

    let document = match generate_readme(&args.root, &table) {
        Ok(document) => document,
        Err(e) => {
            report_generate_error(&args.root, &e);
            return Err(e.into());
        }
    };

    if args.check {
        if output::is_up_to_date(&readme_path, &document)? {
            info!("README.md is already up to date. No changes needed.");
            return Ok(());
        }
        return Err(eyre!(
            "README.md is out of date; rerun without --check to regenerate"
        ));
    }

    match output::write_if_changed(&readme_path, &document)? {
        WriteOutcome::Created => info!("README.md created successfully!"),
        WriteOutcome::Updated => info!("README.md updated successfully!"),
        WriteOutcome::Unchanged => info!("README.md is already up to date. No changes needed."),
    }

    Ok(())
}
