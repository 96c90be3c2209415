//! Assembly of the final document from static sections and the rendered
//! structure.
//!
//! The instructions and prompts sections are unconditional and their source
//! directories are required; a missing one aborts generation. The chat-modes
//! section appears only when at least one chat-mode file exists.

use crate::kind::FileKind;
use crate::scan::ScannedDir;
use crate::templates;
use thiserror::Error;
use tracing::info;

/// Required directory of instruction templates under `.github`.
pub const INSTRUCTIONS_DIR: &str = "instructions";
/// Required directory of prompt templates under `.github`.
pub const PROMPTS_DIR: &str = "prompts";
/// Optional directory of chat mode definitions under `.github`.
pub const CHATMODES_DIR: &str = "chatmodes";

/// Separator between assembled sections.
const SECTION_SEPARATOR: &str = "\n\n";

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("Required directory '{0}' was not found under .github")]
    MissingDirectory(&'static str),
}

/// Assemble the complete document: header (with the structure substituted),
/// instructions, prompts, optional chat modes, footer.
pub fn assemble_document(dirs: &[ScannedDir], structure: &str) -> Result<String, AssembleError> {
    let mut sections = vec![templates::render_header(structure)];
    sections.push(instructions_section(dirs)?);
    sections.push(prompts_section(dirs)?);
    if let Some(section) = chatmodes_section(dirs) {
        sections.push(section);
    }
    sections.push(templates::FOOTER.to_string());
    Ok(sections.join(SECTION_SEPARATOR))
}

fn find_dir<'a>(dirs: &'a [ScannedDir], name: &str) -> Option<&'a ScannedDir> {
    dirs.iter().find(|dir| dir.name == name)
}

fn count_kind(dir: &ScannedDir, kind: FileKind) -> usize {
    dir.files
        .iter()
        .filter(|file| FileKind::of(&file.file_name) == kind)
        .count()
}

fn instructions_section(dirs: &[ScannedDir]) -> Result<String, AssembleError> {
    let dir = find_dir(dirs, INSTRUCTIONS_DIR)
        .ok_or(AssembleError::MissingDirectory(INSTRUCTIONS_DIR))?;
    info!("Found {} instruction files", dir.files.len());
    Ok(format!(
        "{}{SECTION_SEPARATOR}{}",
        templates::INSTRUCTIONS_SECTION,
        templates::INSTRUCTIONS_USAGE
    ))
}

fn prompts_section(dirs: &[ScannedDir]) -> Result<String, AssembleError> {
    let dir = find_dir(dirs, PROMPTS_DIR).ok_or(AssembleError::MissingDirectory(PROMPTS_DIR))?;
    info!("Found {} prompt files", count_kind(dir, FileKind::Prompt));
    Ok(format!(
        "{}{SECTION_SEPARATOR}{}",
        templates::PROMPTS_SECTION,
        templates::PROMPTS_USAGE
    ))
}

fn chatmodes_section(dirs: &[ScannedDir]) -> Option<String> {
    let Some(dir) = find_dir(dirs, CHATMODES_DIR) else {
        info!("Chat modes directory does not exist");
        return None;
    };
    let count = count_kind(dir, FileKind::ChatMode);
    if count == 0 {
        info!("No chat mode files found");
        return None;
    }
    info!("Found {count} chat mode files");
    Some(format!(
        "{}{SECTION_SEPARATOR}{}",
        templates::CHATMODES_SECTION,
        templates::CHATMODES_USAGE
    ))
}
