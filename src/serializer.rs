//! Serialization module for writing the compilation database to disk.
//!
//! This module serializes the record collection to pretty-printed JSON and
//! writes it with an atomic replace, so an interrupted run never leaves a
//! truncated `compile_commands.json` behind.

use crate::database::CompileRecord;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes compilation records to a JSON array with 2-space indentation.
///
/// The output is the standard compilation database shape consumed by
/// clang-tidy and similar tooling: a flat array of record objects. An empty
/// record set serializes to `[]`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(records: &[CompileRecord]) -> Result<String> {
    debug!("Serializing {} compile records to JSON", records.len());
    serde_json::to_string_pretty(records)
        .context("Failed to serialize compilation database to JSON")
}

/// Writes string content to a file, replacing it atomically.
///
/// The content is first written to a temporary sibling path, then renamed
/// over the target. Readers of the target path therefore see either the old
/// content or the new content in full, never a partial write. Parent
/// directories are created if missing.
///
/// # Arguments
///
/// * `content` - The string content to write
/// * `path` - The file path to write to
///
/// # Errors
///
/// Returns an error if the temporary file cannot be written or the rename
/// fails.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    // Stage in a sibling temp file so the rename stays on one filesystem
    let mut tmp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write to file: {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    debug!(
        "Successfully wrote {} bytes to {}",
        content.len(),
        path.display()
    );
    Ok(())
}
