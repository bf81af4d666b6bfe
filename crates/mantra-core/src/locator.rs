//! Locates context files and the legacy CLAUDE.md

use std::path::{Path, PathBuf};

/// Only files with this suffix are injected; companion docs are ignored
pub const CONTEXT_EXTENSION: &str = ".yml";

/// List context files under `root_dir/context_dir`, sorted by file name.
///
/// A missing directory yields an empty list.
pub fn find_context_files(root_dir: &Path, context_dir: &Path) -> Vec<PathBuf> {
    let dir = root_dir.join(context_dir);
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "context directory unavailable");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| !t.is_dir()).unwrap_or(false))
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .ends_with(CONTEXT_EXTENSION)
        })
        .map(|entry| entry.path())
        .collect();

    files.sort();
    files
}

/// Trimmed content of the legacy document, or `None` if it cannot be read
pub fn read_claude_md(root_dir: &Path, claude_md: &Path) -> Option<String> {
    let path = root_dir.join(claude_md);
    match std::fs::read(&path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).trim().to_string()),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no legacy context document");
            None
        }
    }
}
