//! File system scanner for discovering stat-block files.
//!
//! Recursively scans directories for `.mtf` files so the CLI can convert
//! whole collections in one invocation.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Scan a directory for `.mtf` files.
///
/// Recursively walks the directory and returns the matches sorted by
/// path, so batch conversion order is deterministic. A nonexistent root
/// yields an empty list.
pub fn scan_directory(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if !root.exists() {
        return files;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if is_mtf_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}

/// Check whether a path names a stat-block file by its extension.
pub fn is_mtf_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("mtf"))
}
