//! Source file discovery (pure, no side effects beyond reads).

use std::fs;
use std::path::{Path, PathBuf};

/// Discover filesystem entries under `root`, in directory-listing order.
///
/// With `recursive` enabled, child directories are expanded depth-first
/// before the directory entry itself is appended. Directories are pushed
/// into the result alongside files; callers filter by file-name suffix,
/// so entries without a matching suffix fall out downstream.
///
/// An unreadable directory yields an empty listing for that subtree.
pub fn discover_files(root: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();
    search(root, recursive, &mut files);
    files
}

fn search(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if recursive && path.is_dir() {
            search(&path, true, files);
        }

        files.push(path);
    }
}
