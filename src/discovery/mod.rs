//! Finds the test sources to scan under a path.

use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::IoError;
use crate::syntax::Language;

/// Directories that never hold hand-written tests.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "dist", "build", "coverage"];

/// Source files under `root` with a JavaScript or TypeScript extension,
/// sorted by path. A file path is returned as is.
pub fn collect_targets(root: &Path, exclude_hidden: bool) -> Result<Vec<PathBuf>, IoError> {
    if !root.exists() {
        return Err(IoError::not_found(root));
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    walk_source_files(root, EXCLUDED_DIRS, exclude_hidden)
}

pub fn walk_source_files(
    root: &Path,
    excluded_dirs: &[&str],
    exclude_hidden: bool,
) -> Result<Vec<PathBuf>, IoError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| {
        // the root itself is always walked
        if e.depth() == 0 || !e.file_type().is_dir() {
            return true;
        }
        let name = e.file_name().to_string_lossy();
        if exclude_hidden && name.starts_with('.') {
            return false;
        }
        !excluded_dirs.contains(&name.as_ref())
    }) {
        let entry = entry.map_err(|e| IoError::walk_error(root, e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if exclude_hidden && file_name.starts_with('.') {
            continue;
        }
        if Language::detect(entry.path()).is_none() {
            continue;
        }
        if is_declaration_file(&file_name) {
            continue;
        }
        if in_excluded_dir(entry.path().strip_prefix(root).unwrap_or(entry.path()), excluded_dirs) {
            continue;
        }
        files.push(entry.into_path());
    }

    files.sort();
    debug!(root = %root.display(), count = files.len(), "discovered source files");
    Ok(files)
}

/// `.d.ts` files declare types only.
fn is_declaration_file(file_name: &str) -> bool {
    [".d.ts", ".d.mts", ".d.cts"]
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
}

fn in_excluded_dir(relative: &Path, excluded_dirs: &[&str]) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(name) => excluded_dirs.contains(&name.to_string_lossy().as_ref()),
        _ => false,
    })
}
