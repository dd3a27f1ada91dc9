//! Path normalization for project-relative asset paths
//!
//! Every asset the registry tracks is keyed by its project-relative path with
//! forward slashes, so CLI input (absolute, cwd-relative, or already
//! project-relative, with either slash style) has to be funneled through one
//! normalization point before it reaches the engine.

use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::error::{PackError, Result};

/// Convert a path to its forward-slash string representation
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Normalize a path (resolve `.`/`..` and symlinks where possible)
///
/// For non-existent paths, normalizes the longest existing ancestor and
/// appends the remaining components, so removal of already-deleted files
/// still resolves to a stable key.
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(norm) = path.normalize() {
        return dunce::simplified(norm.as_path()).to_path_buf();
    }

    // Walk up until an existing ancestor is found, normalize that, then
    // re-append the missing tail.
    let mut current = path;
    let mut components = Vec::new();

    while !current.exists() {
        if let Some(file_name) = current.file_name() {
            components.push(file_name.to_os_string());
            if let Some(parent) = current.parent() {
                current = parent;
            } else {
                return path.to_path_buf();
            }
        } else {
            return path.to_path_buf();
        }
    }

    let normalized_base = current
        .normalize()
        .map(|norm| dunce::simplified(norm.as_path()).to_path_buf())
        .unwrap_or_else(|_| current.to_path_buf());

    let mut result = normalized_base;
    for component in components.iter().rev() {
        result.push(component);
    }

    result
}

/// Resolve CLI path input to a project-relative forward-slash path
///
/// A relative input can mean a path from the current directory or a path
/// from the project root; whichever names an existing file wins, current
/// directory first. When neither exists (removing an assignment whose file
/// is gone), the project-relative reading is taken so stored keys still
/// match. Paths that resolve outside the project root are rejected.
pub fn project_relative(root: &Path, input: &str) -> Result<String> {
    let root = normalize_path(root);
    let given = Path::new(input);

    if given.is_absolute() {
        let candidate = normalize_path(given);
        if let Ok(rel) = candidate.strip_prefix(&root) {
            return Ok(relative_key(rel));
        }
        return Err(PackError::AssetOutsideProject {
            path: input.to_string(),
        });
    }

    let cwd = std::env::current_dir().map_err(|e| PackError::IoError {
        message: format!("Failed to get current directory: {}", e),
    })?;
    let from_cwd = normalize_path(&cwd.join(given));
    let from_root = normalize_path(&root.join(given));

    for candidate in [&from_cwd, &from_root] {
        if candidate.is_file() {
            if let Ok(rel) = candidate.strip_prefix(&root) {
                return Ok(relative_key(rel));
            }
        }
    }

    if let Ok(rel) = from_root.strip_prefix(&root) {
        return Ok(relative_key(rel));
    }
    if let Ok(rel) = from_cwd.strip_prefix(&root) {
        return Ok(relative_key(rel));
    }

    Err(PackError::AssetOutsideProject {
        path: input.to_string(),
    })
}

fn relative_key(rel: &Path) -> String {
    let key = to_forward_slashes(rel);
    if key.is_empty() { ".".to_string() } else { key }
}

/// Split a relative path into (name, extension)
///
/// The name is the file stem and the extension is lowercased without the
/// leading dot; both are empty-string safe for odd names like `.gitignore`.
pub fn split_name_extension(path: &str) -> (String, String) {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem.to_string(), ext.to_ascii_lowercase()),
        _ => (file_name.to_string(), String::new()),
    }
}
