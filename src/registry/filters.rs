//! Validity filters for scan and dependency accounting
//!
//! Pure predicates over file extensions, folder names, and user-supplied
//! ignore globs. Blacklisted folders are pruned whole during a scan; files
//! with blacklisted extensions still get records but stay out of reference
//! counting.

use std::collections::HashSet;

use wax::{CandidatePath, Glob, Pattern};

use crate::config::ProjectConfig;

/// Extensions that are never packageable: source code, compiled libraries,
/// native plugins, databases, sidecar metadata
const BLACKLISTED_EXTENSIONS: &[&str] = &[
    "cs", "js", "ts", "boo", "c", "cpp", "h", "hpp", "java", "dll", "so", "dylib", "a", "lib",
    "pdb", "mdb", "db", "sqlite", "meta",
];

/// Folder names that are engine-reserved or tool-internal; their contents
/// are never visited
const BLACKLISTED_FOLDERS: &[&str] = &[
    ".packgraph",
    ".git",
    ".svn",
    ".hg",
    "Editor",
    "Plugins",
    "Library",
    "Temp",
    "obj",
];

#[derive(Debug, Clone)]
pub struct ValidityFilters {
    extensions: HashSet<String>,
    folders: HashSet<String>,
    ignore_globs: Vec<String>,
}

impl Default for ValidityFilters {
    fn default() -> Self {
        Self {
            extensions: BLACKLISTED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            folders: BLACKLISTED_FOLDERS.iter().map(|f| f.to_string()).collect(),
            ignore_globs: Vec::new(),
        }
    }
}

impl ValidityFilters {
    /// Built-in blacklists extended with the project configuration
    pub fn from_config(config: &ProjectConfig) -> Self {
        let mut filters = Self::default();
        for extension in &config.blacklist_extensions {
            filters
                .extensions
                .insert(extension.trim_start_matches('.').to_lowercase());
        }
        for folder in &config.blacklist_folders {
            filters.folders.insert(folder.clone());
        }
        filters.ignore_globs = config.ignore.clone();
        filters
    }

    /// Whether a file with this extension can take part in packaging
    pub fn is_valid_file(&self, extension: &str) -> bool {
        !self.extensions.contains(&extension.to_lowercase())
    }

    /// Whether a folder's contents should be visited at all
    pub fn is_valid_folder(&self, name: &str) -> bool {
        !self.folders.contains(name)
    }

    /// Whether a project-relative path matches a configured ignore glob
    pub fn is_ignored(&self, path: &str) -> bool {
        let candidate = CandidatePath::from(path);
        self.ignore_globs.iter().any(|pattern| {
            if let Ok(glob) = Glob::new(pattern) {
                glob.matched(&candidate).is_some()
            } else {
                // Fallback to exact match if pattern is invalid
                pattern == path
            }
        })
    }
}
