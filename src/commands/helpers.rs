//! Command helper utilities

use std::path::PathBuf;

use crate::catalog::FsCatalog;
use crate::error::{PackError, Result};
use crate::project::Project;
use crate::registry::Registry;

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| PackError::IoError {
        message: format!("Failed to get current directory: {}", e),
    })
}

/// Resolve the project for a mutating command
///
/// An explicit `--project` directory wins; otherwise the search walks upward
/// from the current directory. With no project anywhere, one is initialized
/// in the current directory.
pub fn mutable_project(project: Option<PathBuf>) -> Result<Project> {
    let root = match project {
        Some(path) => path,
        None => {
            let cwd = current_dir()?;
            Project::find_from(&cwd).unwrap_or(cwd)
        }
    };
    Project::init_or_open(&root)
}

/// Resolve the project for a read-only command
///
/// Never initializes; a missing project is an error.
pub fn existing_project(project: Option<PathBuf>) -> Result<Project> {
    let root = match project {
        Some(path) => path,
        None => {
            let cwd = current_dir()?;
            Project::find_from(&cwd).ok_or_else(|| PackError::ProjectNotFound {
                path: cwd.display().to_string(),
            })?
        }
    };
    Project::open(&root)
}

/// Open the catalog and replay the assignment store into a fresh registry
pub fn open_session(project: &Project) -> Result<(FsCatalog, Registry)> {
    let mut catalog = project.catalog()?;
    let registry = project.session(&mut catalog)?;
    Ok((catalog, registry))
}

/// Resolve a bundle that must already exist
pub fn require_bundle(registry: &Registry, name: &str) -> Result<crate::registry::BundleId> {
    registry
        .find_bundle(name)
        .ok_or_else(|| PackError::BundleNotFound {
            name: name.to_string(),
        })
}
