//! Project management for packgraph
//!
//! This module handles:
//! - Project detection and initialization
//! - Session assembly: rebuilding the registry from the assignment store
//!
//! ## Project Structure
//!
//! ```text
//! .packgraph/
//! ├── config.yaml       # Optional scan/filter configuration
//! └── assignments.yaml  # Authoritative asset-to-bundle tags
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{AssetCatalog, FsCatalog};
use crate::config::ProjectConfig;
use crate::display;
use crate::error::{PackError, Result};
use crate::registry::{Registry, ValidityFilters};

/// Packgraph project directory name
pub const PROJECT_DIR: &str = ".packgraph";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.yaml";

/// Assignment store filename
pub const ASSIGNMENTS_FILE: &str = "assignments.yaml";

/// Represents a packgraph project
#[derive(Debug)]
pub struct Project {
    /// Root directory of the project (where .packgraph is located)
    pub root: PathBuf,

    /// Path to the .packgraph directory
    pub packgraph_dir: PathBuf,

    /// Scan and filter configuration (config.yaml)
    pub config: ProjectConfig,
}

impl Project {
    /// Detect if a project exists at the given path
    pub fn exists(root: &Path) -> bool {
        root.join(PROJECT_DIR).is_dir()
    }

    /// Find a project by searching upward from the given path
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if Self::exists(&current) {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Open an existing project
    pub fn open(root: &Path) -> Result<Self> {
        let packgraph_dir = root.join(PROJECT_DIR);

        if !packgraph_dir.is_dir() {
            return Err(PackError::ProjectNotFound {
                path: root.display().to_string(),
            });
        }

        let config = ProjectConfig::load(&packgraph_dir.join(CONFIG_FILE))?;

        Ok(Self {
            root: root.to_path_buf(),
            packgraph_dir,
            config,
        })
    }

    /// Initialize a new project at the given path
    ///
    /// Creates the .packgraph directory with a default configuration file.
    /// The assignment store appears on the first assignment.
    pub fn init(root: &Path) -> Result<Self> {
        let packgraph_dir = root.join(PROJECT_DIR);
        fs::create_dir_all(&packgraph_dir)?;

        let config = ProjectConfig::default();
        let config_path = packgraph_dir.join(CONFIG_FILE);
        fs::write(&config_path, config.to_yaml()?).map_err(|e| PackError::ConfigWriteFailed {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            root: root.to_path_buf(),
            packgraph_dir,
            config,
        })
    }

    /// Initialize a project if it doesn't exist, or open it if it does
    pub fn init_or_open(root: &Path) -> Result<Self> {
        if Self::exists(root) {
            Self::open(root)
        } else {
            Self::init(root)
        }
    }

    /// Open the filesystem catalog rooted at this project
    pub fn catalog(&self) -> Result<FsCatalog> {
        FsCatalog::open(&self.root)
    }

    /// Build a fresh registry and replay the assignment store into it
    ///
    /// Assignments are replayed in stored order, so bundle creation order
    /// and member order survive across invocations. Replay itself never
    /// writes the store back. Assigned paths that no longer exist on disk
    /// are skipped with a warning; an explicit `remove` heals their store
    /// entries.
    pub fn session(&self, catalog: &mut FsCatalog) -> Result<Registry> {
        let mut registry = Registry::new(ValidityFilters::from_config(&self.config));

        for assignment in catalog.assignments()? {
            let bundle = registry.bundle_id(&assignment.bundle);
            for path in assignment.assets {
                if !self.root.join(&path).is_file() {
                    eprintln!(
                        "{} assigned asset missing on disk, skipping: {}",
                        display::warn_style().apply_to("warning:"),
                        path
                    );
                    continue;
                }
                let asset = registry.asset_id(&*catalog, &path)?;
                registry.add_asset(bundle, asset, catalog)?;
            }
        }

        Ok(registry)
    }
}
