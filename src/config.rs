//! Project configuration (.packgraph/config.yaml) data structures

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};

/// Optional scan and filter configuration
///
/// Everything defaults to empty; a missing config file means built-in
/// filters only.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectConfig {
    /// Glob patterns for paths to skip during scans
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Extensions treated as non-packageable in addition to the built-ins
    #[serde(default)]
    pub blacklist_extensions: Vec<String>,

    /// Folder names pruned from scans in addition to the built-ins
    #[serde(default)]
    pub blacklist_folders: Vec<String>,
}

impl ProjectConfig {
    /// Parse project configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize project configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    /// Load the configuration file, or defaults if none exists
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| PackError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_yaml(&content).map_err(|e| PackError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
