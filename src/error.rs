//! Error types and handling for packgraph
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for packgraph operations
#[derive(Error, Diagnostic, Debug)]
pub enum PackError {
    // Bundle errors
    #[error("Bundle not found: {name}")]
    #[diagnostic(
        code(packgraph::bundle::not_found),
        help("Run 'packgraph list' to see the bundles defined in this project")
    )]
    BundleNotFound { name: String },

    #[error("Bundle already exists: {name}")]
    #[diagnostic(
        code(packgraph::bundle::exists),
        help("Pick a different name or delete the existing bundle first")
    )]
    BundleExists { name: String },

    // Asset errors
    #[error("Asset not found: {path}")]
    #[diagnostic(
        code(packgraph::asset::not_found),
        help("Check that the file exists inside the project")
    )]
    AssetNotFound { path: String },

    #[error("Path is outside the project: {path}")]
    #[diagnostic(
        code(packgraph::asset::outside_project),
        help("Assets must live under the project root (the directory containing .packgraph/)")
    )]
    AssetOutsideProject { path: String },

    // Project errors
    #[error("No packgraph project found at: {path}")]
    #[diagnostic(
        code(packgraph::project::not_found),
        help("Run 'packgraph scan' to initialize a project, or pass --project <dir>")
    )]
    ProjectNotFound { path: String },

    // Catalog errors
    #[error("Catalog lookup failed for '{path}': {reason}")]
    #[diagnostic(code(packgraph::catalog::failure))]
    CatalogFailure { path: String, reason: String },

    // Configuration and store errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(packgraph::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(packgraph::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to write configuration file: {path}")]
    #[diagnostic(code(packgraph::config::write_failed))]
    ConfigWriteFailed { path: String, reason: String },

    #[error("Failed to write assignment store: {path}")]
    #[diagnostic(code(packgraph::store::write_failed))]
    StoreWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(packgraph::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PackError {
    fn from(err: std::io::Error) -> Self {
        PackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PackError {
    fn from(err: serde_yaml::Error) -> Self {
        PackError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PackError::BundleNotFound {
            name: "ui".to_string(),
        };
        assert_eq!(err.to_string(), "Bundle not found: ui");
    }

    #[test]
    fn test_error_code() {
        let err = PackError::BundleNotFound {
            name: "ui".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("packgraph::bundle::not_found".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let pack_err: PackError = io_err.into();
        assert!(matches!(pack_err, PackError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: yaml: content: [unclosed";
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str(yaml_str);
        let yaml_err = parse_result.unwrap_err();
        let pack_err: PackError = yaml_err.into();
        assert!(matches!(pack_err, PackError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_catalog_failure_error() {
        let err = PackError::CatalogFailure {
            path: "textures/logo.png".to_string(),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("textures/logo.png"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_asset_outside_project_error() {
        let err = PackError::AssetOutsideProject {
            path: "/elsewhere/logo.png".to_string(),
        };
        assert!(err.to_string().contains("outside the project"));
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("packgraph::asset::outside_project".to_string())
        );
    }

    #[test]
    fn test_project_not_found_has_help() {
        let err = PackError::ProjectNotFound {
            path: "/tmp/nowhere".to_string(),
        };
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("packgraph scan"));
    }

    #[test]
    fn test_store_write_failed_error() {
        let err = PackError::StoreWriteFailed {
            path: ".packgraph/assignments.yaml".to_string(),
            reason: "disk full".to_string(),
        };
        assert!(err.to_string().contains("assignments.yaml"));
    }
}
