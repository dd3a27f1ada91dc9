//! In-memory catalog for unit tests
//!
//! Seeds sizes and dependency closures directly and records every tag call,
//! so tests can assert the unconditional-tag behavior of the membership
//! algorithms without touching the filesystem.

use std::collections::{HashMap, HashSet};

use super::{AssetCatalog, AssetType, BundleAssignment};
use crate::error::{PackError, Result};
use crate::path_norm;

/// Test double for [`AssetCatalog`]
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    sizes: HashMap<String, u64>,
    deps: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    store: Vec<BundleAssignment>,
    /// Every `tag_asset` call in order, as `(path, bundle)`
    pub tag_calls: Vec<(String, String)>,
    /// Every `untag_asset` call in order
    pub untag_calls: Vec<String>,
    /// Every `rename_bundle_namespace` call in order, as `(old, new)`
    pub renamed: Vec<(String, String)>,
    /// Every `release_bundle_namespace` call in order
    pub released: Vec<String>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an asset with a size on disk
    pub fn with_asset(mut self, path: &str, size: u64) -> Self {
        self.sizes.insert(path.to_string(), size);
        self
    }

    /// Seed an asset's transitive dependency closure
    pub fn with_deps(mut self, path: &str, deps: &[&str]) -> Self {
        self.deps
            .insert(path.to_string(), deps.iter().map(|d| d.to_string()).collect());
        self
    }

    /// Make dependency lookups for `path` fail
    pub fn fail_dependencies(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    /// Current tag for a path, if any
    pub fn tag_of(&self, path: &str) -> Option<&str> {
        self.store
            .iter()
            .find(|a| a.assets.iter().any(|p| p == path))
            .map(|a| a.bundle.as_str())
    }

    fn drop_path(&mut self, path: &str) {
        for assignment in &mut self.store {
            assignment.assets.retain(|p| p != path);
        }
    }
}

impl AssetCatalog for MemoryCatalog {
    fn resolve_type(&self, path: &str) -> AssetType {
        let (_, extension) = path_norm::split_name_extension(path);
        AssetType::from_extension(&extension)
    }

    fn stable_id(&self, path: &str) -> String {
        format!("mem:{}", path)
    }

    fn size_on_disk(&self, path: &str) -> Result<u64> {
        Ok(self.sizes.get(path).copied().unwrap_or(0))
    }

    fn transitive_dependencies(&mut self, path: &str) -> Result<Vec<String>> {
        if self.failing.contains(path) {
            return Err(PackError::CatalogFailure {
                path: path.to_string(),
                reason: "dependency lookup failed".to_string(),
            });
        }
        Ok(self.deps.get(path).cloned().unwrap_or_default())
    }

    fn tag_asset(&mut self, path: &str, bundle: &str) -> Result<()> {
        self.tag_calls
            .push((path.to_string(), bundle.to_string()));
        let already_stored = self
            .store
            .iter()
            .any(|a| a.bundle == bundle && a.assets.iter().any(|p| p == path));
        if already_stored {
            return Ok(());
        }
        self.drop_path(path);
        if let Some(assignment) = self.store.iter_mut().find(|a| a.bundle == bundle) {
            assignment.assets.push(path.to_string());
        } else {
            self.store.push(BundleAssignment {
                bundle: bundle.to_string(),
                assets: vec![path.to_string()],
            });
        }
        Ok(())
    }

    fn untag_asset(&mut self, path: &str) -> Result<()> {
        self.untag_calls.push(path.to_string());
        self.drop_path(path);
        Ok(())
    }

    fn rename_bundle_namespace(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        self.renamed
            .push((old_name.to_string(), new_name.to_string()));
        if let Some(assignment) = self.store.iter_mut().find(|a| a.bundle == old_name) {
            assignment.bundle = new_name.to_string();
        }
        Ok(())
    }

    fn release_bundle_namespace(&mut self, name: &str) -> Result<()> {
        self.released.push(name.to_string());
        self.store.retain(|a| a.bundle != name);
        Ok(())
    }

    fn assignments(&self) -> Result<Vec<BundleAssignment>> {
        Ok(self.store.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_moves_between_bundles() {
        let mut catalog = MemoryCatalog::new();
        catalog.tag_asset("a.png", "ui").unwrap();
        catalog.tag_asset("a.png", "game").unwrap();

        assert_eq!(catalog.tag_of("a.png"), Some("game"));
        let assignments = catalog.assignments().unwrap();
        let ui = assignments.iter().find(|a| a.bundle == "ui").unwrap();
        assert!(ui.assets.is_empty());
    }

    #[test]
    fn test_redundant_tag_keeps_stored_order() {
        let mut catalog = MemoryCatalog::new();
        catalog.tag_asset("a.png", "ui").unwrap();
        catalog.tag_asset("b.png", "ui").unwrap();
        catalog.tag_asset("a.png", "ui").unwrap();

        let assignments = catalog.assignments().unwrap();
        assert_eq!(assignments[0].assets, vec!["a.png", "b.png"]);
        // The call log still sees every invocation.
        assert_eq!(catalog.tag_calls.len(), 3);
    }

    #[test]
    fn test_rename_rekeys_the_entry() {
        let mut catalog = MemoryCatalog::new();
        catalog.tag_asset("a.png", "first").unwrap();
        catalog.tag_asset("b.png", "second").unwrap();
        catalog.rename_bundle_namespace("first", "renamed").unwrap();

        assert_eq!(catalog.tag_of("a.png"), Some("renamed"));
        let assignments = catalog.assignments().unwrap();
        assert_eq!(assignments[0].bundle, "renamed");
        assert_eq!(assignments[1].bundle, "second");
        assert_eq!(
            catalog.renamed,
            vec![("first".to_string(), "renamed".to_string())]
        );
    }

    #[test]
    fn test_untag_clears_tag() {
        let mut catalog = MemoryCatalog::new();
        catalog.tag_asset("a.png", "ui").unwrap();
        catalog.untag_asset("a.png").unwrap();

        assert_eq!(catalog.tag_of("a.png"), None);
        assert_eq!(catalog.untag_calls, vec!["a.png".to_string()]);
    }

    #[test]
    fn test_release_drops_bundle_entry() {
        let mut catalog = MemoryCatalog::new();
        catalog.tag_asset("a.png", "ui").unwrap();
        catalog.release_bundle_namespace("ui").unwrap();

        assert!(catalog.assignments().unwrap().is_empty());
        assert_eq!(catalog.released, vec!["ui".to_string()]);
    }

    #[test]
    fn test_failing_dependency_lookup() {
        let mut catalog = MemoryCatalog::new().fail_dependencies("broken.scene");
        let result = catalog.transitive_dependencies("broken.scene");
        assert!(matches!(result, Err(PackError::CatalogFailure { .. })));
    }

    #[test]
    fn test_resolve_type_from_extension() {
        let catalog = MemoryCatalog::new();
        assert_eq!(catalog.resolve_type("a/b.png"), AssetType::Texture);
        assert_eq!(catalog.resolve_type("noext"), AssetType::Other);
    }
}
