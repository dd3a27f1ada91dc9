//! In-memory membership registry
//!
//! The registry owns every asset, bundle, and folder record for one session
//! and interns them behind copyable ids. Records are created on first touch
//! through the memoized factories and live until [`Registry::reset`]; bundle
//! deletion only unlinks the record, ids are never reused.
//!
//! Nothing here persists. The registry is rebuilt from the catalog's
//! assignment store at the start of every invocation.

pub mod asset;
pub mod bundle;
pub mod filters;
pub mod folder;

use std::collections::HashMap;

pub use asset::AssetRecord;
pub use bundle::BundleRecord;
pub use filters::ValidityFilters;
pub use folder::FolderRecord;

use crate::catalog::AssetCatalog;
use crate::error::Result;
use crate::path_norm;

/// Interned handle to an [`AssetRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(u32);

/// Interned handle to a [`BundleRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BundleId(u32);

/// Interned handle to a [`FolderRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FolderId(u32);

impl AssetId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl BundleId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl FolderId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    assets: Vec<AssetRecord>,
    bundles: Vec<BundleRecord>,
    folders: Vec<FolderRecord>,
    asset_ids: HashMap<String, AssetId>,
    bundle_ids: HashMap<String, BundleId>,
    folder_ids: HashMap<String, FolderId>,
    /// Bundles in creation order; deletion removes from here but leaves the
    /// record slot in place
    bundle_order: Vec<BundleId>,
    filters: ValidityFilters,
}

impl Registry {
    pub fn new(filters: ValidityFilters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &ValidityFilters {
        &self.filters
    }

    /// Resolve or create the record for an asset path
    ///
    /// First touch reads type and size from the catalog and computes validity
    /// from the extension filter; later touches return the cached id.
    pub fn asset_id(&mut self, catalog: &dyn AssetCatalog, path: &str) -> Result<AssetId> {
        if let Some(&id) = self.asset_ids.get(path) {
            return Ok(id);
        }

        let (name, extension) = path_norm::split_name_extension(path);
        let asset_type = catalog.resolve_type(path);
        let memory_size = catalog.size_on_disk(path)?;
        let is_valid = self.filters.is_valid_file(&extension);

        let id = AssetId(self.assets.len() as u32);
        self.assets.push(AssetRecord::new(
            path.to_string(),
            name,
            extension,
            asset_type,
            is_valid,
            memory_size,
        ));
        self.asset_ids.insert(path.to_string(), id);
        Ok(id)
    }

    /// Resolve or create a bundle record by name
    pub fn bundle_id(&mut self, name: &str) -> BundleId {
        if let Some(&id) = self.bundle_ids.get(name) {
            return id;
        }

        let id = BundleId(self.bundles.len() as u32);
        self.bundles.push(BundleRecord::new(name.to_string()));
        self.bundle_ids.insert(name.to_string(), id);
        self.bundle_order.push(id);
        id
    }

    /// Resolve or create a folder record, creating missing parents
    ///
    /// The empty path is the project root.
    pub fn folder_id(&mut self, path: &str) -> FolderId {
        if let Some(&id) = self.folder_ids.get(path) {
            return id;
        }

        let (parent, name) = match path.rsplit_once('/') {
            Some((parent_path, name)) => (Some(self.folder_id(parent_path)), name.to_string()),
            None if path.is_empty() => (None, String::new()),
            None => (Some(self.folder_id("")), path.to_string()),
        };

        let id = FolderId(self.folders.len() as u32);
        self.folders
            .push(FolderRecord::new(path.to_string(), name, parent));
        self.folder_ids.insert(path.to_string(), id);
        if let Some(parent_id) = parent {
            self.folder_mut(parent_id).subfolders.push(id);
        }
        id
    }

    pub fn find_asset(&self, path: &str) -> Option<AssetId> {
        self.asset_ids.get(path).copied()
    }

    pub fn find_bundle(&self, name: &str) -> Option<BundleId> {
        self.bundle_ids.get(name).copied()
    }

    pub fn contains_asset(&self, path: &str) -> bool {
        self.asset_ids.contains_key(path)
    }

    pub fn contains_bundle(&self, name: &str) -> bool {
        self.bundle_ids.contains_key(name)
    }

    pub fn asset(&self, id: AssetId) -> &AssetRecord {
        &self.assets[id.index()]
    }

    pub fn asset_mut(&mut self, id: AssetId) -> &mut AssetRecord {
        &mut self.assets[id.index()]
    }

    pub fn bundle(&self, id: BundleId) -> &BundleRecord {
        &self.bundles[id.index()]
    }

    pub fn bundle_mut(&mut self, id: BundleId) -> &mut BundleRecord {
        &mut self.bundles[id.index()]
    }

    pub fn folder(&self, id: FolderId) -> &FolderRecord {
        &self.folders[id.index()]
    }

    pub fn folder_mut(&mut self, id: FolderId) -> &mut FolderRecord {
        &mut self.folders[id.index()]
    }

    /// Live bundles in creation order
    pub fn bundles(&self) -> impl Iterator<Item = (BundleId, &BundleRecord)> + '_ {
        self.bundle_order.iter().map(move |&id| (id, self.bundle(id)))
    }

    /// Every interned asset, in first-touch order
    pub fn assets(&self) -> impl Iterator<Item = (AssetId, &AssetRecord)> + '_ {
        self.assets
            .iter()
            .enumerate()
            .map(|(i, record)| (AssetId(i as u32), record))
    }

    /// Assets currently flagged as extraction candidates
    pub fn redundant_assets(&self) -> impl Iterator<Item = (AssetId, &AssetRecord)> + '_ {
        self.assets().filter(|(_, record)| record.is_redundant)
    }

    pub fn bundle_count(&self) -> usize {
        self.bundle_order.len()
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    pub fn root_folder(&self) -> Option<FolderId> {
        self.folder_ids.get("").copied()
    }

    /// Fetch and intern an asset's transitive dependency closure
    ///
    /// Idempotent: the closure is read from the catalog once and cached on
    /// the record. Self-references are dropped.
    pub fn mark_dependencies_read(
        &mut self,
        catalog: &mut dyn AssetCatalog,
        asset: AssetId,
    ) -> Result<()> {
        if self.asset(asset).dependencies_read() {
            return Ok(());
        }

        let path = self.asset(asset).path.clone();
        let dep_paths = catalog.transitive_dependencies(&path)?;

        let mut dependencies = Vec::with_capacity(dep_paths.len());
        for dep_path in dep_paths {
            if dep_path == path {
                continue;
            }
            let dep = self.asset_id(&*catalog, &dep_path)?;
            if dep != asset {
                dependencies.push(dep);
            }
        }

        self.asset_mut(asset).dependencies = Some(dependencies);
        Ok(())
    }

    /// Register a scanned asset in the folder tree
    pub fn record_asset_in_tree(&mut self, asset: AssetId) {
        let (path, size) = {
            let record = self.asset(asset);
            (record.path.clone(), record.memory_size)
        };
        let folder_path = match path.rsplit_once('/') {
            Some((dir, _)) => dir.to_string(),
            None => String::new(),
        };

        let folder = self.folder_id(&folder_path);
        self.folder_mut(folder).assets.push(asset);

        // Aggregates roll up the whole ancestor chain.
        let mut current = Some(folder);
        while let Some(id) = current {
            let record = self.folder_mut(id);
            record.asset_count += 1;
            record.total_size += size;
            current = record.parent;
        }
    }

    /// Empty a bundle, unlink it, and release its catalog namespace
    ///
    /// The record slot stays behind so outstanding ids stay valid; the name
    /// becomes free for a future `bundle_id` call, which mints a fresh id.
    pub fn delete_bundle(&mut self, bundle: BundleId, catalog: &mut dyn AssetCatalog) -> Result<()> {
        self.clear_bundle(bundle, catalog)?;
        let name = self.bundle(bundle).name.clone();
        self.bundle_ids.remove(&name);
        self.bundle_order.retain(|&b| b != bundle);
        catalog.release_bundle_namespace(&name)
    }

    /// Full session reset: every record, id, and ordering is dropped
    pub fn reset(&mut self) {
        self.assets.clear();
        self.bundles.clear();
        self.folders.clear();
        self.asset_ids.clear();
        self.bundle_ids.clear();
        self.folder_ids.clear();
        self.bundle_order.clear();
    }
}
