//! Per-asset membership record
//!
//! One record exists per distinct asset path, created on first touch and kept
//! until the registry is reset. All membership bookkeeping lives here: the
//! single direct owner, per-bundle indirect reference counts, and the causal
//! map that lets a removal reverse exactly the edges its addition created.

use std::collections::HashMap;

use super::{AssetId, BundleId};
use crate::catalog::AssetType;

#[derive(Debug, Clone)]
pub struct AssetRecord {
    /// Project-relative path with forward slashes
    pub path: String,
    pub name: String,
    pub extension: String,
    pub asset_type: AssetType,
    /// Packageable per the extension filter; invalid assets never take part
    /// in reference counting
    pub is_valid: bool,
    /// The one bundle this asset is explicitly assigned to
    pub direct_bundle: Option<BundleId>,
    /// How many of each bundle's direct members depend on this asset.
    /// An entry exists iff its count is nonzero.
    pub indirect_count: HashMap<BundleId, u32>,
    /// Which bundle each causing member pulled this asset in through.
    /// At most one bundle per member; re-adding overwrites.
    pub indirect_cause: HashMap<AssetId, BundleId>,
    /// Transitive dependency closure, fetched once on first use
    pub dependencies: Option<Vec<AssetId>>,
    pub is_redundant: bool,
    /// Size on disk, read once from the catalog
    pub memory_size: u64,
}

impl AssetRecord {
    pub fn new(
        path: String,
        name: String,
        extension: String,
        asset_type: AssetType,
        is_valid: bool,
        memory_size: u64,
    ) -> Self {
        Self {
            path,
            name,
            extension,
            asset_type,
            is_valid,
            direct_bundle: None,
            indirect_count: HashMap::new(),
            indirect_cause: HashMap::new(),
            dependencies: None,
            is_redundant: false,
            memory_size,
        }
    }

    /// Recompute `is_redundant` from the current membership state
    ///
    /// Called after every mutation of `direct_bundle` or `indirect_count` so
    /// the flag is always fresh for display, never computed lazily.
    pub fn update_redundant_state(&mut self) {
        self.is_redundant = self.direct_bundle.is_none() && self.indirect_count.len() > 1;
    }

    /// Whether the dependency closure has been fetched yet
    pub fn dependencies_read(&self) -> bool {
        self.dependencies.is_some()
    }

    /// Distinct bundles that reach this asset indirectly
    pub fn indirect_bundles(&self) -> impl Iterator<Item = (BundleId, u32)> + '_ {
        self.indirect_count.iter().map(|(&b, &c)| (b, c))
    }
}
