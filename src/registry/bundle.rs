//! Bundle records and the membership algorithms
//!
//! The mutation entry points live on [`Registry`] because every operation
//! touches one bundle record plus many asset records at once. Each operation
//! runs to completion before the next begins; there is no re-entrancy.
//!
//! The bookkeeping rules:
//! - a direct add always charges the asset's own size to the bundle;
//! - a dependency's size is charged once per bundle, on the first indirect
//!   reference, and refunded when the last one goes away;
//! - the causal map records which member pulled a dependency in, so a
//!   removal reverses exactly the edges its addition created;
//! - catalog tag calls happen outside the guards, so the external tag
//!   never drifts from repeated or stale calls.

use super::{AssetId, BundleId, Registry};
use crate::catalog::AssetCatalog;
use crate::error::{PackError, Result};

#[derive(Debug, Clone)]
pub struct BundleRecord {
    pub name: String,
    /// Direct members in insertion order, until a sort toggle reorders them
    pub members: Vec<AssetId>,
    /// Direct members' sizes plus each indirectly reached asset counted once
    pub memory_size: u64,
    /// Display-only sort direction for `members`
    pub sort_descending: bool,
}

impl BundleRecord {
    pub fn new(name: String) -> Self {
        Self {
            name,
            members: Vec::new(),
            memory_size: 0,
            sort_descending: false,
        }
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Registry {
    /// Assign an asset directly to a bundle
    ///
    /// An asset already owned by a different bundle is removed from that
    /// owner first, so a member list never holds an asset whose record
    /// points elsewhere. Re-adding to the current owner leaves the
    /// bookkeeping untouched. The catalog tag is refreshed in every case.
    pub fn add_asset(
        &mut self,
        bundle: BundleId,
        asset: AssetId,
        catalog: &mut dyn AssetCatalog,
    ) -> Result<()> {
        if self.asset(asset).direct_bundle != Some(bundle) {
            // Read the closure before any counts change; a failing lookup
            // aborts the add with the bookkeeping untouched.
            self.mark_dependencies_read(catalog, asset)?;

            if let Some(previous) = self.asset(asset).direct_bundle {
                self.remove_asset(previous, asset, catalog)?;
            }

            self.asset_mut(asset).direct_bundle = Some(bundle);
            let own_size = self.asset(asset).memory_size;
            self.bundle_mut(bundle).memory_size += own_size;

            self.asset_mut(asset).update_redundant_state();
            self.bundle_mut(bundle).members.push(asset);

            let dependencies = self.asset(asset).dependencies.clone().unwrap_or_default();
            for dep in dependencies {
                if !self.asset(dep).is_valid {
                    continue;
                }
                // First reference from this bundle charges the size once.
                if !self.asset(dep).indirect_count.contains_key(&bundle) {
                    let dep_size = self.asset(dep).memory_size;
                    self.bundle_mut(bundle).memory_size += dep_size;
                }
                *self
                    .asset_mut(dep)
                    .indirect_count
                    .entry(bundle)
                    .or_insert(0) += 1;
                self.asset_mut(dep).indirect_cause.insert(asset, bundle);
                self.asset_mut(dep).update_redundant_state();
            }
        }

        let path = self.asset(asset).path.clone();
        let name = self.bundle(bundle).name.clone();
        catalog.tag_asset(&path, &name)
    }

    /// Remove an asset's direct assignment from a bundle
    ///
    /// Bookkeeping only changes when `bundle` is the asset's current owner;
    /// a stale call from a non-owner is a no-op for the counts. The catalog
    /// tag is cleared either way.
    pub fn remove_asset(
        &mut self,
        bundle: BundleId,
        asset: AssetId,
        catalog: &mut dyn AssetCatalog,
    ) -> Result<()> {
        if self.asset(asset).direct_bundle == Some(bundle) {
            self.asset_mut(asset).direct_bundle = None;
            let own_size = self.asset(asset).memory_size;
            self.bundle_mut(bundle).memory_size -= own_size;
            self.bundle_mut(bundle).members.retain(|&m| m != asset);
            self.asset_mut(asset).update_redundant_state();

            let dependencies = self.asset(asset).dependencies.clone().unwrap_or_default();
            for dep in dependencies {
                // Only edges this member caused are reversed.
                if self.asset_mut(dep).indirect_cause.remove(&asset).is_none() {
                    continue;
                }
                if let Some(count) = self.asset(dep).indirect_count.get(&bundle).copied() {
                    if count <= 1 {
                        self.asset_mut(dep).indirect_count.remove(&bundle);
                        let dep_size = self.asset(dep).memory_size;
                        self.bundle_mut(bundle).memory_size -= dep_size;
                    } else {
                        self.asset_mut(dep).indirect_count.insert(bundle, count - 1);
                    }
                }
                self.asset_mut(dep).update_redundant_state();
            }
        }

        let path = self.asset(asset).path.clone();
        catalog.untag_asset(&path)
    }

    /// Remove every member of a bundle
    ///
    /// Always removes the current first member rather than iterating a
    /// snapshot; each removal mutates the list.
    pub fn clear_bundle(&mut self, bundle: BundleId, catalog: &mut dyn AssetCatalog) -> Result<()> {
        while let Some(&first) = self.bundle(bundle).members.first() {
            self.remove_asset(bundle, first, catalog)?;
        }
        Ok(())
    }

    /// Rename a bundle under the same id
    ///
    /// Indirect counts and causes are keyed by bundle id, so they survive
    /// the rename untouched. The catalog re-keys the stored entry where it
    /// sits, keeping bundle order and member order for the next session;
    /// the name map flips only after that write lands.
    pub fn rename_bundle(
        &mut self,
        bundle: BundleId,
        new_name: &str,
        catalog: &mut dyn AssetCatalog,
    ) -> Result<()> {
        let old_name = self.bundle(bundle).name.clone();
        if old_name == new_name {
            return Ok(());
        }
        if self.contains_bundle(new_name) {
            return Err(PackError::BundleExists {
                name: new_name.to_string(),
            });
        }

        catalog.rename_bundle_namespace(&old_name, new_name)?;
        self.bundle_ids.remove(&old_name);
        self.bundle_ids.insert(new_name.to_string(), bundle);
        self.bundle_mut(bundle).name = new_name.to_string();
        Ok(())
    }

    /// Flip the display sort direction and reorder members by size
    ///
    /// Counts and memory never change here.
    pub fn toggle_sort(&mut self, bundle: BundleId) {
        let descending = !self.bundle(bundle).sort_descending;
        self.bundle_mut(bundle).sort_descending = descending;

        let mut members = std::mem::take(&mut self.bundle_mut(bundle).members);
        members.sort_by_key(|&m| self.asset(m).memory_size);
        if descending {
            members.reverse();
        }
        self.bundle_mut(bundle).members = members;
    }
}
