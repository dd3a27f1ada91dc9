//! Folder records for the display tree
//!
//! Built lazily during scans. Purely presentational: folders carry ordered
//! children plus aggregate counts, and never participate in membership
//! bookkeeping.

use super::{AssetId, FolderId};

#[derive(Debug, Clone)]
pub struct FolderRecord {
    /// Project-relative path with forward slashes; empty for the root
    pub path: String,
    /// Last path component; empty for the root
    pub name: String,
    pub parent: Option<FolderId>,
    /// Direct subfolders in discovery order
    pub subfolders: Vec<FolderId>,
    /// Assets directly in this folder, in discovery order
    pub assets: Vec<AssetId>,
    /// Assets in this folder's whole subtree
    pub asset_count: usize,
    /// Total size of the subtree's assets
    pub total_size: u64,
}

impl FolderRecord {
    pub fn new(path: String, name: String, parent: Option<FolderId>) -> Self {
        Self {
            path,
            name,
            parent,
            subfolders: Vec::new(),
            assets: Vec::new(),
            asset_count: 0,
            total_size: 0,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
