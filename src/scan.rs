//! Full project scan
//!
//! Walks the project tree, materializes asset and folder records for every
//! file that survives the filters, and reports progress while it runs. A
//! scan is blocking: it runs to completion or is not started at all.
//!
//! Blacklisted folders are pruned whole, so their contents are never
//! visited. Files with blacklisted extensions still get records, marked
//! invalid, so they can be shown in the tree without ever joining
//! reference accounting.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::catalog::FsCatalog;
use crate::error::Result;
use crate::path_norm;
use crate::project::Project;
use crate::registry::Registry;

/// Counters reported after one full scan
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Files visited after folder pruning
    pub files_seen: usize,
    /// Records created or touched, including invalid ones
    pub assets_recorded: usize,
    /// Records that failed the extension filter
    pub invalid_assets: usize,
    /// Files skipped by configured ignore globs
    pub ignored: usize,
    /// Total size of all recorded assets
    pub total_size: u64,
}

/// Walk the whole project and record every surviving file
pub fn scan_project(
    project: &Project,
    registry: &mut Registry,
    catalog: &mut FsCatalog,
    show_progress: bool,
) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    let candidates = collect_files(&project.root, registry);
    summary.files_seen = candidates.len();

    let progress = if show_progress {
        let bar = ProgressBar::new(candidates.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    for rel in candidates {
        if registry.filters().is_ignored(&rel) {
            summary.ignored += 1;
            progress.inc(1);
            continue;
        }

        progress.set_message(rel.clone());
        let asset = registry.asset_id(&*catalog, &rel)?;
        registry.record_asset_in_tree(asset);

        let record = registry.asset(asset);
        summary.assets_recorded += 1;
        summary.total_size += record.memory_size;
        if !record.is_valid {
            summary.invalid_assets += 1;
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(summary)
}

/// Collect project-relative file paths in lexical order, pruning
/// blacklisted folders whole
fn collect_files(root: &Path, registry: &Registry) -> Vec<String> {
    let filters = registry.filters().clone();
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            filters.is_valid_folder(&name)
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let rel = entry.path().strip_prefix(root).ok()?;
            Some(path_norm::to_forward_slashes(rel))
        })
        .collect()
}
