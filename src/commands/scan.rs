//! Scan command implementation
//!
//! Initializes the project on first use, replays stored assignments, then
//! walks the whole tree and reports totals.

use std::path::PathBuf;

use super::helpers;
use crate::display::{self, format_size};
use crate::error::Result;
use crate::scan::scan_project;

/// Run scan command
pub fn run(project: Option<PathBuf>) -> Result<()> {
    let project = helpers::mutable_project(project)?;
    let (mut catalog, mut registry) = helpers::open_session(&project)?;

    let summary = scan_project(&project, &mut registry, &mut catalog, true)?;

    let label = display::label_style();
    println!(
        "Scanned {} files: {} assets ({} invalid), {} ignored",
        summary.files_seen, summary.assets_recorded, summary.invalid_assets, summary.ignored
    );
    println!(
        "{} {}",
        label.apply_to("Total size:"),
        format_size(summary.total_size)
    );

    let assigned: usize = registry.bundles().map(|(_, b)| b.member_count()).sum();
    println!(
        "{} {} ({} assets assigned)",
        label.apply_to("Bundles:"),
        registry.bundle_count(),
        assigned
    );

    let redundant = registry.redundant_assets().count();
    if redundant > 0 {
        println!(
            "{} {} (run 'packgraph redundant' for details)",
            display::warn_style().apply_to("Redundant assets:"),
            redundant
        );
    }

    Ok(())
}
