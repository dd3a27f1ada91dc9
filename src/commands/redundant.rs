//! Redundant command implementation
//!
//! The diagnostic view behind the tool's reason to exist: assets that more
//! than one bundle pulls in indirectly, with no direct owner. Each one
//! ships duplicated in every bundle that reaches it.

use std::path::PathBuf;

use super::helpers;
use crate::display::{self, format_size};
use crate::error::Result;

/// Run redundant command
pub fn run(project: Option<PathBuf>) -> Result<()> {
    let project = helpers::existing_project(project)?;
    let (_catalog, registry) = helpers::open_session(&project)?;

    let redundant: Vec<_> = registry.redundant_assets().collect();
    if redundant.is_empty() {
        println!("No redundant assets.");
        return Ok(());
    }

    println!("Redundant assets ({}):", redundant.len());
    println!();

    let mut duplicated = 0u64;
    for (_, asset) in &redundant {
        let copies = asset.indirect_count.len() as u64;
        duplicated += (copies - 1) * asset.memory_size;

        println!(
            "  {} ({})",
            display::label_style().apply_to(&asset.path),
            format_size(asset.memory_size)
        );
        for (bundle_id, bundle) in registry.bundles() {
            if let Some(count) = asset.indirect_count.get(&bundle_id) {
                println!(
                    "    pulled into {} by {} direct member(s)",
                    display::bundle_style().apply_to(&bundle.name),
                    count
                );
            }
        }
        println!();
    }

    println!(
        "{} {} would stop shipping twice if these moved to a shared bundle",
        display::label_style().apply_to("Duplicated size:"),
        format_size(duplicated)
    );

    Ok(())
}
