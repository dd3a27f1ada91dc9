//! Remove command implementation

use std::path::PathBuf;

use super::helpers;
use crate::catalog::AssetCatalog;
use crate::cli::RemoveArgs;
use crate::display::{self, format_size};
use crate::error::Result;
use crate::path_norm;

/// Run remove command
pub fn run(project: Option<PathBuf>, args: RemoveArgs) -> Result<()> {
    let project = helpers::mutable_project(project)?;
    let (mut catalog, mut registry) = helpers::open_session(&project)?;

    let bundle = helpers::require_bundle(&registry, &args.bundle)?;
    for input in &args.paths {
        let rel = path_norm::project_relative(&project.root, input)?;
        match registry.find_asset(&rel) {
            Some(asset) => {
                registry.remove_asset(bundle, asset, &mut catalog)?;
                println!(
                    "Removed {} from {}",
                    rel,
                    display::bundle_style().apply_to(&args.bundle)
                );
            }
            None => {
                // No live record, e.g. the file vanished since assignment.
                // Clearing the tag heals the stored entry.
                catalog.untag_asset(&rel)?;
                println!(
                    "{} {} has no live record; cleared its stored assignment",
                    display::warn_style().apply_to("note:"),
                    rel
                );
            }
        }
    }

    let record = registry.bundle(bundle);
    println!(
        "{} now holds {} asset(s), {}",
        display::bundle_style().apply_to(&record.name),
        record.member_count(),
        format_size(record.memory_size)
    );

    Ok(())
}
