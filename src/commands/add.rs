//! Add command implementation

use std::path::PathBuf;

use super::helpers;
use crate::cli::AddArgs;
use crate::display::{self, format_size};
use crate::error::{PackError, Result};
use crate::path_norm;

/// Run add command
pub fn run(project: Option<PathBuf>, args: AddArgs) -> Result<()> {
    let project = helpers::mutable_project(project)?;
    let (mut catalog, mut registry) = helpers::open_session(&project)?;

    let bundle = registry.bundle_id(&args.bundle);
    for input in &args.paths {
        let rel = path_norm::project_relative(&project.root, input)?;
        if !project.root.join(&rel).is_file() {
            return Err(PackError::AssetNotFound { path: rel });
        }

        let asset = registry.asset_id(&catalog, &rel)?;
        registry.add_asset(bundle, asset, &mut catalog)?;
        println!(
            "Added {} to {}",
            rel,
            display::bundle_style().apply_to(&args.bundle)
        );
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
