//! Rename command implementation

use std::path::PathBuf;

use super::helpers;
use crate::cli::RenameArgs;
use crate::display;
use crate::error::Result;

/// Run rename command
pub fn run(project: Option<PathBuf>, args: RenameArgs) -> Result<()> {
    let project = helpers::mutable_project(project)?;
    let (mut catalog, mut registry) = helpers::open_session(&project)?;

    let bundle = helpers::require_bundle(&registry, &args.old)?;
    registry.rename_bundle(bundle, &args.new, &mut catalog)?;

    println!(
        "Renamed {} to {}",
        display::bundle_style().apply_to(&args.old),
        display::bundle_style().apply_to(&args.new)
    );

    Ok(())
}
