//! Clear command implementation

use std::path::PathBuf;

use super::helpers;
use crate::cli::ClearArgs;
use crate::display;
use crate::error::Result;

/// Run clear command
pub fn run(project: Option<PathBuf>, args: ClearArgs) -> Result<()> {
    let project = helpers::mutable_project(project)?;
    let (mut catalog, mut registry) = helpers::open_session(&project)?;

    let bundle = helpers::require_bundle(&registry, &args.bundle)?;
    let removed = registry.bundle(bundle).member_count();
    registry.clear_bundle(bundle, &mut catalog)?;

    println!(
        "Cleared {} ({} asset(s) removed)",
        display::bundle_style().apply_to(&args.bundle),
        removed
    );

    Ok(())
}
