//! List command implementation
//!
//! Lists every bundle in creation order with member counts and sizes.

use std::path::PathBuf;

use super::helpers;
use crate::display::{self, format_size};
use crate::error::Result;

/// Run list command
pub fn run(project: Option<PathBuf>) -> Result<()> {
    let project = helpers::existing_project(project)?;
    let (_catalog, registry) = helpers::open_session(&project)?;

    if registry.bundle_count() == 0 {
        println!("No bundles defined.");
        return Ok(());
    }

    println!("Bundles ({}):", registry.bundle_count());
    println!();

    let label = display::label_style();
    for (_, bundle) in registry.bundles() {
        println!("  {}", display::bundle_style().apply_to(&bundle.name));
        println!(
            "    {} {}",
            label.apply_to("Members:"),
            bundle.member_count()
        );
        println!(
            "    {} {}",
            label.apply_to("Size:"),
            format_size(bundle.memory_size)
        );
        println!();
    }

    Ok(())
}
