//! Delete command implementation

use std::path::PathBuf;

use inquire::Confirm;

use super::helpers;
use crate::cli::DeleteArgs;
use crate::display;
use crate::error::{PackError, Result};

/// Run delete command
pub fn run(project: Option<PathBuf>, args: DeleteArgs) -> Result<()> {
    let project = helpers::mutable_project(project)?;
    let (mut catalog, mut registry) = helpers::open_session(&project)?;

    let bundle = helpers::require_bundle(&registry, &args.bundle)?;
    let members = registry.bundle(bundle).member_count();

    if !args.yes {
        println!(
            "Bundle {} holds {} asset(s); they become unassigned.",
            display::bundle_style().apply_to(&args.bundle),
            members
        );
        let confirmed = Confirm::new("Proceed with delete?")
            .with_default(true)
            .with_help_message("Press Enter to confirm, or 'n' to cancel")
            .prompt()
            .map_err(|e| PackError::IoError {
                message: format!("Failed to read confirmation: {e}"),
            })?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    registry.delete_bundle(bundle, &mut catalog)?;
    println!(
        "Deleted {} ({} asset(s) released)",
        display::bundle_style().apply_to(&args.bundle),
        members
    );

    Ok(())
}
