//! Show command implementation
//!
//! Displays one bundle's direct members, and the assets it only reaches
//! through dependencies. The bundle's size counts those indirect assets
//! once each.

use std::path::PathBuf;

use super::helpers;
use crate::catalog::AssetCatalog;
use crate::cli::{ShowArgs, SortField};
use crate::display::{self, format_size};
use crate::error::Result;

/// Run show command
pub fn run(project: Option<PathBuf>, verbose: bool, args: ShowArgs) -> Result<()> {
    let project = helpers::existing_project(project)?;
    let (catalog, mut registry) = helpers::open_session(&project)?;

    let bundle = helpers::require_bundle(&registry, &args.bundle)?;
    if args.toggle_sort {
        registry.toggle_sort(bundle);
    }

    let record = registry.bundle(bundle);
    println!(
        "{} ({} asset(s), {})",
        display::bundle_style().apply_to(&record.name),
        record.member_count(),
        format_size(record.memory_size)
    );

    let mut members = record.members.clone();
    // A toggle above has already ordered the members by size.
    if args.sort == Some(SortField::Size) && !args.toggle_sort {
        members.sort_by_key(|&m| registry.asset(m).memory_size);
    }

    for member in members {
        let asset = registry.asset(member);
        println!(
            "  {:>10}  {:<8}  {}",
            format_size(asset.memory_size),
            asset.asset_type.label(),
            asset.path
        );
        if verbose {
            println!(
                "              {}",
                display::dim_style().apply_to(catalog.stable_id(&asset.path))
            );
        }
    }

    let indirect: Vec<_> = registry
        .assets()
        .filter(|(_, asset)| {
            asset.indirect_count.contains_key(&bundle) && asset.direct_bundle != Some(bundle)
        })
        .collect();

    if !indirect.is_empty() {
        println!();
        println!(
            "{}",
            display::label_style().apply_to("Pulled in by dependencies:")
        );
        for (_, asset) in indirect {
            let referrers = asset.indirect_count.get(&bundle).copied().unwrap_or(0);
            println!(
                "  {:>10}  {}  {}",
                format_size(asset.memory_size),
                asset.path,
                display::dim_style()
                    .apply_to(format!("({} referrer(s))", referrers))
            );
        }
    }

    Ok(())
}
