//! Tree command implementation
//!
//! Walks the project quietly and prints the folder tree with per-folder
//! asset counts and sizes. Direct bundle assignments show beside each
//! asset.

use std::path::PathBuf;

use super::helpers;
use crate::display::{self, format_size};
use crate::error::Result;
use crate::registry::{FolderId, Registry};
use crate::scan::scan_project;

/// Run tree command
pub fn run(project: Option<PathBuf>) -> Result<()> {
    let project = helpers::existing_project(project)?;
    let (mut catalog, mut registry) = helpers::open_session(&project)?;
    scan_project(&project, &mut registry, &mut catalog, false)?;

    let Some(root) = registry.root_folder() else {
        println!("No assets found.");
        return Ok(());
    };

    let root_name = project
        .root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string());
    let record = registry.folder(root);
    println!(
        "{} {}",
        display::label_style().apply_to(&root_name),
        display::dim_style().apply_to(format!(
            "({} assets, {})",
            record.asset_count,
            format_size(record.total_size)
        ))
    );
    print_folder(&registry, root, 1);

    Ok(())
}

fn print_folder(registry: &Registry, folder: FolderId, depth: usize) {
    let indent = "  ".repeat(depth);
    let record = registry.folder(folder);

    for &sub in &record.subfolders {
        let sub_record = registry.folder(sub);
        println!(
            "{}{}/ {}",
            indent,
            display::label_style().apply_to(&sub_record.name),
            display::dim_style().apply_to(format!(
                "({} assets, {})",
                sub_record.asset_count,
                format_size(sub_record.total_size)
            ))
        );
        print_folder(registry, sub, depth + 1);
    }

    for &asset in &record.assets {
        let record = registry.asset(asset);
        let file_name = record.path.rsplit('/').next().unwrap_or(&record.path);
        let mut line = format!(
            "{}{} {}",
            indent,
            file_name,
            display::dim_style().apply_to(format_size(record.memory_size))
        );
        if let Some(bundle) = record.direct_bundle {
            line.push_str(&format!(
                " {}",
                display::bundle_style()
                    .apply_to(format!("[{}]", registry.bundle(bundle).name))
            ));
        }
        if !record.is_valid {
            line.push_str(&format!(" {}", display::dim_style().apply_to("(invalid)")));
        }
        println!("{}", line);
    }
}
