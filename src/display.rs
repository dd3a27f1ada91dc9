//! Display formatting helpers for the CLI

use console::Style;

/// Format a byte count as a human-readable string
pub fn format_size(bytes: u64) -> String {
    let size = bytes as f64;
    if size < 1024.0 {
        format!("{} B", bytes)
    } else if size < 1024.0 * 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else if size < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
    }
}

/// Style for bundle names in listings
pub fn bundle_style() -> Style {
    Style::new().bold().yellow()
}

/// Style for section labels
pub fn label_style() -> Style {
    Style::new().bold()
}

/// Style for secondary detail rows
pub fn dim_style() -> Style {
    Style::new().dim()
}

/// Style for warnings printed during session rebuild
pub fn warn_style() -> Style {
    Style::new().yellow()
}
