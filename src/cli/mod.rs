//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - add: Add command arguments
//! - remove: Remove command arguments
//! - clear: Clear command arguments
//! - rename: Rename command arguments
//! - delete: Delete command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod clear;
pub mod completions;
pub mod delete;
pub mod remove;
pub mod rename;
pub mod show;

pub use add::AddArgs;
pub use clear::ClearArgs;
pub use completions::CompletionsArgs;
pub use delete::DeleteArgs;
pub use remove::RemoveArgs;
pub use rename::RenameArgs;
pub use show::{ShowArgs, SortField};

/// Packgraph - asset bundle organizer
///
/// Track which bundle owns each asset and which bundles pull it in.
#[derive(Parser, Debug)]
#[command(
    name = "packgraph",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Organize project assets into named bundles and track shared dependencies",
    long_about = "Packgraph assigns a project's source assets to named output bundles, follows \
                  each asset's transitive dependencies, and flags assets that multiple bundles \
                  pull in indirectly so they can be extracted into a shared bundle.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  packgraph scan                          \x1b[90m# Index the project tree\x1b[0m\n   \
                  packgraph add ui textures/logo.png      \x1b[90m# Assign an asset to a bundle\x1b[0m\n   \
                  packgraph list                          \x1b[90m# List bundles with sizes\x1b[0m\n   \
                  packgraph show ui --sort size           \x1b[90m# Inspect a bundle's members\x1b[0m\n   \
                  packgraph redundant                     \x1b[90m# Shared-bundle candidates\x1b[0m\n   \
                  packgraph rename ui ux                  \x1b[90m# Rename, keeping all counts\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to searching upward from the current directory)
    #[arg(long, short = 'p', global = true, env = "PACKGRAPH_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the whole project and report totals
    Scan,

    /// Assign assets directly to a bundle
    Add(AddArgs),

    /// Remove direct assignments from a bundle
    Remove(RemoveArgs),

    /// Remove every member of a bundle
    Clear(ClearArgs),

    /// Rename a bundle, keeping its membership intact
    Rename(RenameArgs),

    /// Delete a bundle after emptying it
    Delete(DeleteArgs),

    /// List bundles with member counts and sizes
    List,

    /// Show a bundle's members
    Show(ShowArgs),

    /// List redundant assets and the bundles that pull them in
    Redundant,

    /// Show the scanned folder tree with per-folder totals
    Tree,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
