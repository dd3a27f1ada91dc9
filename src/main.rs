//! Packgraph - asset bundle organizer
//!
//! A command line tool that assigns a project's source assets to named
//! output bundles, tracks direct and transitive membership per asset, and
//! flags assets duplicated across bundles as candidates for extraction into
//! a shared bundle.

use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod config;
mod display;
mod error;
mod path_norm;
mod project;
mod registry;
mod scan;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan => commands::scan::run(cli.project),
        Commands::Add(args) => commands::add::run(cli.project, args),
        Commands::Remove(args) => commands::remove::run(cli.project, args),
        Commands::Clear(args) => commands::clear::run(cli.project, args),
        Commands::Rename(args) => commands::rename::run(cli.project, args),
        Commands::Delete(args) => commands::delete::run(cli.project, args),
        Commands::List => commands::list::run(cli.project),
        Commands::Show(args) => commands::show::run(cli.project, cli.verbose, args),
        Commands::Redundant => commands::redundant::run(cli.project),
        Commands::Tree => commands::tree::run(cli.project),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
