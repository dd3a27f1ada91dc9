use clap::{Parser, ValueEnum};

/// Sort field for member display
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    /// Order members by size on disk
    Size,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a bundle's members in assignment order:\n    packgraph show ui\n\n\
                  Order members by size:\n    packgraph show ui --sort size\n\n\
                  Flip the size-sort direction:\n    packgraph show ui --toggle-sort\n\n\
                  Include stable asset identifiers:\n    packgraph show ui -v")]
pub struct ShowArgs {
    /// Bundle to inspect
    pub bundle: String,

    /// Sort members instead of using assignment order
    #[arg(long, value_enum)]
    pub sort: Option<SortField>,

    /// Flip the size-sort direction before displaying
    #[arg(long = "toggle-sort")]
    pub toggle_sort: bool,
}
