use clap::Parser;

/// Arguments for the clear command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove every member of a bundle:\n    packgraph clear ui")]
pub struct ClearArgs {
    /// Bundle to empty
    pub bundle: String,
}
