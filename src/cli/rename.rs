use clap::Parser;

/// Arguments for the rename command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Rename a bundle:\n    packgraph rename ui ux\n\n\
                  Member order, sizes, and indirect counts all carry over.")]
pub struct RenameArgs {
    /// Current bundle name
    pub old: String,

    /// New bundle name
    pub new: String,
}
