use clap::Parser;

/// Arguments for the delete command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Delete a bundle after confirmation:\n    packgraph delete ui\n\n\
                  Delete without prompting:\n    packgraph delete ui -y")]
pub struct DeleteArgs {
    /// Bundle to delete
    pub bundle: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
