use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    packgraph completions bash > ~/.bash_completion.d/packgraph\n\n\
                  Generate zsh completions:\n    packgraph completions zsh > ~/.zfunc/_packgraph\n\n\
                  Generate fish completions:\n    packgraph completions fish > ~/.config/fish/completions/packgraph.fish\n\n\
                  Generate PowerShell completions:\n    packgraph completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
