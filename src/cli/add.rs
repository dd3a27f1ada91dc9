use clap::Parser;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Assign one asset:\n    packgraph add ui textures/logo.png\n\n\
                  Assign several assets at once:\n    packgraph add ui scenes/menu.json audio/click.ogg\n\n\
                  Reassign an asset (removed from its previous bundle first):\n    packgraph add game textures/logo.png")]
pub struct AddArgs {
    /// Bundle to assign to (created if it does not exist)
    pub bundle: String,

    /// Asset paths, relative to the project root or the current directory
    #[arg(required = true)]
    pub paths: Vec<String>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    #[test]
    fn test_cli_parsing_add() {
        let cli = super::super::Cli::try_parse_from([
            "packgraph",
            "add",
            "ui",
            "textures/logo.png",
            "audio/click.ogg",
        ])
        .unwrap();
        match cli.command {
            super::super::Commands::Add(args) => {
                assert_eq!(args.bundle, "ui");
                assert_eq!(args.paths, vec!["textures/logo.png", "audio/click.ogg"]);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_requires_paths() {
        assert!(super::super::Cli::try_parse_from(["packgraph", "add", "ui"]).is_err());
    }
}
