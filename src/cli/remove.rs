use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove one asset from a bundle:\n    packgraph remove ui textures/logo.png\n\n\
                  Remove several assets at once:\n    packgraph remove ui scenes/menu.json audio/click.ogg")]
pub struct RemoveArgs {
    /// Bundle to remove from
    pub bundle: String,

    /// Asset paths, relative to the project root or the current directory
    #[arg(required = true)]
    pub paths: Vec<String>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    #[test]
    fn test_cli_parsing_remove() {
        let cli =
            super::super::Cli::try_parse_from(["packgraph", "remove", "ui", "textures/logo.png"])
                .unwrap();
        match cli.command {
            super::super::Commands::Remove(args) => {
                assert_eq!(args.bundle, "ui");
                assert_eq!(args.paths, vec!["textures/logo.png"]);
            }
            _ => panic!("Expected Remove command"),
        }
    }

    #[test]
    fn test_cli_parsing_remove_requires_paths() {
        assert!(super::super::Cli::try_parse_from(["packgraph", "remove", "ui"]).is_err());
    }
}
