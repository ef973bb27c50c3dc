use clap::{Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Styled text, colors when the terminal supports them
    #[default]
    Term,
    /// Plain text, no colors
    Text,
    /// Machine readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "streamfield",
    bin_name = "streamfield",
    version,
    disable_help_subcommand = true,
    about = "Edit a nested, reorderable block document",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Term, help_heading = "Options")]
    pub output: OutputMode,

    /// Data directory holding the document (defaults to the nearest .streamfield)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List the document tree
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Also show the content of closed blocks
        #[arg(short, long)]
        all: bool,
    },

    /// Show one block in detail
    #[command(alias = "s", display_order = 2)]
    Show {
        /// Block path (e.g. 3.0 or root-3-0)
        path: String,
    },

    /// Move a block one place up among its siblings
    #[command(display_order = 10)]
    Up { path: String },

    /// Move a block one place down among its siblings
    #[command(display_order = 11)]
    Down { path: String },

    /// Copy a block; the original and its copy end up side by side
    #[command(alias = "dup", display_order = 12)]
    Duplicate { path: String },

    /// The "add after" button: same as duplicate, two identical blocks side by side
    #[command(display_order = 13)]
    Add { path: String },

    /// Copy the last block of a list onto its end
    #[command(display_order = 14)]
    Append {
        /// Path of the block owning the list (omit for the root list)
        #[arg(default_value = "root")]
        list: String,
    },

    /// Delete a block and everything under it
    #[command(alias = "rm", display_order = 15)]
    Delete { path: String },

    /// Expand a block
    #[command(display_order = 20)]
    Open { path: String },

    /// Collapse a block
    #[command(display_order = 21)]
    Close { path: String },

    /// Flip a block between open and closed
    #[command(alias = "t", display_order = 22)]
    Toggle { path: String },

    /// Move a block between lists, as a drag and drop would
    #[command(alias = "mv", display_order = 30)]
    Move {
        /// List the block is dragged from (e.g. root- or root-2)
        source: String,
        /// Position in the source list
        source_index: usize,
        /// List the block is dropped into
        destination: String,
        /// Position in the destination list
        destination_index: usize,
    },

    /// Apply a drag-end result given as JSON
    #[command(display_order = 31)]
    Drop {
        /// e.g. '{"source":{"droppableId":"root-","index":0},"destination":null,"reason":"CANCEL"}'
        json: String,
    },

    /// Replay a pointer event on a block
    #[command(display_order = 32)]
    Click {
        /// Block path (list path for list-add)
        path: String,
        /// header, up, down, duplicate, delete, add or list-add
        target: String,
    },

    /// Replace the document with the sample document
    #[command(display_order = 40)]
    Reset {
        /// Number of root blocks (defaults to the sample_size setting)
        #[arg(long)]
        size: Option<usize>,
    },

    /// Show resolved configuration
    #[command(display_order = 41)]
    Config {
        /// Print only this key
        key: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_naked_invocation() {
        let cli = parse(&["streamfield"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.output, OutputMode::Term);
    }

    #[test]
    fn test_add_help_matches_duplicate() {
        let cli = Cli::command();
        let about = |name: &str| {
            cli.find_subcommand(name)
                .and_then(|cmd| cmd.get_about())
                .map(|about| about.to_string())
                .unwrap()
        };
        assert!(about("duplicate").contains("side by side"));
        assert!(about("add").contains("same as duplicate"));
        assert!(!about("add").contains("right after"));
    }

    #[test]
    fn test_append_defaults_to_root() {
        let cli = parse(&["streamfield", "append"]);
        assert_eq!(
            cli.command,
            Some(Commands::Append {
                list: "root".to_string()
            })
        );
    }

    #[test]
    fn test_move_arguments() {
        let cli = parse(&["streamfield", "move", "root-", "0", "root-2", "1"]);
        assert_eq!(
            cli.command,
            Some(Commands::Move {
                source: "root-".to_string(),
                source_index: 0,
                destination: "root-2".to_string(),
                destination_index: 1,
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["streamfield", "list", "--all", "--output", "json", "-v"]);
        assert_eq!(cli.command, Some(Commands::List { all: true }));
        assert_eq!(cli.output, OutputMode::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_negative_index_rejected() {
        assert!(Cli::try_parse_from(["streamfield", "move", "root-", "-1", "root-", "0"]).is_err());
    }
}
