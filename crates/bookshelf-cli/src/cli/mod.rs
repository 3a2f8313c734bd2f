//! The `bookshelf` command line: subcommands and their arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name    = "bookshelf",
    bin_name = "bookshelf",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create book resources through the book creation router",
    long_about = "Bookshelf routes create-book requests through validation, \
                  duplicate-title detection and status mapping, backed by an \
                  in-memory repository.",
    after_help = "EXAMPLES:\n\
        \x20 bookshelf add --title Dune --publisher Ace --photo https://img/dune.png --author 'Frank Herbert'\n\
        \x20 bookshelf replay requests.json --output-format json\n\
        \x20 bookshelf config list\n\
        \x20 bookshelf completions bash > /usr/share/bash-completion/completions/bookshelf",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Route a single create-book request.
    #[command(
        visible_alias = "a",
        about = "Create one book",
        after_help = "EXAMPLES:\n\
            \x20 bookshelf add --title Dune --publisher Ace --photo url --author Herbert\n\
            \x20 bookshelf add --title 'Good Omens' --publisher Gollancz --photo url \\\n\
            \x20                --author Pratchett --author Gaiman"
    )]
    Add(AddArgs),

    /// Route every request in a JSON file against one repository.
    #[command(
        about = "Replay a file of create-book requests",
        after_help = "The file holds a JSON array. Each element is a request body\n\
            object (fields may be omitted) or null for a request without a body.\n\n\
            EXAMPLES:\n\
            \x20 bookshelf replay requests.json\n\
            \x20 bookshelf replay requests.json --output-format json"
    )]
    Replay(ReplayArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 bookshelf completions bash > ~/.local/share/bash-completion/completions/bookshelf\n\
            \x20 bookshelf completions zsh  > ~/.zfunc/_bookshelf\n\
            \x20 bookshelf completions fish > ~/.config/fish/completions/bookshelf.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Bookshelf configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 bookshelf config get output.format\n\
            \x20 bookshelf config list\n\
            \x20 bookshelf config path"
    )]
    Config(ConfigCommands),
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `bookshelf add`.
///
/// Every field is optional at the argument level so that the router, not
/// clap, decides what is missing.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Book title.
    #[arg(short = 't', long = "title", value_name = "TITLE")]
    pub title: Option<String>,

    /// Publisher name.
    #[arg(short = 'p', long = "publisher", value_name = "PUBLISHER")]
    pub publisher: Option<String>,

    /// Cover photo URL.
    #[arg(long = "photo", value_name = "URL")]
    pub photo: Option<String>,

    /// Author name. Repeat for several authors.
    #[arg(short = 'a', long = "author", value_name = "AUTHOR")]
    pub authors: Vec<String>,
}

// ── replay ────────────────────────────────────────────────────────────────────

/// Arguments for `bookshelf replay`.
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON file containing an array of request bodies.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Exit non-zero if any request did not return 200.
    #[arg(long = "strict", help = "Fail if any response is not 200")]
    pub strict: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `bookshelf completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `bookshelf config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_collects_repeated_authors() {
        let cli = Cli::try_parse_from([
            "bookshelf",
            "add",
            "--title",
            "Good Omens",
            "--author",
            "Pratchett",
            "--author",
            "Gaiman",
        ])
        .unwrap();

        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.title.as_deref(), Some("Good Omens"));
                assert_eq!(args.authors, ["Pratchett", "Gaiman"]);
                assert!(args.publisher.is_none());
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let parsed = Cli::try_parse_from(["bookshelf", "-q", "-v", "config", "list"]);
        assert!(parsed.is_err());
    }
}
