//! Flags shared by every `bookshelf` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "Global options")]
pub struct GlobalArgs {
    /// Log what the router and use case decide (-v), plus store lookups and
    /// writes (-vv), or everything (-vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report failed requests and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print responses without ANSI colours. `NO_COLOR` sets it too.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// TOML file with output settings and seed books.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How responses are printed. `auto` defers to the config file, then to
    /// whether stdout is a terminal.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// Rendering of router responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// `✓ 200 OK` in colour.
    Human,
    /// `✓ 200 OK` without colour.
    Plain,
    /// One `{"statusCode":...}` document per response.
    Json,
}

impl OutputFormat {
    /// Settle `Auto`: the flag wins, then the configured name (unknown names
    /// count as `auto`), then the terminal check.
    pub fn resolve(self, configured: &str, stdout_is_tty: bool) -> Self {
        let chosen = match self {
            Self::Auto => Self::from_str(configured, true).unwrap_or_default(),
            flag => flag,
        };
        match chosen {
            Self::Auto if stdout_is_tty => Self::Human,
            Self::Auto => Self::Plain,
            settled => settled,
        }
    }
}
