//! Log output on stderr.
//!
//! Bookshelf emits from three places. Each `-v` widens what is shown:
//!
//! | flags   | `bookshelf` (commands) | `bookshelf_core` (router, use case) | `bookshelf_adapters` (store) |
//! |---------|------------------------|-------------------------------------|------------------------------|
//! | `-q`    | error                  | error                               | error                        |
//! | none    | warn                   | warn                                | warn                         |
//! | `-v`    | info                   | info                                | warn                         |
//! | `-vv`   | debug                  | debug                               | debug                        |
//! | `-vvv`  | trace                  | trace                               | trace                        |
//!
//! `RUST_LOG`, when set, replaces the table.

use std::io::IsTerminal as _;

use tracing_subscriber::EnvFilter;

use crate::cli::GlobalArgs;

const COMMANDS: &str = "bookshelf";
const ROUTER_AND_USE_CASE: &str = "bookshelf_core";
const STORE: &str = "bookshelf_adapters";

/// Install the subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(directives(args.verbose, args.quiet))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(args.verbose >= 3)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Filter directives for the table above.
fn directives(verbose: u8, quiet: bool) -> String {
    let (outcomes, store) = match (quiet, verbose) {
        (true, _) => ("error", "error"),
        (false, 0) => ("warn", "warn"),
        (false, 1) => ("info", "warn"),
        (false, 2) => ("debug", "debug"),
        (false, _) => ("trace", "trace"),
    };
    format!("{COMMANDS}={outcomes},{ROUTER_AND_USE_CASE}={outcomes},{STORE}={store}")
}
