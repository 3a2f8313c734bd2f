//! Printing router responses and command results to stdout.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use bookshelf_core::presentation::HttpResponse;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = args
            .output_format
            .resolve(&config.output.format, io::stdout().is_terminal());

        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Plain text line; dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.color {
            self.print(&text.cyan().bold().to_string())
        } else {
            self.print(text)
        }
    }

    /// One response per line.
    ///
    /// `--quiet` hides 200s only. JSON lines are always written since
    /// scripts read them.
    pub fn response(&self, response: &HttpResponse) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            let json = serde_json::to_string(response).map_err(io::Error::other)?;
            return self.term.write_line(&json);
        }

        let accepted = response.status_code().is_success();
        if accepted && self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.mark(accepted, &describe(response)))
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn mark(&self, accepted: bool, text: &str) -> String {
        match (accepted, self.color) {
            (true, true) => format!("{} {}", "✓".green().bold(), text.green()),
            (false, true) => format!("{} {}", "✗".red().bold(), text.red()),
            (true, false) => format!("✓ {text}"),
            (false, false) => format!("✗ {text}"),
        }
    }
}

/// `200 OK` or `400 Bad Request: Missing param: title`.
fn describe(response: &HttpResponse) -> String {
    match response.body() {
        Some(body) => format!("{}: {}", response.status_code(), body.message),
        None => response.status_code().to_string(),
    }
}
