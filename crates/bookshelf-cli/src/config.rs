//! Output settings and the books the store starts with.
//!
//! Later layers override earlier ones:
//!
//! 1. built-in defaults: empty store, `auto` output
//! 2. `--config FILE`, or `config.toml` in the platform config dir if present
//! 3. `BOOKSHELF_*` variables, `__` between keys: `BOOKSHELF_OUTPUT__FORMAT=json`
//!
//! `main` loads `.env` first, so its entries act as layer 3. Command-line
//! flags are applied on top by the caller.

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use bookshelf_core::domain::BookRequest;

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "BOOKSHELF";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// In-memory store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Books present before the first request, in the same shape as a
    /// create-book request. Every entry must be complete.
    #[serde(default)]
    pub seed: Vec<BookRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`. Used when `--output-format` is
    /// left at `auto`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| match config_file {
                Some(path) => format!("Failed to read config file {}", path.display()),
                None => "Failed to read configuration".to_string(),
            })?;

        settings
            .try_deserialize()
            .context("Configuration has an unexpected shape")
    }

    /// `config.toml` in the platform config dir, else `./.bookshelf.toml`.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "bookshelf", "bookshelf")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".bookshelf.toml"))
    }

    /// The file `load` read from, if it exists.
    pub fn active_path(config_file: Option<&PathBuf>) -> Option<PathBuf> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        path.exists().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_store_is_empty() {
        assert!(AppConfig::default().store.seed.is_empty());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_config(
            r#"
            [output]
            format = "json"

            [[store.seed]]
            title = "Dune"
            publisher = "Ace"
            photo = "url"
            authors = ["Frank Herbert"]
            "#,
        );

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.output.format, "json");
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.store.seed.len(), 1);
        assert_eq!(cfg.store.seed[0].title, "Dune");
        assert_eq!(cfg.store.seed[0].authors, ["Frank Herbert"]);
    }

    #[test]
    fn seed_fields_left_out_load_as_empty() {
        let file = write_config(
            r#"
            [[store.seed]]
            title = "Dune"
            "#,
        );

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.store.seed[0].publisher, "");
        assert!(cfg.store.seed[0].authors.is_empty());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/bookshelf.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
