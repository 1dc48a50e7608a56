//! Configuration loading for the `meet` CLI.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// How windows are written to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `HH:MM-HH:MM (N min)` line per window.
    #[default]
    Text,
    /// A JSON array of `{start, duration}` objects.
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format used when `--format` is not given.
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Minimum window length for `meet free` when `--duration` is not given.
    pub default_duration: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: true,
            default_duration: 30,
        }
    }
}

impl Config {
    /// Loads configuration: defaults, then the user config file, then
    /// `config_path` if given, then `MEET_*` environment variables.
    #[allow(clippy::result_large_err)]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("MEET_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for `meet`.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("meet"))
}
