//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::cli::Cli;

/// Config file read when no `--config` flag is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_history.toml";

/// Configuration for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct AppConfig {
    /// Show the move list newest first on startup.
    reverse_moves: bool,

    /// File that receives log output; the terminal itself is taken by the UI.
    log_file: PathBuf,

    /// `tracing` filter used when `RUST_LOG` is not set.
    log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reverse_moves: false,
            log_file: PathBuf::from("tictactoe_history.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(reverse_moves = config.reverse_moves, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves configuration for a command line.
    ///
    /// An explicit `--config` path must exist. Without one, the default path
    /// is read if present and defaults are used otherwise. Flags win over
    /// file values.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };
        Ok(config.with_cli_overrides(cli))
    }

    /// Applies command-line flags on top of this configuration.
    pub fn with_cli_overrides(self, cli: &Cli) -> Self {
        let config = if cli.reverse {
            self.with_reverse_moves(true)
        } else {
            self
        };
        match &cli.log_file {
            Some(path) => config.with_log_file(path.clone()),
            None => config,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
