//! Shell configuration loaded from TOML.

use crate::sort::SortOrder;
use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_core::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Display preferences for the terminal shell.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Symbol drawn for the first player.
    #[serde(default = "default_player_a")]
    player_a: String,

    /// Symbol drawn for the second player.
    #[serde(default = "default_player_b")]
    player_b: String,

    /// Initial move list order.
    #[serde(default)]
    sort_order: SortOrder,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_player_a() -> String {
    "X".to_string()
}

fn default_player_b() -> String {
    "O".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            player_a: default_player_a(),
            player_b: default_player_b(),
            sort_order: SortOrder::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.player_a == config.player_b {
            return Err(ConfigError::new(format!(
                "Players must use different symbols (both are {:?})",
                config.player_a
            )));
        }

        info!(player_a = %config.player_a, player_b = %config.player_b, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Symbol for `mark`.
    pub fn symbol(&self, mark: Mark) -> &str {
        match mark {
            Mark::PlayerA => &self.player_a,
            Mark::PlayerB => &self.player_b,
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
