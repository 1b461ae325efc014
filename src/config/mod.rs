//! Configuration loading with precedence handling.
//!
//! Settings resolve through the chain
//! Defaults → Config File → Env Vars → CLI Args, each stage overriding the
//! previous one. The config file is TOML at
//! `~/.config/deckview/config.toml` unless an explicit path is given.

pub mod keybindings;

pub use keybindings::KeyBindings;

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::state::{CarouselConfig, GestureConfig};

/// Environment variable prefix for overrides.
const ENV_PREFIX: &str = "DECKVIEW_";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read an explicitly requested config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall through to defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Auto-advance interval in milliseconds.
    #[serde(default)]
    pub interval_ms: Option<u64>,

    /// Whether auto-advance starts enabled.
    #[serde(default)]
    pub autoplay: Option<bool>,

    /// Drag overscroll slack in logical units.
    #[serde(default)]
    pub overscroll: Option<f64>,

    /// Fraction of the stride a drag must travel to commit a step.
    #[serde(default)]
    pub commit_ratio: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Custom key bindings (reserved).
    #[serde(default)]
    pub keybindings: Option<toml::Value>,
}

/// Fully resolved configuration after the precedence chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Auto-advance interval in milliseconds.
    pub interval_ms: u64,
    /// Whether auto-advance starts enabled.
    pub autoplay: bool,
    /// Drag overscroll slack in logical units.
    pub overscroll: f64,
    /// Fraction of the stride a drag must travel to commit a step.
    pub commit_ratio: f64,
    /// Path to the tracing log file.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            interval_ms: 4000,
            autoplay: true,
            overscroll: 100.0,
            commit_ratio: 0.25,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Carousel tunables derived from this configuration.
    pub fn carousel(&self) -> CarouselConfig {
        CarouselConfig {
            gesture: GestureConfig {
                overscroll: self.overscroll,
                commit_ratio: self.commit_ratio,
                ..GestureConfig::default()
            },
            interval: Duration::from_millis(self.interval_ms),
            autoplay: self.autoplay,
        }
    }
}

/// Default tracing log file location.
fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("deckview")
        .join("deckview.log")
}

/// Default config file location.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("deckview").join("config.toml"))
}

/// Load the config file honoring path precedence.
///
/// An explicit path must exist and parse; a missing file at the default
/// location is not an error and yields `None`.
pub fn load_config_with_precedence(
    explicit_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    let (path, required) = match explicit_path {
        Some(path) => (Some(path), true),
        None => (default_config_path(), false),
    };
    let Some(path) = path else {
        return Ok(None);
    };
    if !path.exists() {
        if required {
            return Err(ConfigError::ReadError {
                path,
                reason: "file not found".to_string(),
            });
        }
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path).map_err(|err| ConfigError::ReadError {
        path: path.clone(),
        reason: err.to_string(),
    })?;
    let parsed = toml::from_str(&content).map_err(|err| ConfigError::ParseError {
        path,
        reason: err.to_string(),
    })?;
    Ok(Some(parsed))
}

/// Merge an optional config file over the hardcoded defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();
    let Some(file) = file else {
        return resolved;
    };
    if let Some(interval_ms) = file.interval_ms {
        resolved.interval_ms = interval_ms;
    }
    if let Some(autoplay) = file.autoplay {
        resolved.autoplay = autoplay;
    }
    if let Some(overscroll) = file.overscroll {
        resolved.overscroll = overscroll;
    }
    if let Some(commit_ratio) = file.commit_ratio {
        resolved.commit_ratio = commit_ratio;
    }
    if let Some(log_file_path) = file.log_file_path {
        resolved.log_file_path = log_file_path;
    }
    resolved
}

/// Apply `DECKVIEW_*` environment variable overrides.
///
/// Recognized: `DECKVIEW_INTERVAL_MS`, `DECKVIEW_AUTOPLAY` ("1"/"true"/"0"/
/// "false"), `DECKVIEW_LOG_FILE`. Unparsable values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(format!("{ENV_PREFIX}INTERVAL_MS")) {
        if let Ok(interval_ms) = raw.parse() {
            config.interval_ms = interval_ms;
        }
    }
    if let Ok(raw) = std::env::var(format!("{ENV_PREFIX}AUTOPLAY")) {
        match raw.as_str() {
            "1" | "true" => config.autoplay = true,
            "0" | "false" => config.autoplay = false,
            _ => {}
        }
    }
    if let Ok(raw) = std::env::var(format!("{ENV_PREFIX}LOG_FILE")) {
        config.log_file_path = PathBuf::from(raw);
    }
    config
}

/// Apply CLI argument overrides (the final stage of the chain).
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    interval_ms: Option<u64>,
    no_autoplay: bool,
) -> ResolvedConfig {
    if let Some(interval_ms) = interval_ms {
        config.interval_ms = interval_ms;
    }
    if no_autoplay {
        config.autoplay = false;
    }
    config
}
