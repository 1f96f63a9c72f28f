// Configuration loading for the optional config/portal.toml overlay.
//
// The portal runs with built-in defaults; the overlay file only tunes the
// ambient machinery (render tick, log filter, log directory). Portal
// content, seeds, and default selections are never configurable, so every
// session starts identically with or without the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Assembled runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Render tick interval.
    pub tick_rate: Duration,
    /// Default tracing filter (overridden by RUST_LOG when set).
    pub log_filter: String,
    /// Directory the log file is written into.
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tick_rate: Duration::from_millis(33),
            log_filter: "opndocs=info,warn".to_string(),
            log_dir: PathBuf::from("logs"),
        }
    }
}

// ---------------------------------------------------------------------------
// portal.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for portal.toml. Every section and field is
/// optional; omissions fall back to the defaults above.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    ui: UiSection,
    #[serde(default)]
    log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct UiSection {
    tick_rate_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LogSection {
    filter: Option<String>,
    dir: Option<String>,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load the configuration, looking for `config/portal.toml` under the
/// current directory first and the user config directory second. A missing
/// file is not an error; defaults apply.
pub fn load_config() -> Result<Config, ConfigError> {
    for candidate in candidate_paths() {
        if candidate.exists() {
            return load_config_from(&candidate);
        }
    }
    Ok(Config::default())
}

/// Load and validate configuration from a specific portal.toml path.
pub(crate) fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let defaults = Config::default();
    let config = Config {
        tick_rate: file
            .ui
            .tick_rate_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_rate),
        log_filter: file.log.filter.unwrap_or(defaults.log_filter),
        log_dir: file
            .log
            .dir
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir),
    };

    validate(&config)?;
    Ok(config)
}

/// Overlay file locations, in priority order.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("config/portal.toml")];
    if let Some(dirs) = ProjectDirs::from("", "", "opndocs") {
        paths.push(dirs.config_dir().join("portal.toml"));
    }
    paths
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let tick_ms = config.tick_rate.as_millis();
    if !(10..=1000).contains(&tick_ms) {
        return Err(ConfigError::Validation {
            field: "ui.tick_rate_ms".to_string(),
            message: format!("must be between 10 and 1000, got {}", tick_ms),
        });
    }
    if config.log_filter.trim().is_empty() {
        return Err(ConfigError::Validation {
            field: "log.filter".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
