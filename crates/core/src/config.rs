//! Layered application configuration.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{models::Criterion, render::OutputFormat};

/// Directory under the user's config dir holding `config.toml`.
pub const CONFIG_DIR: &str = "tickets";

/// Prefix for environment overrides, e.g. `TICKETS_DEFAULT_CRITERION=price`.
pub const ENV_PREFIX: &str = "TICKETS";

const DEFAULT_CONFIG: &str = r#"# Field used when no --by flag is given: destination, price or status.
default_criterion = "destination"

# Output layout: record, plain or json.
output_format = "record"

# Log filter used when RUST_LOG is unset.
log_level = "warn"

# Append logs to this file as well as stderr.
# log_file = "/tmp/tickets.log"
"#;

/// Settings shared by every front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Sort key used when none is requested explicitly.
    pub default_criterion: Criterion,
    /// Layout of printed tickets.
    pub output_format: OutputFormat,
    /// `tracing` filter directive applied when `RUST_LOG` is not set.
    pub log_level: String,
    /// Optional log file appended to alongside stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_criterion: Criterion::default(),
            output_format: OutputFormat::default(),
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Load from the default config file and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load from `path` (which may be missing) and the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .with_context(|| format!("failed to read config {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}

/// Default location of the config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join("config.toml")
}

/// Write the default config file if none exists yet.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = config_path();
    ensure_default_config_at(&path)?;
    Ok(path)
}

/// Write the default config to `path` unless a file is already there.
///
/// Returns `true` when a new file was written.
pub fn ensure_default_config_at(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write config {}", path.display()))?;
    info!(path = %path.display(), "Wrote default config");
    Ok(true)
}
