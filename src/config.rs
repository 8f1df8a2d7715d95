//! Per-install configuration for the profile tooling.
//!
//! Stored as TOML at `<workspace>/config/config.toml`, where the workspace is
//!   `$ATHLETEPROFILE_HOME` when set, otherwise
//!   the OS data directory joined with `AthleteProfile`.
//!
//! A missing file means defaults; nothing is written until `save` is called.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::profile::RoundingPolicy;

/// Environment variable overriding the workspace root.
pub const HOME_ENV: &str = "ATHLETEPROFILE_HOME";

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Where the descriptor lives when no path is given on the command line.
    #[serde(default)]
    pub profile: ProfileSettings,
    /// Bounds and toggles for the structural checks.
    #[serde(default)]
    pub checks: CheckSettings,
    /// Presentation choices a consumer may want to share.
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfileSettings {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSettings {
    /// Lowest acceptable event score.
    #[serde(default = "default_score_min")]
    pub score_min: f64,
    /// Highest acceptable event score (gymnastics scores top out at 10).
    #[serde(default = "default_score_max")]
    pub score_max: f64,
    /// Warn when an apparatus lists meets out of date order.
    #[serde(default = "default_warn_unordered_events")]
    pub warn_unordered_events: bool,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            score_min: default_score_min(),
            score_max: default_score_max(),
            warn_unordered_events: default_warn_unordered_events(),
        }
    }
}

const fn default_score_min() -> f64 {
    0.0
}

const fn default_score_max() -> f64 {
    10.0
}

const fn default_warn_unordered_events() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplaySettings {
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

/// Returns the root directory where profile tooling stores its state.
///
/// Order of precedence:
/// 1. `ATHLETEPROFILE_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var(HOME_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("AthleteProfile"))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<PathBuf> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    let path = config_file_path()?;
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data).with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(path)
}
