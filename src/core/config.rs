//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tally/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub separator: Option<String>,
    pub save_path: Option<String>,
    pub save_on_exit: Option<bool>,
    pub strict_load: Option<bool>,
}

/// Values supplied on the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub separator: Option<String>,
    pub save_path: Option<PathBuf>,
    pub no_save: bool,
    pub strict_load: bool,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SEPARATOR: &str = "\t";
pub const DEFAULT_SAVE_FILE: &str = "save.out";
pub const DEFAULT_SAVE_ON_EXIT: bool = true;

const CONFIG_DIR: &str = ".tally";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub separator: String,
    pub storage_path: PathBuf,
    pub save_on_exit: bool,
    /// Abort startup when the save file exists but can't be loaded.
    pub strict_load: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            storage_path: default_save_path(),
            save_on_exit: DEFAULT_SAVE_ON_EXIT,
            strict_load: false,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

fn tally_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR))
}

/// Returns the path to `~/.tally/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    tally_dir().map(|d| d.join("config.toml"))
}

/// `~/.tally/save.out`, or `save.out` in the working directory without a home.
pub fn default_save_path() -> PathBuf {
    tally_dir()
        .map(|d| d.join(DEFAULT_SAVE_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_FILE))
}

/// Load config from `~/.tally/config.toml`.
pub fn load_config() -> Result<TallyConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(TallyConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TallyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<TallyConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TallyConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: TallyConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Tally Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# separator = "\t"                  # Printed between counters (or TALLY_SEPARATOR)
# save_path = "~/.tally/save.out"   # Counter values file (or TALLY_SAVE_PATH)
# save_on_exit = true               # Write counters when leaving with Esc
# strict_load = false               # Refuse to start if the save file is unreadable
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Expand a leading `~/` to the home directory.
fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TallyConfig, overrides: &Overrides) -> ResolvedConfig {
    resolve_with(config, overrides, |key| std::env::var(key).ok())
}

/// `resolve` with the environment lookup supplied by the caller.
fn resolve_with(
    config: &TallyConfig,
    overrides: &Overrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Separator: CLI → env → config → default
    let separator = overrides
        .separator
        .clone()
        .or_else(|| env("TALLY_SEPARATOR"))
        .or_else(|| config.general.separator.clone())
        .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());

    // Save path: CLI → env → config → default
    let storage_path = overrides
        .save_path
        .clone()
        .or_else(|| env("TALLY_SAVE_PATH").map(|p| expand_home(&p)))
        .or_else(|| config.general.save_path.as_deref().map(expand_home))
        .unwrap_or_else(default_save_path);

    // Flags only ever switch away from the configured behavior
    let save_on_exit =
        !overrides.no_save && config.general.save_on_exit.unwrap_or(DEFAULT_SAVE_ON_EXIT);
    let strict_load = overrides.strict_load || config.general.strict_load.unwrap_or(false);

    ResolvedConfig {
        separator,
        storage_path,
        save_on_exit,
        strict_load,
    }
}
