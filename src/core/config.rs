//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.ridex/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::theme::ThemeKind;
use crate::feed::DEFAULT_FEED_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RidexConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<ThemeKind>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FeedConfig {
    pub url: Option<String>,
    /// Unset = wait indefinitely.
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub theme: ThemeKind,
    pub feed_url: String,
    pub feed_timeout: Option<Duration>,
}

/// Values supplied on the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub feed_url: Option<String>,
    pub theme: Option<ThemeKind>,
}

/// Values read from the environment.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub feed_url: Option<String>,
    pub theme: Option<ThemeKind>,
}

impl EnvOverrides {
    /// Reads `RIDEX_FEED_URL` and `RIDEX_THEME`. Unknown theme names are ignored.
    pub fn from_env() -> Self {
        let theme = std::env::var("RIDEX_THEME").ok().and_then(|raw| {
            let parsed = ThemeKind::parse(&raw);
            if parsed.is_none() {
                warn!("Ignoring unknown RIDEX_THEME value: {}", raw);
            }
            parsed
        });
        Self {
            feed_url: std::env::var("RIDEX_FEED_URL").ok(),
            theme,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.ridex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".ridex").join("config.toml"))
}

/// Load config from `~/.ridex/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RidexConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RidexConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RidexConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<RidexConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(RidexConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RidexConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# RideX Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "light"                    # "light" or "dark" (or RIDEX_THEME)

# [feed]
# url = "https://dummyjson.com/c/a9f2-93c8-400a-af3a"   # Or RIDEX_FEED_URL
# timeout_secs = 30                  # Unset: no timeout
"#;

/// Writes the commented-out default config at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &RidexConfig, env: &EnvOverrides, cli: &CliOverrides) -> ResolvedConfig {
    let theme = cli
        .theme
        .or(env.theme)
        .or(config.general.theme)
        .unwrap_or_default();

    let feed_url = cli
        .feed_url
        .clone()
        .or_else(|| env.feed_url.clone())
        .or_else(|| config.feed.url.clone())
        .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());

    // Zero would make every request fail instantly; treat it as unset.
    let feed_timeout = config
        .feed
        .timeout_secs
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    ResolvedConfig {
        theme,
        feed_url,
        feed_timeout,
    }
}
