//! Config file discovery and loading.
//!
//! Handles finding the config file across different platforms and loading it.
//! The search order is:
//!
//! 1. `$XDG_CONFIG_HOME/beamer/config.toml`
//! 2. `~/.config/beamer/config.toml`
//!
//! Without a config file, compiled-in defaults are used.

use crate::config::Config;
use crate::error::{BeamerError, Result};
use log::info;
use std::path::{Path, PathBuf};

/// Determine the config file path.
///
/// Checks locations in order of preference:
/// 1. `$XDG_CONFIG_HOME/beamer/config.toml` (if XDG_CONFIG_HOME is set)
/// 2. `~/.config/beamer/config.toml`
///
/// If no existing config is found, returns `~/.config/beamer/config.toml`.
///
/// # Errors
///
/// Returns [`BeamerError::NoConfigDir`] if the home directory cannot be determined.
pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("beamer").join("config.toml");
        if path.exists() {
            return Ok(path);
        }
    }

    let home = dirs::home_dir().ok_or(BeamerError::NoConfigDir)?;
    Ok(home.join(".config").join("beamer").join("config.toml"))
}

/// Load and parse a config file from the given path.
///
/// # Errors
///
/// - [`BeamerError::ConfigNotFound`] if the file doesn't exist
/// - [`BeamerError::IoError`] if reading fails
/// - [`BeamerError::ConfigError`] if TOML parsing fails
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(BeamerError::ConfigNotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    let config = Config::from_str(&contents)?;
    Ok(config)
}

/// Load config from the default path, or defaults if there is none.
pub fn load_default_config() -> Result<Config> {
    let path = match default_config_path() {
        Ok(path) => path,
        Err(BeamerError::NoConfigDir) => {
            info!("no config directory, using defaults");
            return Ok(Config::default());
        }
        Err(e) => return Err(e),
    };
    match load_config(&path) {
        Ok(config) => {
            info!("loaded config from {}", path.display());
            Ok(config)
        }
        Err(BeamerError::ConfigNotFound(_)) => {
            info!("no config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}
