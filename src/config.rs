//! Configuration types for beamer.
//!
//! Configuration is optional; every setting has a compiled-in default.
//!
//! # Config Format
//!
//! ```toml
//! [defaults]
//! program = "xrandr"
//! retry_attempts = 5
//! retry_delay_ms = 2000
//! echo = true
//!
//! [rows]
//! desk = ["DP-1", "eDP-1!"]
//! ```
//!
//! Rows are presets for `beamer row @desk`.

use crate::error::{BeamerError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Prefix that marks a row argument as a preset name.
pub const PRESET_PREFIX: char = '@';

/// Global settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Defaults {
    /// Display tool binary used for queries and reconfiguration.
    pub program: String,
    /// Attempts made with `--retry`; `0` retries until success.
    pub retry_attempts: u32,
    /// Pause between retry attempts.
    pub retry_delay_ms: u64,
    /// Print commands and tool output.
    pub echo: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            program: crate::layout::PROGRAM.to_string(),
            retry_attempts: 0,
            retry_delay_ms: 1000,
            echo: true,
        }
    }
}

impl Defaults {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

/// Top-level configuration structure.
///
/// Parsed from `~/.config/beamer/config.toml` (or XDG equivalent).
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Global default settings.
    pub defaults: Defaults,
    /// Named row presets: `name` -> selectors.
    pub rows: HashMap<String, Vec<String>>,
}

impl Config {
    /// Parse config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `toml::de::Error` if the TOML is malformed or doesn't match
    /// the expected structure.
    pub fn from_str(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Get a row preset by name.
    pub fn get_row(&self, name: &str) -> Option<&[String]> {
        self.rows.get(name).map(Vec::as_slice)
    }

    /// List all row preset names, sorted alphabetically.
    pub fn list_rows(&self) -> Vec<String> {
        let mut result: Vec<_> = self.rows.keys().cloned().collect();
        result.sort();
        result
    }

    /// Replace a lone `@name` argument by the selectors of that preset.
    ///
    /// Any other argument list is returned unchanged.
    ///
    /// # Errors
    ///
    /// [`BeamerError::PresetNotFound`] if the preset is not defined.
    pub fn expand_row(&self, row: &[String]) -> Result<Vec<String>> {
        match row {
            [single] => match single.strip_prefix(PRESET_PREFIX) {
                Some(name) => self
                    .get_row(name)
                    .map(<[String]>::to_vec)
                    .ok_or_else(|| BeamerError::PresetNotFound(name.to_string())),
                None => Ok(row.to_vec()),
            },
            _ => Ok(row.to_vec()),
        }
    }
}
