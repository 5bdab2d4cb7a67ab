//! Error types for beamer.
//!
//! All errors in beamer are represented by [`BeamerError`], which covers
//! unreadable `xrandr` output, layouts that cannot be built from the
//! connected outputs, tool failures, and configuration problems.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors that can occur in beamer.
#[derive(Error, Debug)]
pub enum BeamerError {
    /// The query output did not contain a single output header line.
    #[error("Could not parse xrandr output:\n{0}")]
    ParseError(String),

    /// The connected outputs share no resolution.
    #[error("No matching resolution found for {0} connected output(s)")]
    NoCommonResolution(usize),

    /// Side-by-side layouts need exactly two connected outputs.
    #[error("Which outputs should I use? Found {0}")]
    WrongOutputCount(usize),

    /// No connected output at the requested 0-based index.
    #[error("No output with index {0} connected")]
    IndexNotConnected(usize),

    /// A row selector matched neither an ordinal nor an output name.
    #[error("Could not find output '{0}'")]
    OutputNotFound(String),

    /// A row was requested without any outputs.
    #[error("No outputs specified")]
    EmptySelection,

    /// The display tool could not be run or exited unsuccessfully.
    #[error("Command '{command}' failed:\n{output}")]
    ToolInvocationError {
        /// The command line that was run.
        command: String,
        /// Captured stdout and stderr of the tool.
        output: String,
    },

    /// A `@name` row preset is not defined in config.
    #[error("Row preset not found: {0}")]
    PresetNotFound(String),

    /// Config file does not exist at the expected path.
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Could not determine the user's config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Failed to read a file from disk.
    #[error("Failed to read config: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing failed.
    #[error("Failed to parse config: {0}")]
    ConfigError(#[from] toml::de::Error),
}

/// Convenient Result type alias for beamer operations.
pub type Result<T> = std::result::Result<T, BeamerError>;
