//! # Beamer
//!
//! Toggle and position a secondary monitor (or projector) on Linux.
//!
//! Beamer reads `xrandr --query`, turns it into a list of [`Output`]s with
//! their [`Mode`]s, and builds the `xrandr` command for the requested
//! arrangement.
//!
//! ## Arrangements
//!
//! - **clone**: mirror all connected outputs at their largest common resolution
//! - **left / right / above / below**: place the second output next to the first
//! - **off / only**: keep a single output on
//! - **row**: any number of outputs left to right, e.g. `beamer row 2 1!`
//!
//! ## Quick Example
//!
//! ```
//! use beamer::{layout, parser};
//!
//! let query = "\
//! Screen 0: minimum 8 x 8, current 1920 x 1080, maximum 32767 x 32767
//! eDP1 connected 1920x1080+0+0 (normal left inverted right x axis y axis) 309mm x 173mm
//!    1920x1080     60.01*+
//! HDMI2 connected (normal left inverted right x axis y axis)
//!    1920x1080     60.00
//! ";
//! let outputs = parser::parse_query(query).unwrap();
//! let args = layout::side_args(&outputs, layout::Side::Right).unwrap();
//! assert_eq!(
//!     args.join(" "),
//!     "xrandr --output eDP1 --auto --output HDMI2 --auto --right-of eDP1"
//! );
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`scan`]: Regex line patterns with typed field extraction
//! - [`model`]: Output and mode records
//! - [`parser`]: Parsing complete `xrandr --query` output
//! - [`layout`]: Argument lists for each arrangement
//! - [`xrandr`]: Running the tool behind the [`DisplayTool`] trait
//! - [`listing`]: The `info` listing
//! - [`retry`]: Re-running the pipeline with `--retry`
//! - [`cli`]: Command-line argument parsing with clap
//! - [`config`] / [`loader`]: TOML configuration and its discovery
//! - [`error`]: Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod listing;
pub mod loader;
pub mod model;
pub mod parser;
pub mod retry;
pub mod scan;
pub mod xrandr;

pub use config::Config;
pub use error::{BeamerError, Result};
pub use layout::Side;
pub use model::{Mode, Output};
pub use xrandr::{DisplayTool, Xrandr};
