//! Command-line interface for beamer.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use crate::layout::{Arrangement, Side};
use clap::{Parser, Subcommand};

/// Command-line arguments for beamer.
///
/// # Examples
///
/// ```bash
/// # Show connected outputs and their modes
/// beamer
///
/// # Put the projector to the right of the laptop screen
/// beamer right
///
/// # Three monitors, the middle one primary
/// beamer row DP-1 eDP-1! HDMI-1
/// ```
#[derive(Parser, Debug)]
#[command(name = "beamer")]
#[command(version)]
#[command(about = "Toggle and position a secondary monitor or projector")]
#[command(long_about = "Beamer arranges connected outputs via xrandr.\n\n\
    Outputs are re-queried on every invocation; the resulting xrandr command\n\
    is printed before it runs.")]
pub struct Cli {
    /// What to do (defaults to `info`).
    #[command(subcommand)]
    pub action: Option<Action>,

    /// Print the xrandr command instead of running it.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Keep retrying until the command succeeds.
    ///
    /// The attempt count and delay are read from config.
    #[arg(short, long)]
    pub retry: bool,

    /// Don't echo commands and tool output.
    #[arg(short, long)]
    pub quiet: bool,
}

/// The arrangement to apply.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Action {
    /// Print connected outputs and their modes.
    Info,
    /// Mirror the first output to all others.
    Clone,
    /// Put the second output left of the first.
    Left,
    /// Put the second output right of the first.
    Right,
    /// Put the second output above the first.
    Above,
    /// Put the second output below the first.
    Below,
    /// Only activate the first output.
    Off,
    /// Only activate the second output.
    Only,
    /// Arrange outputs in a row, left to right.
    Row {
        /// Output positions (1-based) or names; append `!` for primary,
        /// or give a single `@preset` from config.
        #[arg(value_name = "OUTPUT")]
        outputs: Vec<String>,
    },
    /// List row presets from config.
    Presets,
}

impl Cli {
    /// The requested action, `info` if none was given.
    pub fn action(&self) -> Action {
        self.action.clone().unwrap_or(Action::Info)
    }
}

impl Action {
    /// The arrangement this action applies, `None` for the listing actions.
    ///
    /// Row selectors are passed through unexpanded.
    pub fn arrangement(&self) -> Option<Arrangement> {
        Some(match self {
            Action::Info | Action::Presets => return None,
            Action::Clone => Arrangement::Clone,
            Action::Left => Arrangement::Side(Side::Left),
            Action::Right => Arrangement::Side(Side::Right),
            Action::Above => Arrangement::Side(Side::Above),
            Action::Below => Arrangement::Side(Side::Below),
            Action::Off => Arrangement::Single(0),
            Action::Only => Arrangement::Single(1),
            Action::Row { outputs } => Arrangement::Row(outputs.clone()),
        })
    }
}
