//! Outputs and modes as reported by `xrandr --query`.
//!
//! Both records are built from scanned [`Fields`] and never modified
//! afterwards. Changing an attribute (e.g. marking an output primary for a
//! row layout) produces a new value via [`Output::with_primary`].

use crate::scan::Fields;
use std::collections::BTreeSet;
use std::fmt;

/// A single resolution / refresh rate supported by an output.
#[derive(Debug, Clone, PartialEq)]
pub struct Mode {
    /// Horizontal resolution in pixels.
    pub width: u32,
    /// Vertical resolution in pixels.
    pub height: u32,
    /// Refresh rate in Hz.
    pub frequency: f64,
    /// Whether the output currently uses this mode.
    pub active: bool,
    /// Whether the tool marks this as the output's preferred mode.
    pub preferred: bool,
}

impl Mode {
    /// Build a mode from fields scanned with [`crate::scan::MODE`].
    ///
    /// Returns `None` if a dimension or the frequency is missing.
    pub fn from_fields(fields: &Fields) -> Option<Self> {
        Some(Self {
            width: fields.unsigned("width")?,
            height: fields.unsigned("height")?,
            frequency: fields.float("frequency")?,
            active: fields.flag("active"),
            preferred: fields.flag("preferred"),
        })
    }

    /// The `(width, height)` pair, ordered width first.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Display for Mode {
    /// Formats as `WIDTHxHEIGHT`, the form `xrandr --mode` expects.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A display connector (monitor, projector, or an empty port).
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    /// Connector name such as `eDP1` or `HDMI-0`.
    pub name: String,
    /// Whether a display is attached.
    pub connected: bool,
    /// Whether this is the designated primary output.
    pub primary: bool,
    /// Current geometry, only present for active outputs.
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub xoffset: Option<i32>,
    pub yoffset: Option<i32>,
    /// Rotation and reflection descriptor, passed through untouched.
    pub info: String,
    /// Physical dimensions, passed through untouched.
    pub physical_size: String,
    /// Supported modes in the order the tool listed them.
    pub modes: Vec<Mode>,
}

impl Output {
    /// Build an output from fields scanned with [`crate::scan::OUTPUT`]
    /// and the modes listed below its header line.
    ///
    /// Returns `None` if the name is missing.
    pub fn from_fields(fields: &Fields, modes: Vec<Mode>) -> Option<Self> {
        Some(Self {
            name: fields.text("name")?.to_string(),
            connected: fields.flag("connected"),
            primary: fields.flag("primary"),
            width: fields.unsigned("width"),
            height: fields.unsigned("height"),
            xoffset: fields.signed("xoffset"),
            yoffset: fields.signed("yoffset"),
            info: fields.text("info").unwrap_or_default().to_string(),
            physical_size: fields.text("physical_size").unwrap_or_default().to_string(),
            modes,
        })
    }

    /// A copy of this output with only `primary` changed.
    pub fn with_primary(&self, primary: bool) -> Self {
        Self {
            primary,
            ..self.clone()
        }
    }

    /// The distinct resolutions this output supports.
    pub fn resolutions(&self) -> BTreeSet<(u32, u32)> {
        self.modes.iter().map(Mode::resolution).collect()
    }

    /// The mode currently in use, if any.
    pub fn active_mode(&self) -> Option<&Mode> {
        self.modes.iter().find(|m| m.active)
    }
}

/// Filter outputs down to the connected ones, keeping their order.
pub fn connected(outputs: &[Output]) -> Vec<&Output> {
    outputs.iter().filter(|o| o.connected).collect()
}
