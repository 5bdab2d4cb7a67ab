//! Line scanning for `xrandr --query` output.
//!
//! Each line of query output is matched against a [`Pattern`]: a regex with
//! named capture groups plus a table describing how each captured group is
//! converted into a typed [`Value`]. Two patterns are provided, [`OUTPUT`]
//! for connector header lines and [`MODE`] for the indented mode lines below
//! them.
//!
//! Conversion is lenient. A group that did not participate in the match (or
//! whose text does not fit its type) is left out of the resulting [`Fields`],
//! except for flag groups, which are always present and default to `false`.
//!
//! # Example
//!
//! ```
//! use beamer::scan::{scan, MODE};
//!
//! let fields = scan("   1920x1080     60.01*+  59.93", &MODE).unwrap();
//! assert_eq!(fields.unsigned("width"), Some(1920));
//! assert!(fields.flag("active"));
//! assert!(fields.text("name").is_none());
//! ```

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// How a captured group is converted into a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cast {
    /// Keep the captured text as is.
    Text,
    /// Parse as a non-negative integer.
    Unsigned,
    /// Parse as an integer with an optional `+`/`-` sign.
    Signed,
    /// Parse as a decimal number.
    Float,
    /// `true` if the group matched at all.
    Flag,
    /// `true` if the group matched exactly this text.
    Equals(&'static str),
}

/// A typed field value extracted from a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Unsigned(u32),
    Signed(i32),
    Float(f64),
    Flag(bool),
}

impl Cast {
    /// Convert a captured group, `None` meaning the group did not match.
    ///
    /// Returns `None` when the field should be omitted.
    fn apply(self, raw: Option<&str>) -> Option<Value> {
        match self {
            Cast::Flag => Some(Value::Flag(raw.is_some())),
            Cast::Equals(expected) => Some(Value::Flag(raw == Some(expected))),
            Cast::Text => raw.map(|s| Value::Text(s.to_string())),
            Cast::Unsigned => raw?.parse().ok().map(Value::Unsigned),
            Cast::Signed => raw?.parse().ok().map(Value::Signed),
            Cast::Float => raw?.parse().ok().map(Value::Float),
        }
    }
}

/// A line pattern: regex with named groups and the cast for each group.
#[derive(Debug)]
pub struct Pattern {
    regex: Regex,
    casts: &'static [(&'static str, Cast)],
}

impl Pattern {
    /// Build a pattern from a regex source and its field table.
    ///
    /// Every name in `casts` should be a named group of `regex`; names
    /// missing from the regex behave like groups that never match.
    pub fn new(regex: &str, casts: &'static [(&'static str, Cast)]) -> Self {
        Self {
            // Only ever called with the compile-time constants below.
            regex: Regex::new(regex).expect("static regex must compile"),
            casts,
        }
    }
}

/// Named, typed fields extracted from a single matching line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(HashMap<&'static str, Value>);

impl Fields {
    /// Raw access to a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether a field is present at all.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name)? {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn unsigned(&self, name: &str) -> Option<u32> {
        match self.0.get(name)? {
            Value::Unsigned(n) => Some(*n),
            _ => None,
        }
    }

    pub fn signed(&self, name: &str) -> Option<i32> {
        match self.0.get(name)? {
            Value::Signed(n) => Some(*n),
            _ => None,
        }
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        match self.0.get(name)? {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Flag fields are `false` when absent.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.0.get(name), Some(Value::Flag(true)))
    }
}

/// Connector header, e.g.
/// `HDMI-0 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 477mm x 268mm`.
pub static OUTPUT: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(
        r"(?x)
        ^(?P<name>\S+)
        \x20(?P<connected>(?:dis)?connected)
        (?P<primary>\x20primary)?
        (?:\x20(?P<width>\d+)x(?P<height>\d+)
               (?P<xoffset>[+-]\d+)(?P<yoffset>[+-]\d+))?
        (?:\x20\((?P<info>[^)]*)\))?
        (?:\x20(?P<physical_size>.+))?
        ",
        &[
            ("name", Cast::Text),
            ("connected", Cast::Equals("connected")),
            ("primary", Cast::Flag),
            ("width", Cast::Unsigned),
            ("height", Cast::Unsigned),
            ("xoffset", Cast::Signed),
            ("yoffset", Cast::Signed),
            ("info", Cast::Text),
            ("physical_size", Cast::Text),
        ],
    )
});

/// Indented mode line, e.g. `   1920x1080     60.01*+  59.93`.
///
/// Only the first frequency of a line is read. The `*` and `+` markers must
/// directly follow it.
pub static MODE: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(
        r"(?x)
        ^\s+(?P<width>\d+)x(?P<height>\d+)
        \s+(?P<frequency>\d+\.\d+)
        (?P<active>\*)?
        (?P<preferred>\+)?
        ",
        &[
            ("width", Cast::Unsigned),
            ("height", Cast::Unsigned),
            ("frequency", Cast::Float),
            ("active", Cast::Flag),
            ("preferred", Cast::Flag),
        ],
    )
});

/// Match `line` against `pattern`.
///
/// Returns `None` if the line does not match; this is how callers tell
/// header lines from mode lines, not an error.
pub fn scan(line: &str, pattern: &Pattern) -> Option<Fields> {
    let captures = pattern.regex.captures(line)?;
    let mut fields = HashMap::new();
    for &(name, cast) in pattern.casts {
        let raw = captures.name(name).map(|m| m.as_str());
        if let Some(value) = cast.apply(raw) {
            fields.insert(name, value);
        }
    }
    Some(Fields(fields))
}
