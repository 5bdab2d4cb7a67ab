//! Parsing of complete `xrandr --query` output.
//!
//! The query output starts with a `Screen 0: ...` summary line, followed by
//! one header line per connector, each followed by the connector's indented
//! mode lines:
//!
//! ```text
//! Screen 0: minimum 8 x 8, current 1920 x 1080, maximum 32767 x 32767
//! eDP1 connected 1920x1080+0+0 (normal left inverted right x axis y axis) 309mm x 173mm
//!    1920x1080     60.01*+  59.93
//!    1680x1050     59.95    59.88
//! DP1 disconnected (normal left inverted right x axis y axis)
//! ```

use crate::error::{BeamerError, Result};
use crate::model::{Mode, Output};
use crate::scan::{scan, Fields, MODE, OUTPUT};
use log::debug;

/// Lines of raw input quoted in a [`BeamerError::ParseError`].
const CONTEXT_LINES: usize = 5;

/// Parse query output into outputs, in the order the tool reported them.
///
/// The first line is always discarded. Lines that are neither headers nor
/// modes are skipped.
///
/// # Errors
///
/// [`BeamerError::ParseError`] if the text contains no output header at all.
pub fn parse_query(text: &str) -> Result<Vec<Output>> {
    let mut lines = text.lines().skip(1);

    let mut header = lines
        .by_ref()
        .find_map(|line| scan(line, &OUTPUT))
        .ok_or_else(|| parse_error(text))?;
    let mut modes = Vec::new();
    let mut outputs = Vec::new();

    for line in lines.filter(|l| !l.is_empty()) {
        if let Some(next) = scan(line, &OUTPUT) {
            outputs.push(finish(&header, std::mem::take(&mut modes), text)?);
            header = next;
        } else if let Some(mode) = scan(line, &MODE).as_ref().and_then(Mode::from_fields) {
            modes.push(mode);
        } else {
            debug!("skipping unrecognized line: {:?}", line);
        }
    }
    outputs.push(finish(&header, modes, text)?);

    Ok(outputs)
}

fn finish(header: &Fields, modes: Vec<Mode>, text: &str) -> Result<Output> {
    Output::from_fields(header, modes).ok_or_else(|| parse_error(text))
}

fn parse_error(text: &str) -> BeamerError {
    let context: Vec<&str> = text.lines().take(CONTEXT_LINES).collect();
    BeamerError::ParseError(context.join("\n"))
}
