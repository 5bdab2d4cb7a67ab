//! Re-running a fallible step until it succeeds.
//!
//! Used by `--retry` to wait e.g. for a projector to show up: the whole
//! query, synthesize and reconfigure pipeline is run again from scratch on
//! every attempt.

use crate::error::Result;
use log::warn;
use std::time::Duration;

/// Run `step` up to `attempts` times (forever if `0`), sleeping `delay`
/// between failed attempts.
///
/// Returns the first success, or the error of the last attempt.
pub fn retry<T>(attempts: u32, delay: Duration, mut step: impl FnMut() -> Result<T>) -> Result<T> {
    let mut attempt = 1;
    loop {
        match step() {
            Ok(value) => return Ok(value),
            Err(e) if attempts == 0 || attempt < attempts => {
                warn!("attempt {} failed: {}", attempt, e);
                std::thread::sleep(delay);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
