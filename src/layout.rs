//! Synthesis of `xrandr` argument lists for the supported arrangements.
//!
//! Every function here takes the full parsed batch, considers only its
//! connected outputs (in reported order) and returns the complete argument
//! list, program name included. Nothing is executed.
//!
//! | Arrangement | Function |
//! |-------------|----------|
//! | mirror all outputs | [`clone_args`] |
//! | two outputs next to each other | [`side_args`] |
//! | one output on, the rest off | [`single_output_args`] |
//! | custom left-to-right row | [`row_args`] |

use crate::error::{BeamerError, Result};
use crate::model::{connected, Output};
use std::collections::BTreeSet;

/// Program name at the head of every synthesized argument list.
pub const PROGRAM: &str = "xrandr";

/// Suffix on a row selector that marks the output as primary.
pub const PRIMARY_MARKER: char = '!';

/// Where the second output goes relative to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Above,
    Below,
}

impl Side {
    /// The `xrandr` positioning flag for this side.
    pub fn flag(&self) -> &'static str {
        match self {
            Side::Left => "--left-of",
            Side::Right => "--right-of",
            Side::Above => "--above",
            Side::Below => "--below",
        }
    }
}

/// Incremental builder for an `xrandr` argument list.
struct Args(Vec<String>);

impl Args {
    fn new() -> Self {
        Args(vec![PROGRAM.to_string()])
    }

    /// Start a new `--output NAME` clause.
    fn output(mut self, name: &str) -> Self {
        self.0.push("--output".into());
        self.0.push(name.into());
        self
    }

    fn flag(mut self, flag: &str) -> Self {
        self.0.push(flag.into());
        self
    }

    fn option(self, flag: &str, value: &str) -> Self {
        self.flag(flag).flag(value)
    }

    fn finish(self) -> Vec<String> {
        self.0
    }
}

/// Mirror every connected output at the largest resolution they all share.
///
/// The first connected output is the anchor; all others are set to the same
/// mode and `--same-as` the anchor. Resolutions compare by width, then by
/// height.
///
/// # Errors
///
/// [`BeamerError::NoCommonResolution`] if nothing is connected or the
/// outputs share no resolution.
pub fn clone_args(outputs: &[Output]) -> Result<Vec<String>> {
    let outputs = connected(outputs);
    let common = outputs
        .iter()
        .map(|o| o.resolutions())
        .reduce(|acc, res| acc.intersection(&res).copied().collect::<BTreeSet<_>>());

    let (width, height) = common
        .and_then(|set| set.last().copied())
        .ok_or(BeamerError::NoCommonResolution(outputs.len()))?;
    let mode = format!("{}x{}", width, height);

    // Non-empty, otherwise there would be no common resolution.
    let (anchor, rest) = outputs
        .split_first()
        .ok_or(BeamerError::NoCommonResolution(0))?;

    let mut args = Args::new().output(&anchor.name).option("--mode", &mode);
    for out in rest {
        args = args
            .output(&out.name)
            .option("--mode", &mode)
            .option("--same-as", &anchor.name);
    }
    Ok(args.finish())
}

/// Enable exactly two connected outputs and place the second on `side`
/// of the first.
///
/// # Errors
///
/// [`BeamerError::WrongOutputCount`] unless exactly two outputs are connected.
pub fn side_args(outputs: &[Output], side: Side) -> Result<Vec<String>> {
    let outputs = connected(outputs);
    let [first, second] = outputs.as_slice() else {
        return Err(BeamerError::WrongOutputCount(outputs.len()));
    };
    Ok(Args::new()
        .output(&first.name)
        .flag("--auto")
        .output(&second.name)
        .flag("--auto")
        .option(side.flag(), &first.name)
        .finish())
}

/// Keep only the connected output at `index` (0-based) and turn off all
/// other connected outputs.
///
/// # Errors
///
/// [`BeamerError::IndexNotConnected`] if fewer than `index + 1` outputs are
/// connected.
pub fn single_output_args(outputs: &[Output], index: usize) -> Result<Vec<String>> {
    let outputs = connected(outputs);
    let keep = outputs
        .get(index)
        .ok_or(BeamerError::IndexNotConnected(index))?;

    let mut args = Args::new().output(&keep.name).flag("--auto");
    for (_, out) in outputs.iter().enumerate().filter(|(i, _)| *i != index) {
        args = args.output(&out.name).flag("--off");
    }
    Ok(args.finish())
}

/// Arrange connected outputs in a left-to-right row.
///
/// Each selector is either a 1-based position among the connected outputs
/// or an output name, optionally followed by [`PRIMARY_MARKER`]. Every
/// output is placed right of the one selected before it. Connected outputs
/// that are not selected are turned off.
///
/// Selecting the same output twice is passed on to `xrandr`, which reports
/// the conflict itself.
///
/// # Errors
///
/// - [`BeamerError::EmptySelection`] if `row` is empty
/// - [`BeamerError::OutputNotFound`] if a selector matches no connected output
pub fn row_args<S: AsRef<str>>(outputs: &[Output], row: &[S]) -> Result<Vec<String>> {
    let outputs = connected(outputs);
    let row = row
        .iter()
        .map(|sel| resolve_selector(&outputs, sel.as_ref()))
        .collect::<Result<Vec<Output>>>()?;

    let (anchor, _) = row.split_first().ok_or(BeamerError::EmptySelection)?;
    // The anchor is only ever `--auto`; `--primary` goes on later outputs.
    let mut args = Args::new().output(&anchor.name).flag("--auto");

    for pair in row.windows(2) {
        let (left, out) = (&pair[0], &pair[1]);
        args = args
            .output(&out.name)
            .flag("--auto")
            .option("--right-of", &left.name);
        if out.primary {
            args = args.flag("--primary");
        }
    }

    for out in outputs.iter().filter(|o| !row.iter().any(|r| r.name == o.name)) {
        args = args.output(&out.name).flag("--off");
    }
    Ok(args.finish())
}

/// A requested arrangement, ready to be synthesized against query output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arrangement {
    Clone,
    Side(Side),
    /// Keep the connected output at this 0-based index.
    Single(usize),
    /// Row selectors, presets already expanded.
    Row(Vec<String>),
}

impl Arrangement {
    /// Build the argument list for this arrangement.
    pub fn args(&self, outputs: &[Output]) -> Result<Vec<String>> {
        match self {
            Arrangement::Clone => clone_args(outputs),
            Arrangement::Side(side) => side_args(outputs, *side),
            Arrangement::Single(index) => single_output_args(outputs, *index),
            Arrangement::Row(row) => row_args(outputs, row),
        }
    }
}

/// Resolve one row selector to a copy of the output, with `primary` set
/// from the selector.
fn resolve_selector(outputs: &[&Output], selector: &str) -> Result<Output> {
    let (token, primary) = match selector.strip_suffix(PRIMARY_MARKER) {
        Some(token) => (token, true),
        None => (selector, false),
    };
    let not_found = || BeamerError::OutputNotFound(token.to_string());

    let output = match token.parse::<i64>() {
        Ok(position) => usize::try_from(position)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .and_then(|i| outputs.get(i))
            .ok_or_else(not_found)?,
        Err(_) => outputs
            .iter()
            .find(|o| o.name == token)
            .ok_or_else(not_found)?,
    };
    Ok(output.with_primary(primary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mode;

    fn mode(width: u32, height: u32) -> Mode {
        Mode {
            width,
            height,
            frequency: 60.0,
            active: false,
            preferred: false,
        }
    }

    fn output(name: &str, connected: bool, modes: &[(u32, u32)]) -> Output {
        Output {
            name: name.into(),
            connected,
            primary: false,
            width: None,
            height: None,
            xoffset: None,
            yoffset: None,
            info: String::new(),
            physical_size: String::new(),
            modes: modes.iter().map(|&(w, h)| mode(w, h)).collect(),
        }
    }

    fn abc() -> Vec<Output> {
        vec![
            output("A", true, &[(1920, 1080)]),
            output("X", false, &[]),
            output("B", true, &[(1920, 1080)]),
            output("C", true, &[(1280, 720)]),
        ]
    }

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_arrangement_dispatch() {
        let outputs = vec![
            output("A", true, &[(1920, 1080)]),
            output("B", true, &[(1920, 1080)]),
        ];
        assert_eq!(
            Arrangement::Side(Side::Below).args(&outputs).unwrap(),
            side_args(&outputs, Side::Below).unwrap()
        );
        assert_eq!(
            Arrangement::Single(1).args(&outputs).unwrap(),
            args(&["xrandr", "--output", "B", "--auto", "--output", "A", "--off"])
        );
        assert_eq!(
            Arrangement::Row(vec!["2".into(), "A".into()]).args(&outputs).unwrap(),
            args(&["xrandr", "--output", "B", "--auto", "--output", "A", "--auto", "--right-of", "B"])
        );
        assert!(matches!(
            Arrangement::Clone.args(&abc()),
            Err(BeamerError::NoCommonResolution(3))
        ));
    }

    #[test]
    fn test_clone_single_output_uses_best_mode() {
        let outputs = vec![
            output("eDP1", true, &[(1920, 1080), (2560, 1440), (800, 600)]),
            output("DP1", false, &[]),
        ];
        assert_eq!(
            clone_args(&outputs).unwrap(),
            args(&["xrandr", "--output", "eDP1", "--mode", "2560x1440"])
        );
    }

    #[test]
    fn test_clone_picks_largest_common() {
        let outputs = vec![
            output("A", true, &[(2560, 1440), (1920, 1080), (1024, 768), (800, 600)]),
            output("B", true, &[(1920, 1200), (1920, 1080), (800, 600)]),
        ];
        assert_eq!(
            clone_args(&outputs).unwrap(),
            args(&[
                "xrandr", "--output", "A", "--mode", "1920x1080", "--output", "B", "--mode",
                "1920x1080", "--same-as", "A",
            ])
        );
    }

    #[test]
    fn test_clone_compares_width_before_height() {
        let outputs = vec![
            output("A", true, &[(1280, 1024), (1600, 900)]),
            output("B", true, &[(1600, 900), (1280, 1024)]),
        ];
        let cmd = clone_args(&outputs).unwrap();
        assert_eq!(cmd[4], "1600x900");
    }

    #[test]
    fn test_clone_without_common_resolution() {
        let outputs = vec![
            output("A", true, &[(1920, 1080)]),
            output("B", true, &[(1280, 720)]),
        ];
        assert!(matches!(
            clone_args(&outputs),
            Err(BeamerError::NoCommonResolution(2))
        ));
        assert!(matches!(
            clone_args(&[output("A", false, &[(800, 600)])]),
            Err(BeamerError::NoCommonResolution(0))
        ));
    }

    #[test]
    fn test_side_positions_second_output() {
        let outputs = vec![
            output("eDP1", true, &[]),
            output("DP1", false, &[]),
            output("HDMI2", true, &[]),
        ];
        for side in [Side::Left, Side::Right, Side::Above, Side::Below] {
            assert_eq!(
                side_args(&outputs, side).unwrap(),
                args(&[
                    "xrandr", "--output", "eDP1", "--auto", "--output", "HDMI2", "--auto",
                    side.flag(), "eDP1",
                ])
            );
        }
    }

    #[test]
    fn test_side_requires_two_outputs() {
        let one = vec![output("A", true, &[])];
        assert!(matches!(
            side_args(&one, Side::Left),
            Err(BeamerError::WrongOutputCount(1))
        ));
        assert!(matches!(
            side_args(&abc(), Side::Right),
            Err(BeamerError::WrongOutputCount(3))
        ));
    }

    #[test]
    fn test_single_output_turns_off_rest() {
        assert_eq!(
            single_output_args(&abc(), 0).unwrap(),
            args(&[
                "xrandr", "--output", "A", "--auto", "--output", "B", "--off", "--output", "C",
                "--off",
            ])
        );
        assert_eq!(
            single_output_args(&abc(), 1).unwrap(),
            args(&[
                "xrandr", "--output", "B", "--auto", "--output", "A", "--off", "--output", "C",
                "--off",
            ])
        );
    }

    #[test]
    fn test_single_output_index_out_of_range() {
        assert!(matches!(
            single_output_args(&abc(), 3),
            Err(BeamerError::IndexNotConnected(3))
        ));
    }

    #[test]
    fn test_row_chains_right_of_with_primary() {
        let outputs = vec![output("A", true, &[]), output("B", true, &[])];
        assert_eq!(
            row_args(&outputs, &["2", "1!"]).unwrap(),
            args(&[
                "xrandr", "--output", "B", "--auto", "--output", "A", "--auto", "--right-of",
                "B", "--primary",
            ])
        );
    }

    #[test]
    fn test_row_by_name_turns_off_unselected() {
        assert_eq!(
            row_args(&abc(), &["C", "A"]).unwrap(),
            args(&[
                "xrandr", "--output", "C", "--auto", "--output", "A", "--auto", "--right-of",
                "C", "--output", "B", "--off",
            ])
        );
    }

    #[test]
    fn test_row_chains_against_left_neighbour() {
        let cmd = row_args(&abc(), &["1", "2", "3"]).unwrap();
        assert_eq!(
            cmd,
            args(&[
                "xrandr", "--output", "A", "--auto", "--output", "B", "--auto", "--right-of",
                "A", "--output", "C", "--auto", "--right-of", "B",
            ])
        );
    }

    #[test]
    fn test_row_anchor_never_primary() {
        let outputs = vec![output("A", true, &[]), output("B", true, &[])];
        assert_eq!(
            row_args(&outputs, &["1!", "2"]).unwrap(),
            args(&["xrandr", "--output", "A", "--auto", "--output", "B", "--auto", "--right-of", "A"])
        );
    }

    #[test]
    fn test_row_keeps_duplicates() {
        let cmd = row_args(&abc(), &["1", "A"]).unwrap();
        assert_eq!(
            cmd,
            args(&[
                "xrandr", "--output", "A", "--auto", "--output", "A", "--auto", "--right-of",
                "A", "--output", "B", "--off", "--output", "C", "--off",
            ])
        );
    }

    #[test]
    fn test_row_errors() {
        let empty: [&str; 0] = [];
        assert!(matches!(row_args(&abc(), &empty), Err(BeamerError::EmptySelection)));
        match row_args(&abc(), &["1", "HDMI-9!"]) {
            Err(BeamerError::OutputNotFound(token)) => assert_eq!(token, "HDMI-9"),
            other => panic!("unexpected result: {other:?}"),
        }
        // Disconnected outputs and out-of-range positions are not selectable.
        assert!(matches!(row_args(&abc(), &["X"]), Err(BeamerError::OutputNotFound(_))));
        assert!(matches!(row_args(&abc(), &["4"]), Err(BeamerError::OutputNotFound(_))));
        assert!(matches!(row_args(&abc(), &["0"]), Err(BeamerError::OutputNotFound(_))));
    }
}
