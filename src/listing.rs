//! The `info` listing of connected outputs and their modes.

use crate::model::Output;

const DEFAULT_WIDTH: usize = 80;

/// Width of the controlling terminal.
///
/// Falls back to `$COLUMNS`, then to 80, when stdout is not a terminal.
pub fn terminal_width() -> usize {
    let queried = crossterm::terminal::size().ok().map(|(cols, _)| usize::from(cols));
    pick_width(queried, std::env::var("COLUMNS").ok().as_deref())
}

fn pick_width(queried: Option<usize>, columns_var: Option<&str>) -> usize {
    queried
        .filter(|&w| w > 0)
        .or_else(|| columns_var.and_then(|c| c.trim().parse().ok()))
        .filter(|&w| w > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Lay out `cells` column-major in as many right-justified columns as fit
/// into `width`, like `ls` does.
pub fn columns(cells: &[String], width: usize, indent: &str, sep: &str) -> String {
    let Some(cell_width) = cells.iter().map(|c| c.chars().count()).max() else {
        return String::new();
    };
    let fit = width.saturating_sub(indent.len()) / (cell_width + sep.len());
    let cols = fit.max(1);
    let rows = cells.len().div_ceil(cols);

    (0..rows)
        .map(|row| {
            let line: Vec<String> = cells
                .iter()
                .skip(row)
                .step_by(rows)
                .map(|c| format!("{:>w$}", c, w = cell_width))
                .collect();
            format!("{}{}", indent, line.join(sep))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Mode labels for an output, `*` marking the active one.
pub fn mode_labels(output: &Output) -> Vec<String> {
    output
        .modes
        .iter()
        .map(|m| format!("{}{}", if m.active { "*" } else { "" }, m))
        .collect()
}

/// Render the listing: a numbered header per output followed by its modes.
///
/// Numbers start at 1, matching the positions accepted by `beamer row`.
pub fn render(outputs: &[&Output], width: usize) -> String {
    let mut text = String::new();
    for (index, output) in outputs.iter().enumerate() {
        text.push_str(&format!("{}: {}\n", index + 1, output.name));
        let modes = columns(&mode_labels(output), width, "  ", " ");
        if !modes.is_empty() {
            text.push_str(&modes);
            text.push('\n');
        }
    }
    text
}
