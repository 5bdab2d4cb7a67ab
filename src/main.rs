//! Beamer CLI entry point.
//!
//! This binary provides the `beamer` command for arranging connected
//! outputs with xrandr.

use beamer::cli::{Action, Cli};
use beamer::layout::Arrangement;
use beamer::config::Config;
use beamer::error::Result;
use beamer::{listing, loader, model, retry, xrandr, DisplayTool, Xrandr};
use clap::Parser;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = loader::load_default_config()?;
    let tool = Xrandr::new(&config.defaults.program).with_echo(config.defaults.echo && !cli.quiet);

    let action = cli.action();
    let step = || match action.arrangement() {
        Some(arrangement) => apply(&cli, &config, &tool, arrangement),
        None if action == Action::Presets => {
            print_presets(&config);
            Ok(())
        }
        None => print_info(&tool),
    };

    if cli.retry {
        retry::retry(
            config.defaults.retry_attempts,
            config.defaults.retry_delay(),
            step,
        )
    } else {
        step()
    }
}

/// Print connected outputs with their modes.
fn print_info(tool: &impl DisplayTool) -> Result<()> {
    let outputs = xrandr::query_outputs(tool)?;
    print!(
        "{}",
        listing::render(&model::connected(&outputs), listing::terminal_width())
    );
    Ok(())
}

/// Print all row presets.
fn print_presets(config: &Config) {
    for name in config.list_rows() {
        let row = config.get_row(&name).unwrap_or_default();
        println!("  @{}: {}", name, row.join(" "));
    }
}

/// Query outputs, build the command for `arrangement` and run it.
fn apply(cli: &Cli, config: &Config, tool: &Xrandr, arrangement: Arrangement) -> Result<()> {
    let arrangement = match arrangement {
        Arrangement::Row(row) => Arrangement::Row(config.expand_row(&row)?),
        other => other,
    };
    let outputs = xrandr::query_outputs(tool)?;
    let args = arrangement.args(&outputs)?;

    if arrangement == Arrangement::Clone && tool.echo() {
        println!("Cloning to {} outputs.", model::connected(&outputs).len());
    }
    if cli.dry_run {
        println!("{}", tool.command_line(&args));
        return Ok(());
    }
    tool.reconfigure(&args)?;
    Ok(())
}
