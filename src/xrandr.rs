//! Running the `xrandr` tool.
//!
//! The rest of the crate only talks to the display tool through the
//! [`DisplayTool`] trait, so layouts can be tested against recorded query
//! output. [`Xrandr`] is the real implementation and spawns the program via
//! [`std::process::Command`].

use crate::error::{BeamerError, Result};
use crate::model::Output;
use crate::parser::parse_query;
use log::debug;
use std::process::Command;

/// A display configuration tool that can be queried and reconfigured.
pub trait DisplayTool {
    /// Run the tool in query mode and return its output.
    fn query(&self) -> Result<String>;

    /// Run the tool with a full argument list (program name first) and
    /// return its output.
    fn reconfigure(&self, args: &[String]) -> Result<String>;
}

/// The `xrandr` binary.
#[derive(Debug, Clone)]
pub struct Xrandr {
    program: String,
    echo: bool,
}

impl Default for Xrandr {
    fn default() -> Self {
        Self::new(crate::layout::PROGRAM)
    }
}

impl Xrandr {
    /// Use `program` as the binary for all invocations.
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            echo: false,
        }
    }

    /// Print each reconfiguration command and its output.
    ///
    /// Queries are never echoed.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Whether reconfiguration commands are echoed.
    pub fn echo(&self) -> bool {
        self.echo
    }

    /// The command line [`DisplayTool::reconfigure`] runs for `args`, with
    /// the configured binary in place of `args[0]`.
    pub fn command_line(&self, args: &[String]) -> String {
        self.join(args.get(1..).unwrap_or_default())
    }

    fn join(&self, rest: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(rest.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run `self.program` with `args`, returning stdout and stderr combined.
    ///
    /// # Errors
    ///
    /// [`BeamerError::ToolInvocationError`] if the program cannot be spawned
    /// or exits unsuccessfully.
    fn run(&self, args: &[String], echo: bool) -> Result<String> {
        let command_line = self.join(args);
        debug!("running {}", command_line);
        if echo {
            println!("{}", command_line);
        }

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| BeamerError::ToolInvocationError {
                command: command_line.clone(),
                output: e.to_string(),
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(BeamerError::ToolInvocationError {
                command: command_line,
                output: text,
            });
        }
        if echo {
            print!("{}", text);
        }
        Ok(text)
    }
}

impl DisplayTool for Xrandr {
    fn query(&self) -> Result<String> {
        self.run(&["--query".to_string()], false)
    }

    /// The program name in `args[0]` is replaced by the configured binary.
    fn reconfigure(&self, args: &[String]) -> Result<String> {
        let (_, rest) = args
            .split_first()
            .ok_or_else(|| BeamerError::ToolInvocationError {
                command: self.program.clone(),
                output: "empty argument list".into(),
            })?;
        self.run(rest, self.echo)
    }
}

/// Query the tool and parse the result.
///
/// Always re-queries; outputs are never cached between commands.
pub fn query_outputs(tool: &impl DisplayTool) -> Result<Vec<Output>> {
    parse_query(&tool.query()?)
}
