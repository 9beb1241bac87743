//! Command runner port
//!
//! External tools (`docker`, `sh`) are only reached through this trait, so
//! prerequisite checks and runtime operations can be tested with a script of
//! canned outputs.

use std::io;

/// Captured result of one process run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

pub trait CommandRunner {
    /// Run `program` with `args` and capture its output.
    ///
    /// `Err` with kind `NotFound` means the program is not installed.
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Render a command line for messages and logs
pub fn display_command(program: &str, args: &[String]) -> String {
    let mut out = program.to_string();
    for arg in args {
        out.push(' ');
        if arg.contains(' ') || arg.is_empty() {
            out.push('\'');
            out.push_str(arg);
            out.push('\'');
        } else {
            out.push_str(arg);
        }
    }
    out
}
