//! Process runner backed by `std::process::Command`.

use std::io;
use std::process::Command;

use tracing::trace;

use crate::domain::ports::{display_command, CommandOutput, CommandRunner};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        trace!(command = %display_command(program, args), "spawning");
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
