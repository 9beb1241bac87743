//! Prerequisite detection
//!
//! Deckhand needs `docker` and the `docker compose` plugin. Both are detected
//! through their version commands; a missing tool can be installed with the
//! upstream convenience script.

use std::io;

use tracing::{debug, info};

use crate::domain::ports::{display_command, CommandRunner};
use crate::error::{DeckhandError, DeckhandResult};

/// Upstream Docker convenience installer, run through `sh -c`
pub const INSTALL_SCRIPT: &str = "curl -fsSL https://get.docker.com | sh";

pub const DOCKER: &str = "docker";
pub const COMPOSE: &str = "docker compose";

/// Versions of the required tools; `None` when absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerequisiteReport {
    pub docker: Option<String>,
    pub compose: Option<String>,
}

impl PrerequisiteReport {
    pub fn missing(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.docker.is_none() {
            out.push(DOCKER);
        }
        if self.compose.is_none() {
            out.push(COMPOSE);
        }
        out
    }

    pub fn is_satisfied(&self) -> bool {
        self.docker.is_some() && self.compose.is_some()
    }

    /// `MissingPrerequisite` for the first absent tool
    pub fn to_error(&self) -> Option<DeckhandError> {
        let tool = self.missing().into_iter().next()?;
        Some(DeckhandError::MissingPrerequisite {
            tool: tool.to_string(),
            hint: "install Docker Engine with the compose plugin, or rerun \
                   `deckhand setup` interactively to install it"
                .to_string(),
        })
    }
}

fn version_of<R: CommandRunner + ?Sized>(
    runner: &R,
    args: &[&str],
) -> DeckhandResult<Option<String>> {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    match runner.run(DOCKER, &args) {
        Ok(output) if output.success() => {
            let version = output.stdout.lines().next().unwrap_or("").trim().to_string();
            debug!(command = %display_command(DOCKER, &args), version = %version, "found");
            Ok(Some(version))
        }
        Ok(output) => {
            debug!(
                command = %display_command(DOCKER, &args),
                status = ?output.status,
                "version check failed"
            );
            Ok(None)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Detect `docker --version` and `docker compose version`
pub fn detect<R: CommandRunner + ?Sized>(runner: &R) -> DeckhandResult<PrerequisiteReport> {
    let docker = version_of(runner, &["--version"])?;
    let compose = match docker {
        Some(_) => version_of(runner, &["compose", "version"])?,
        None => None,
    };
    Ok(PrerequisiteReport { docker, compose })
}

/// Run the convenience installer
pub fn install<R: CommandRunner + ?Sized>(runner: &R) -> DeckhandResult<()> {
    let args = vec!["-c".to_string(), INSTALL_SCRIPT.to_string()];
    let command = display_command("sh", &args);
    info!(command = %command, "installing docker");
    let output = runner.run("sh", &args).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            DeckhandError::MissingPrerequisite {
                tool: "sh".to_string(),
                hint: "a POSIX shell is needed to run the installer".to_string(),
            }
        } else {
            e.into()
        }
    })?;
    if !output.success() {
        return Err(DeckhandError::RuntimeInvocation {
            command,
            status: output.status,
            stderr: output.stderr.trim().to_string(),
        });
    }
    Ok(())
}
