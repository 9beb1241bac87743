//! `docker compose` driver
//!
//! Every invocation names the project, the compose file and the env file
//! explicitly so the generated pair is used regardless of the working
//! directory. A failed invocation is retried once after a fixed delay.

use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::domain::ports::{
    display_command, CommandOutput, CommandRunner, EventSink, PipelineEvent,
};
use crate::error::{DeckhandError, DeckhandResult};

pub const DEFAULT_PROJECT_NAME: &str = "deckhand";
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

const DOCKER: &str = "docker";

/// The generated files a compose project runs from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeProject {
    pub name: String,
    pub compose_file: PathBuf,
    pub env_file: PathBuf,
}

impl ComposeProject {
    pub fn new(name: impl Into<String>, compose_file: &Path, env_file: &Path) -> Self {
        Self {
            name: name.into(),
            compose_file: compose_file.to_path_buf(),
            env_file: env_file.to_path_buf(),
        }
    }
}

pub struct DockerCompose<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    project: ComposeProject,
    events: &'a dyn EventSink,
    retry_delay: Duration,
}

impl<'a, R: CommandRunner + ?Sized> DockerCompose<'a, R> {
    pub fn new(runner: &'a R, project: ComposeProject, events: &'a dyn EventSink) -> Self {
        Self {
            runner,
            project,
            events,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn project(&self) -> &ComposeProject {
        &self.project
    }

    /// `docker compose ... up -d`
    pub fn up(&self) -> DeckhandResult<()> {
        self.compose(&["up", "-d"]).map(|_| ())
    }

    /// `docker compose ... down`
    pub fn down(&self) -> DeckhandResult<()> {
        self.compose(&["down"]).map(|_| ())
    }

    /// `docker compose ... pull`
    pub fn pull(&self) -> DeckhandResult<()> {
        self.compose(&["pull"]).map(|_| ())
    }

    /// Names of all running containers
    pub fn running_containers(&self) -> DeckhandResult<Vec<String>> {
        let args = vec![
            "ps".to_string(),
            "--format".to_string(),
            "{{.Names}}".to_string(),
        ];
        let output = self.invoke(&args)?;
        Ok(output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Split `expected` into running and missing containers
    pub fn check_running(&self, expected: &[String]) -> DeckhandResult<(Vec<String>, Vec<String>)> {
        let running = self.running_containers()?;
        let (up, missing): (Vec<String>, Vec<String>) = expected
            .iter()
            .cloned()
            .partition(|name| running.contains(name));
        if !missing.is_empty() {
            warn!(missing = ?missing, "containers not running after start");
        }
        self.events.on_event(PipelineEvent::ContainersChecked {
            running: up.clone(),
            missing: missing.clone(),
        });
        Ok((up, missing))
    }

    fn compose_args(&self, action: &[&str]) -> Vec<String> {
        let mut args = vec![
            "compose".to_string(),
            "--project-name".to_string(),
            self.project.name.clone(),
            "--file".to_string(),
            self.project.compose_file.display().to_string(),
            "--env-file".to_string(),
            self.project.env_file.display().to_string(),
        ];
        args.extend(action.iter().map(|a| a.to_string()));
        args
    }

    fn compose(&self, action: &[&str]) -> DeckhandResult<CommandOutput> {
        let args = self.compose_args(action);
        self.invoke(&args)
    }

    fn invoke(&self, args: &[String]) -> DeckhandResult<CommandOutput> {
        let command = display_command(DOCKER, args);
        self.events.on_event(PipelineEvent::RuntimeStarted {
            command: command.clone(),
        });

        let first = self.attempt(args)?;
        if first.success() {
            return Ok(first);
        }

        warn!(
            command = %command,
            status = ?first.status,
            delay_ms = self.retry_delay.as_millis() as u64,
            "runtime command failed, retrying once"
        );
        self.events.on_event(PipelineEvent::RuntimeRetry {
            command: command.clone(),
            stderr: first.stderr.trim().to_string(),
        });
        thread::sleep(self.retry_delay);

        let second = self.attempt(args)?;
        if second.success() {
            info!(command = %command, "runtime command succeeded on retry");
            return Ok(second);
        }
        Err(DeckhandError::RuntimeInvocation {
            command,
            status: second.status,
            stderr: second.stderr.trim().to_string(),
        })
    }

    fn attempt(&self, args: &[String]) -> DeckhandResult<CommandOutput> {
        match self.runner.run(DOCKER, args) {
            Ok(output) => Ok(output),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(DeckhandError::MissingPrerequisite {
                    tool: DOCKER.to_string(),
                    hint: "not found on PATH; run `deckhand setup` to install it".to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}
