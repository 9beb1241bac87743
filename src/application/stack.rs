//! Stack Use Case
//!
//! Prerequisite checks and `docker compose` operations on the generated
//! files. Service names are read back from the compose file on disk so
//! `status` reflects what was actually written.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::domain::ports::{CommandRunner, EventSink};
use crate::domain::services::compose_services;
use crate::error::{DeckhandError, DeckhandResult};
use crate::infrastructure::prerequisites::{self, PrerequisiteReport};
use crate::infrastructure::runtime::{ComposeProject, DockerCompose, DEFAULT_RETRY_DELAY};

/// Running state of the declared containers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackStatus {
    pub running: Vec<String>,
    pub missing: Vec<String>,
}

impl StackStatus {
    pub fn is_healthy(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Asked with the missing tool names; `Ok(true)` installs them
pub type InstallDecision<'d> = &'d mut dyn FnMut(&[&str]) -> DeckhandResult<bool>;

pub struct StackUseCase<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    events: &'a dyn EventSink,
    retry_delay: Duration,
}

impl<'a, R: CommandRunner + ?Sized> StackUseCase<'a, R> {
    pub fn new(runner: &'a R, events: &'a dyn EventSink) -> Self {
        Self {
            runner,
            events,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    fn compose(&self, project: &ComposeProject) -> DockerCompose<'a, R> {
        DockerCompose::new(self.runner, project.clone(), self.events)
            .with_retry_delay(self.retry_delay)
    }

    /// Detect docker; offer installation when `decide` is given
    pub fn ensure_prerequisites(
        &self,
        decide: Option<InstallDecision<'_>>,
    ) -> DeckhandResult<PrerequisiteReport> {
        let report = prerequisites::detect(self.runner)?;
        let Some(err) = report.to_error() else {
            return Ok(report);
        };
        let Some(decide) = decide else {
            return Err(err);
        };
        if !decide(&report.missing())? {
            return Err(err);
        }

        prerequisites::install(self.runner)?;
        let report = prerequisites::detect(self.runner)?;
        match report.to_error() {
            Some(err) => Err(err),
            None => {
                info!("docker installed");
                Ok(report)
            }
        }
    }

    /// Start the stack and confirm the expected containers are running
    pub fn up(&self, project: &ComposeProject) -> DeckhandResult<StackStatus> {
        let expected = declared_services(&project.compose_file)?;
        let compose = self.compose(project);
        compose.up()?;
        let (running, missing) = compose.check_running(&expected)?;
        Ok(StackStatus { running, missing })
    }

    pub fn down(&self, project: &ComposeProject) -> DeckhandResult<()> {
        self.compose(project).down()
    }

    pub fn pull(&self, project: &ComposeProject) -> DeckhandResult<()> {
        self.compose(project).pull()
    }

    pub fn status(&self, project: &ComposeProject) -> DeckhandResult<StackStatus> {
        let expected = declared_services(&project.compose_file)?;
        let (running, missing) = self.compose(project).check_running(&expected)?;
        Ok(StackStatus { running, missing })
    }
}

/// Services declared by the compose file on disk
pub fn declared_services(compose_file: &Path) -> DeckhandResult<Vec<String>> {
    match fs::read_to_string(compose_file) {
        Ok(text) => compose_services(&text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(DeckhandError::NotFound {
            path: compose_file.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}
