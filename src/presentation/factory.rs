//! Use Case Factory
//!
//! Creates use cases and their inputs with infrastructure dependencies
//! wired up. This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{ConfigureOptions, ConfigureUseCase, COMPOSE_FILE, ENV_FILE};
use crate::infrastructure::fs::expand_home;
use crate::infrastructure::{ComposeProject, TomlConfigRepository};

use super::cli::OverrideArgs;

/// Type alias for the concrete ConfigureUseCase
pub type ConcreteConfigureUseCase = ConfigureUseCase<TomlConfigRepository>;

/// Create a configure use case backed by `deckhand.toml`
pub fn create_configure_use_case() -> ConcreteConfigureUseCase {
    ConfigureUseCase::new(TomlConfigRepository::new())
}

/// Configure options from command-line overrides
///
/// A leading `~` in `--config` and `--output-dir` is expanded. Malformed
/// `--set` assignments travel with the options so they are reported together
/// with the issues of every other layer.
pub fn configure_options(overrides: &OverrideArgs) -> ConfigureOptions {
    let (flags, rejected) = overrides.split_layer();
    ConfigureOptions::new(expand_home(&overrides.output_dir))
        .with_config_path(expand_home(&overrides.config))
        .with_flags(flags)
        .with_rejected_flags(rejected)
}

/// Compose project for the files in `output_dir`
pub fn compose_project(output_dir: &Path, name: &str) -> ComposeProject {
    let dir = expand_home(output_dir);
    ComposeProject::new(name, &dir.join(COMPOSE_FILE), &dir.join(ENV_FILE))
}
