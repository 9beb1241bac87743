//! Configure Options

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{Layer, LayerSource};
use crate::error::ParseIssue;
use crate::infrastructure::config::DEFAULT_CONFIG_FILE;

pub const COMPOSE_FILE: &str = "docker-compose.yml";
pub const ENV_FILE: &str = ".env";

/// Options for the configure use case
#[derive(Debug, Clone)]
pub struct ConfigureOptions {
    /// Persisted config file
    pub config_path: PathBuf,
    /// Directory receiving `docker-compose.yml` and `.env`
    pub output_dir: PathBuf,
    /// Command-line overrides
    pub flags: Layer,
    /// Command-line assignments that could not be split into key and value
    pub rejected_flags: Vec<ParseIssue>,
    /// Render and report, but leave every file untouched
    pub dry_run: bool,
}

impl ConfigureOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            output_dir: output_dir.into(),
            flags: Layer::new(LayerSource::Flags),
            rejected_flags: Vec::new(),
            dry_run: false,
        }
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn with_flags(mut self, flags: Layer) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_rejected_flags(mut self, issues: Vec<ParseIssue>) -> Self {
        self.rejected_flags = issues;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn compose_path(&self) -> PathBuf {
        self.output_dir.join(COMPOSE_FILE)
    }

    pub fn env_path(&self) -> PathBuf {
        self.output_dir.join(ENV_FILE)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_paths_live_in_output_dir() {
        let options = ConfigureOptions::new("/srv/stack");
        assert_eq!(options.compose_path(), PathBuf::from("/srv/stack/docker-compose.yml"));
        assert_eq!(options.env_path(), PathBuf::from("/srv/stack/.env"));
        assert_eq!(options.config_path(), Path::new("deckhand.toml"));
        assert!(!options.dry_run);
        assert!(options.rejected_flags.is_empty());
    }
}
