//! Configure Use Case
//!
//! Orchestrates the configuration pipeline:
//! 1. Load the persisted layer (absent is fine)
//! 2. Run the interview, when a prompter is given
//! 3. Merge defaults < persisted < flags < interactive; rejected input from
//!    the file and the command line is reported together
//! 4. Provision the session secret if none is set
//! 5. Validate
//! 6. Render both documents
//! 7. Write them as a pair, then persist the configuration
//!
//! Nothing is written unless every earlier step succeeded.

use std::path::PathBuf;

use rand::Rng;
use tracing::{debug, info};

use crate::domain::ports::{ConfigRepository, EventSink, PipelineEvent, Prompter};
use crate::domain::registry::{self, keys};
use crate::domain::services::{
    ensure_secret, expected_containers, interview, merge, merge_traced, normalize_layer,
    render_all, validate, TracedConfig,
};
use crate::domain::services::renderer::References;
use crate::domain::value_objects::{ConfigValue, LayerSource};
use crate::error::{DeckhandError, DeckhandResult};
use crate::infrastructure::fs::{read_optional, write_all, Artifact};

use super::options::ConfigureOptions;
use super::result::{ArtifactPreview, ConfigureResult};

pub struct ConfigureUseCase<CR: ConfigRepository> {
    config_repo: CR,
}

impl<CR: ConfigRepository> ConfigureUseCase<CR> {
    pub fn new(config_repo: CR) -> Self {
        Self { config_repo }
    }

    /// Persisted layer, or `None` when the file does not exist yet
    pub fn load_persisted(
        &self,
        options: &ConfigureOptions,
        events: &dyn EventSink,
    ) -> DeckhandResult<Option<ConfigValue>> {
        match self.config_repo.load(options.config_path()) {
            Ok(persisted) => {
                events.on_event(PipelineEvent::LayerLoaded {
                    source: LayerSource::Persisted,
                    keys: persisted.len(),
                });
                Ok(Some(persisted))
            }
            Err(DeckhandError::NotFound { path }) => {
                debug!(path = %path.display(), "no persisted config, starting from defaults");
                events.on_event(PipelineEvent::LayerMissing { path });
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Merge every layer, asking the operator first when `prompter` is set
    pub fn resolve(
        &self,
        options: &ConfigureOptions,
        prompter: Option<&mut dyn Prompter>,
        events: &dyn EventSink,
    ) -> DeckhandResult<TracedConfig> {
        let defaults = registry::get_defaults();
        let mut issues = Vec::new();
        let persisted = match self.load_persisted(options, events) {
            Ok(persisted) => persisted,
            Err(DeckhandError::Parse(mut found)) => {
                issues.append(&mut found);
                None
            }
            Err(e) => return Err(e),
        };
        issues.extend(options.rejected_flags.iter().cloned());
        if !issues.is_empty() {
            if let Err(mut rejected) = normalize_layer(&options.flags) {
                issues.append(&mut rejected);
            }
            return Err(DeckhandError::Parse(issues));
        }

        events.on_event(PipelineEvent::LayerLoaded {
            source: LayerSource::Flags,
            keys: options.flags.len(),
        });

        let answers = match prompter {
            Some(prompter) => {
                let current = merge(&defaults, persisted.as_ref(), &options.flags, None)?;
                let answers = interview(&current, &options.flags, prompter)?;
                events.on_event(PipelineEvent::LayerLoaded {
                    source: LayerSource::Interactive,
                    keys: answers.len(),
                });
                Some(answers)
            }
            None => None,
        };

        merge_traced(&defaults, persisted.as_ref(), &options.flags, answers.as_ref())
    }

    /// Merge, validate and resolve service addresses without writing anything
    pub fn check(
        &self,
        options: &ConfigureOptions,
        events: &dyn EventSink,
    ) -> DeckhandResult<TracedConfig> {
        let traced = self.resolve(options, None, events)?;
        let issues = validate(&traced.config);
        if !issues.is_empty() {
            return Err(DeckhandError::Validation(issues));
        }
        References::resolve(&traced.config)?;
        events.on_event(PipelineEvent::Validated);
        Ok(traced)
    }

    /// Run the whole pipeline
    pub fn execute<R: Rng + ?Sized>(
        &self,
        options: &ConfigureOptions,
        prompter: Option<&mut dyn Prompter>,
        events: &dyn EventSink,
        rng: &mut R,
    ) -> DeckhandResult<ConfigureResult> {
        let TracedConfig {
            mut config,
            mut sources,
        } = self.resolve(options, prompter, events)?;

        let secret_generated = match ensure_secret(&config, rng) {
            Some(with_secret) => {
                config = with_secret;
                sources.insert(keys::WEBUI_SECRET_KEY.to_string(), LayerSource::Defaults);
                events.on_event(PipelineEvent::SecretGenerated {
                    key: keys::WEBUI_SECRET_KEY.to_string(),
                });
                true
            }
            None => false,
        };

        let issues = validate(&config);
        if !issues.is_empty() {
            return Err(DeckhandError::Validation(issues));
        }
        events.on_event(PipelineEvent::Validated);

        let rendered = render_all(&config)?;
        let artifacts = [
            Artifact::new(options.compose_path(), rendered.compose.to_text()),
            Artifact::new(options.env_path(), rendered.env.to_text()).private(),
        ];

        let mut previews = Vec::with_capacity(artifacts.len());
        for artifact in &artifacts {
            previews.push(ArtifactPreview {
                path: artifact.path.clone(),
                current: read_optional(&artifact.path)?,
                rendered: artifact.content.clone(),
            });
        }

        let mut result = ConfigureResult {
            expected_containers: expected_containers(&config)
                .into_iter()
                .map(str::to_string)
                .collect(),
            config,
            sources,
            previews,
            secret_generated,
            ..Default::default()
        };

        if options.dry_run {
            debug!("dry run, leaving files untouched");
            return Ok(result);
        }

        let statuses = write_all(&artifacts)?;
        for (artifact, status) in artifacts.iter().zip(statuses) {
            events.on_event(PipelineEvent::ArtifactWritten {
                path: artifact.path.clone(),
                status,
            });
            result.written.push((artifact.path.clone(), status));
        }

        self.config_repo.save(&result.config, options.config_path())?;
        let saved: PathBuf = options.config_path().to_path_buf();
        info!(path = %saved.display(), "configuration saved");
        events.on_event(PipelineEvent::ConfigSaved {
            path: saved.clone(),
        });
        result.saved_to = Some(saved);

        Ok(result)
    }
}
