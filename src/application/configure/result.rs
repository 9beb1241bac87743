//! Configure Result

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::ports::WriteStatus;
use crate::domain::value_objects::{ConfigValue, LayerSource};

/// A rendered document next to what is currently on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPreview {
    pub path: PathBuf,
    pub current: Option<String>,
    pub rendered: String,
}

impl ArtifactPreview {
    pub fn is_changed(&self) -> bool {
        self.current.as_deref() != Some(self.rendered.as_str())
    }
}

/// Result of a configure run
#[derive(Debug, Clone, Default)]
pub struct ConfigureResult {
    /// Merged, validated configuration (including a generated secret)
    pub config: ConfigValue,
    /// Layer that supplied each final value
    pub sources: BTreeMap<String, LayerSource>,
    /// Written artifacts; empty on a dry run
    pub written: Vec<(PathBuf, WriteStatus)>,
    /// Rendered documents with their on-disk counterparts
    pub previews: Vec<ArtifactPreview>,
    pub secret_generated: bool,
    /// Where the config was persisted; `None` on a dry run
    pub saved_to: Option<PathBuf>,
    /// Container names the compose file declares
    pub expected_containers: Vec<String>,
}

impl ConfigureResult {
    pub fn has_changes(&self) -> bool {
        self.previews.iter().any(ArtifactPreview::is_changed)
    }
}
