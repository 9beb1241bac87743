//! Pipeline event port
//!
//! Observable progress of configure and runtime operations. The binary
//! turns events into terminal output or an NDJSON stream.

use std::path::PathBuf;

use crate::domain::value_objects::LayerSource;

/// Whether an artifact on disk changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    Unchanged,
}

impl WriteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Written => "written",
            Self::Unchanged => "unchanged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// A configuration layer was read
    LayerLoaded { source: LayerSource, keys: usize },

    /// The persisted config file did not exist
    LayerMissing { path: PathBuf },

    /// A secret was generated because none was configured
    SecretGenerated { key: String },

    /// Merged configuration passed validation
    Validated,

    /// An artifact was written (or left alone because it was identical)
    ArtifactWritten { path: PathBuf, status: WriteStatus },

    /// The persisted config was saved
    ConfigSaved { path: PathBuf },

    /// A container runtime command started
    RuntimeStarted { command: String },

    /// A container runtime command failed and will be retried
    RuntimeRetry { command: String, stderr: String },

    /// Running-state check after `up`
    ContainersChecked {
        running: Vec<String>,
        missing: Vec<String>,
    },
}

pub trait EventSink: Send + Sync {
    fn on_event(&self, event: PipelineEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}
}
