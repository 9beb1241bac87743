//! JSON Event Sink
//!
//! Outputs pipeline events as NDJSON for CI/automation consumption.

use crate::domain::ports::{EventSink, PipelineEvent};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl EventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        let command = self.command;
        let json = match event {
            PipelineEvent::LayerLoaded { source, keys } => serde_json::json!({
                "event": "layer_loaded",
                "command": command,
                "source": source,
                "keys": keys,
            }),

            PipelineEvent::LayerMissing { path } => serde_json::json!({
                "event": "layer_missing",
                "command": command,
                "path": path.display().to_string(),
            }),

            PipelineEvent::SecretGenerated { key } => serde_json::json!({
                "event": "secret_generated",
                "command": command,
                "key": key,
            }),

            PipelineEvent::Validated => serde_json::json!({
                "event": "validated",
                "command": command,
            }),

            PipelineEvent::ArtifactWritten { path, status } => serde_json::json!({
                "event": "artifact",
                "command": command,
                "path": path.display().to_string(),
                "status": status.as_str(),
            }),

            PipelineEvent::ConfigSaved { path } => serde_json::json!({
                "event": "config_saved",
                "command": command,
                "path": path.display().to_string(),
            }),

            PipelineEvent::RuntimeStarted { command: invocation } => serde_json::json!({
                "event": "runtime_start",
                "command": command,
                "invocation": invocation,
            }),

            PipelineEvent::RuntimeRetry {
                command: invocation,
                stderr,
            } => serde_json::json!({
                "event": "runtime_retry",
                "command": command,
                "invocation": invocation,
                "stderr": stderr,
            }),

            PipelineEvent::ContainersChecked { running, missing } => serde_json::json!({
                "event": "containers",
                "command": command,
                "running": running,
                "missing": missing,
            }),
        };

        self.write_event(json);
    }
}
