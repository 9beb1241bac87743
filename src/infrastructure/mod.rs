//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `config/` - Persisted TOML configuration
//! - `events/` - Event sinks (NDJSON)
//! - `fs/` - Atomic writes and the artifact pair writer
//! - `prompt/` - Prompter implementations (dialoguer, line-based)
//! - `runtime/` - Process runner and `docker compose` driver
//! - `prerequisites` - Docker presence checks and installer

pub mod config;
pub mod events;
pub mod fs;
pub mod prerequisites;
pub mod prompt;
pub mod runtime;

// Re-export for convenience
pub use config::TomlConfigRepository;
pub use events::JsonEventSink;
pub use prompt::{DialoguerPrompter, LinePrompter};
pub use runtime::{ComposeProject, DockerCompose, SystemRunner};
