//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod config_repository;
pub mod events;
pub mod prompter;

pub use command_runner::{display_command, CommandOutput, CommandRunner};
pub use config_repository::ConfigRepository;
pub use events::{EventSink, NoopEventSink, PipelineEvent, WriteStatus};
pub use prompter::{PromptKind, PromptRequest, Prompter};
