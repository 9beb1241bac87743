//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (registry, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ConfigureUseCase` - merge, validate, render, write, persist
//! - `StackUseCase` - prerequisites and `docker compose` operations

pub mod configure;
pub mod stack;

pub use configure::{
    ArtifactPreview, ConfigureOptions, ConfigureResult, ConfigureUseCase, COMPOSE_FILE, ENV_FILE,
};
pub use stack::{declared_services, InstallDecision, StackStatus, StackUseCase};
