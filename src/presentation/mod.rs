//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Commands, global flags and the command-line layer
//! - `factory` - Creates use cases with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, OverrideArgs, StackArgs};
pub use factory::{compose_project, configure_options, create_configure_use_case};
