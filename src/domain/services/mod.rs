//! Domain Services
//!
//! Pure business logic over configuration values.
//! These services have no I/O dependencies and are easily testable.

pub mod interview;
pub mod layering;
pub mod renderer;
pub mod secrets;
pub mod validator;

pub use interview::{ask_option, interview, PromptResult};
pub use layering::{merge, merge_traced, normalize_entry, normalize_layer, TracedConfig};
pub use renderer::{
    compose_services, expected_containers, render_all, render_compose, render_env, Block,
    RenderedArtifacts, RenderedDocument,
};
pub use secrets::{ensure_secret, generate_secret};
pub use validator::validate;
