//! Deckhand - configurator for self-hosted Open WebUI stacks
//!
//! Deckhand gathers settings from defaults, a persisted `deckhand.toml`,
//! command-line flags and an optional interview, then renders a
//! `docker-compose.yml` and a matching `.env` for Open WebUI and its
//! companion services (Ollama, SearXNG, Redis).

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use domain::registry::{get_defaults, keys};
pub use domain::services::{render_all, render_compose, render_env, validate};
pub use domain::value_objects::{ConfigValue, Layer, LayerSource, Value};
pub use error::{DeckhandError, DeckhandResult, ParseIssue};
