//! Configure Module
//!
//! Turns layered settings into the generated compose/env pair.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`ConfigureOptions`)
//! - `result` - Result types (`ConfigureResult`, `ArtifactPreview`)
//! - `use_case` - Core use case logic (`ConfigureUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use deckhand::application::configure::{ConfigureOptions, ConfigureUseCase};
//! use deckhand::infrastructure::TomlConfigRepository;
//!
//! let use_case = ConfigureUseCase::new(TomlConfigRepository::new());
//! let result = use_case.execute(&ConfigureOptions::new("."), None, &events, &mut rng)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{ConfigureOptions, COMPOSE_FILE, ENV_FILE};
pub use result::{ArtifactPreview, ConfigureResult};
pub use use_case::ConfigureUseCase;
