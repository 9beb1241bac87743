//! Container runtime
//!
//! - `system`: runs real processes
//! - `compose`: `docker compose` operations on the generated files

mod compose;
mod system;

pub use compose::{ComposeProject, DockerCompose, DEFAULT_PROJECT_NAME, DEFAULT_RETRY_DELAY};
pub use system::SystemRunner;
