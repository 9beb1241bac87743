//! File system helpers: home expansion, atomic writes, artifact sets.

mod artifacts;
mod home;
mod local;

pub use artifacts::{write_all, Artifact};
pub use home::{deckhand_home_dir, expand_home, DECKHAND_TEST_HOME_VAR};
pub use local::{hash_bytes, hash_file, read_optional, write_atomic};
