//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on Windows, so integration tests point
//! `DECKHAND_TEST_HOME` at a temporary directory instead.

use std::path::{Path, PathBuf};

/// Environment variable for test isolation of home directory.
pub const DECKHAND_TEST_HOME_VAR: &str = "DECKHAND_TEST_HOME";

/// Home directory used for `~` expansion.
///
/// `DECKHAND_TEST_HOME` wins over the system home directory.
pub fn deckhand_home_dir() -> Option<PathBuf> {
    std::env::var(DECKHAND_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Expand a leading `~` or `~/`; other paths are returned unchanged
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };
    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/") {
        rest
    } else {
        return path.to_path_buf();
    };
    match deckhand_home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
