//! Windows-compatible test environment helpers.
//!
//! On Windows, `dirs::home_dir()` uses the system API rather than `HOME` or
//! `USERPROFILE`, so setting those has no effect there. `DECKHAND_TEST_HOME`
//! overrides the home directory on every platform.

use std::path::Path;
use std::process::Command;

pub trait WindowsCompatExt {
    /// Point every home lookup at `home`.
    ///
    /// This sets:
    /// - `HOME` (Unix)
    /// - `USERPROFILE` (Windows fallback for some crates)
    /// - `DECKHAND_TEST_HOME` (overrides `dirs::home_dir()` for `~` expansion)
    fn with_test_home(&mut self, home: &Path) -> &mut Self;
}

impl WindowsCompatExt for Command {
    fn with_test_home(&mut self, home: &Path) -> &mut Self {
        self.env("HOME", home)
            .env("USERPROFILE", home)
            .env("DECKHAND_TEST_HOME", home)
    }
}
