//! Artifact writer
//!
//! Writes the generated documents as a set: every changed file is staged in
//! a temp file beside its target, then renamed into place. If a rename
//! fails, targets already replaced are restored to their previous content
//! (or removed when they did not exist before).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::local::{hash_bytes, hash_file, stage, write_atomic};
use crate::domain::ports::WriteStatus;
use crate::error::DeckhandResult;

/// One file to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
    /// Readable by the owner only (holds secrets)
    pub private: bool,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            private: false,
        }
    }

    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }
}

/// Write all artifacts or none of them
pub fn write_all(artifacts: &[Artifact]) -> DeckhandResult<Vec<WriteStatus>> {
    let mut statuses = Vec::with_capacity(artifacts.len());
    let mut staged = Vec::new();

    for artifact in artifacts {
        // Unreadable targets count as changed; the commit step reports the error
        let existing = hash_file(&artifact.path).ok().flatten();
        let wanted = hash_bytes(artifact.content.as_bytes());
        if existing.as_deref() == Some(wanted.as_str()) {
            statuses.push(WriteStatus::Unchanged);
            continue;
        }
        statuses.push(WriteStatus::Written);
        let tmp = stage(&artifact.path, &artifact.content)?;
        set_mode(tmp.path(), artifact.private)?;
        staged.push((artifact, tmp));
    }

    let mut committed: Vec<(&Path, Option<Vec<u8>>)> = Vec::new();
    for (artifact, tmp) in staged {
        let previous = match fs::read(&artifact.path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                roll_back(&committed);
                return Err(e.into());
            }
        };
        if let Err(e) = tmp.persist(&artifact.path) {
            roll_back(&committed);
            return Err(e.error.into());
        }
        info!(path = %artifact.path.display(), "wrote artifact");
        committed.push((&artifact.path, previous));
    }

    Ok(statuses)
}

fn roll_back(committed: &[(&Path, Option<Vec<u8>>)]) {
    for (path, previous) in committed.iter().rev() {
        let restored = match previous {
            Some(bytes) => write_atomic(path, &String::from_utf8_lossy(bytes)),
            None => fs::remove_file(path),
        };
        if let Err(e) = restored {
            warn!(path = %path.display(), error = %e, "could not roll back artifact");
        }
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, private: bool) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mode = if private { 0o600 } else { 0o644 };
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _private: bool) -> io::Result<()> {
    Ok(())
}
