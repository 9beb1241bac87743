//! Local file helpers: atomic writes and content hashes.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

/// Content hash in `sha256:<hex>` form
pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}

/// Hash of a file, or `None` when it does not exist
pub fn hash_file(path: &Path) -> io::Result<Option<String>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(hash_bytes(&bytes))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// File contents, or `None` when it does not exist
pub fn read_optional(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write `content` into a temp file next to `path`, not yet in place
pub fn stage(path: &Path, content: &str) -> io::Result<NamedTempFile> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}

/// Write a file atomically (temp file + rename)
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let tmp = stage(path, content)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_atomic_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested").join("deckhand.toml");

        write_atomic(&file, "content").unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "content");
    }

    #[test]
    fn write_atomic_overwrites() {
        let dir = tempdir().unwrap();
        let file = dir.path().join(".env");
        write_atomic(&file, "A=1\n").unwrap();
        write_atomic(&file, "A=2\n").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "A=2\n");
    }

    #[test]
    fn hash_has_prefix_and_hex() {
        let hash = hash_bytes(b"hello");
        assert!(hash.starts_with("sha256:"));
        assert_eq!(hash.len(), 7 + 64);
    }

    #[test]
    fn missing_files_hash_to_none() {
        let dir = tempdir().unwrap();
        assert_eq!(hash_file(&dir.path().join("nope")).unwrap(), None);
        assert_eq!(read_optional(&dir.path().join("nope")).unwrap(), None);
    }
}
