//! Content fingerprints for change detection.
//!
//! Two independent fingerprints feed cache keys: one over the settings
//! document, one over the playing media file. They are never combined or
//! compared to each other. Identical bytes always produce identical
//! fingerprints regardless of path or filename; any byte change changes
//! the digest. This is change detection, not security.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{PanelError, PanelResult};

/// Opaque lowercase-hex digest of a byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fixed stand-in used when the settings document cannot be read or
    /// parsed. Artifact reuse is disabled separately whenever this is in
    /// play; it only keeps render output names well formed.
    pub fn unavailable() -> Self {
        Self("noconfig".to_string())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Digest the full contents of the file at `path`.
///
/// Either the whole stream is consumed or the call fails: a partially
/// read file never yields a fingerprint.
pub fn fingerprint_file(path: &Path) -> PanelResult<Fingerprint> {
    let mut file = File::open(path).map_err(|e| PanelError::io(path, e))?;
    let mut hasher = blake3::Hasher::new();
    io::copy(&mut file, &mut hasher).map_err(|e| PanelError::io(path, e))?;
    Ok(Fingerprint(hasher.finalize().to_hex().to_string()))
}

/// Digest an in-memory document (the settings bytes, already read once
/// for parsing).
pub fn fingerprint_bytes(bytes: &[u8]) -> Fingerprint {
    Fingerprint(blake3::hash(bytes).to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn identical_bytes_give_identical_fingerprints() {
        assert_eq!(fingerprint_bytes(b"abc"), fingerprint_bytes(b"abc"));
        assert_ne!(fingerprint_bytes(b"abc"), fingerprint_bytes(b"abd"));
        assert_ne!(fingerprint_bytes(b"abc"), fingerprint_bytes(b"abc\n"));
    }

    #[test]
    fn file_fingerprint_is_path_independent() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("first.flac");
        let b = dir.path().join("renamed elsewhere.flac");
        fs::write(&a, b"same audio bytes").unwrap();
        fs::write(&b, b"same audio bytes").unwrap();

        assert_eq!(
            fingerprint_file(&a).unwrap(),
            fingerprint_file(&b).unwrap()
        );
    }

    #[test]
    fn file_fingerprint_matches_byte_fingerprint() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("doc.toml");
        fs::write(&p, b"show_legend = true").unwrap();

        assert_eq!(
            fingerprint_file(&p).unwrap(),
            fingerprint_bytes(b"show_legend = true")
        );
    }

    #[test]
    fn fingerprint_is_lowercase_hex() {
        let fp = fingerprint_bytes(b"x");
        assert!(!fp.as_str().is_empty());
        assert!(
            fp.as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = fingerprint_file(&dir.path().join("gone.mp3")).unwrap_err();
        assert!(matches!(err, PanelError::Io { .. }));
    }
}
