//! Error types shared across the plugin core.
//!
//! Nothing here is fatal to the hosting player: every failure is scoped
//! to one track-change cycle and surfaces to the user only as a missing
//! spectrogram.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures the core can hit while resolving or producing an artifact.
#[derive(Error, Debug)]
pub enum PanelError {
    /// A file could not be opened, read or hashed. The current cycle is
    /// abandoned; the next track-change event starts a fresh attempt.
    #[error("i/o failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external renderer did not start or exited abnormally. The
    /// panel falls back to placeholder/blank; there is no automatic retry.
    #[error("renderer failed: {0}")]
    Render(String),

    /// The settings document exists but does not parse. Callers fall back
    /// to defaults and must treat the configuration fingerprint as
    /// changed so a possibly-incompatible artifact is never reused.
    #[error("invalid settings document: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl PanelError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for plugin-core operations.
pub type PanelResult<T> = Result<T, PanelError>;
